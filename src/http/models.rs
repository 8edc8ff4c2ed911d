use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::CompanyProfile;
use crate::session::Submission;
use crate::validation::ContactInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

/// Payload handed to the notification dispatcher. Every profile field is a
/// human-readable label, not a wire code, so the sales email needs no further
/// lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteNotification {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub employee_band_label: String,
    pub site_count: u32,
    pub sector_label: String,
    pub management_label: String,
    pub urgency_label: String,
    pub price_min: u64,
    pub price_max: u64,
}

impl QuoteNotification {
    pub fn contact(&self) -> ContactInfo {
        ContactInfo {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl From<&Submission> for QuoteNotification {
    fn from(s: &Submission) -> Self {
        Self {
            name: s.contact.name.clone(),
            email: s.contact.email.clone(),
            phone: s.contact.phone.clone(),
            employee_band_label: s.employees.label().to_string(),
            site_count: s.sites,
            sector_label: s.sector.label().to_string(),
            management_label: s.management.label().to_string(),
            urgency_label: s.urgency.label().to_string(),
            price_min: s.estimate.price_min,
            price_max: s.estimate.price_max,
        }
    }
}

/// Direct-to-mail request: raw profile plus contact. Client-computed prices
/// are not part of the contract; the estimate is recomputed server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendQuoteRequest {
    pub contact: ContactInfo,
    pub profile: CompanyProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
