use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::CompanyProfile;

/// Consumer webmail providers rejected by the corporate-email policy. Matched
/// against the domain label immediately before the final dot, not the full
/// domain, so subdomain tricks like `user@mail.gmail.com` stay blocked.
const BLOCKED_PROVIDERS: [&str; 10] = [
    "gmail", "hotmail", "yahoo", "outlook", "live", "msn", "aol", "icloud", "me", "mac",
];

static EMAIL_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?\.[A-Za-z]{2,}$")
        .expect("email regex")
});

static PHONE_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("corporate email required")]
    CorporateEmailRequired,

    #[error("invalid phone")]
    InvalidPhone,

    #[error("company profile incomplete")]
    IncompleteProfile,

    #[error("site count must be at least 1")]
    InvalidSiteCount,
}

/// True when the address is syntactically valid and its provider label is not
/// a known consumer webmail service.
pub fn is_corporate_email(email: &str) -> bool {
    if !EMAIL_SYNTAX.is_match(email) {
        return false;
    }

    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let provider = labels[labels.len() - 2].to_ascii_lowercase();
    !BLOCKED_PROVIDERS.contains(&provider.as_str())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_SYNTAX.is_match(phone)
}

/// Contact rules checked in order; the first failure wins. Used unchanged by
/// both the form session and the HTTP boundary.
pub fn validate_contact(contact: &ContactInfo) -> Result<(), ValidationError> {
    if contact.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if !is_corporate_email(&contact.email) {
        return Err(ValidationError::CorporateEmailRequired);
    }
    if !is_valid_phone(&contact.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Boundary-side profile check for the direct-mail path.
pub fn ensure_complete(profile: &CompanyProfile) -> Result<(), ValidationError> {
    if profile.sites < 1 {
        return Err(ValidationError::InvalidSiteCount);
    }
    if !profile.is_complete() {
        return Err(ValidationError::IncompleteProfile);
    }
    Ok(())
}
