use serde::Serialize;
use uuid::Uuid;

use crate::pricing::{
    self, CompanyProfile, EmployeeBand, Management, QuoteEstimate, Sector, Urgency,
};
use crate::validation::{self, ContactInfo, ValidationError};

/// One in-flight quote form. Edits never mutate in place: `apply` returns the
/// next state, and the estimate is always derived from the current profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    pub profile: CompanyProfile,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetEmployees(EmployeeBand),
    SetSites(u32),
    SetSector(Sector),
    SetManagement(Management),
    SetUrgency(Urgency),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, event: FormEvent) -> FormSession {
        let mut next = self.clone();
        match event {
            FormEvent::SetEmployees(band) => next.profile.employees = Some(band),
            FormEvent::SetSites(sites) => next.profile.sites = sites,
            FormEvent::SetSector(sector) => next.profile.sector = Some(sector),
            FormEvent::SetManagement(management) => next.profile.management = Some(management),
            FormEvent::SetUrgency(urgency) => next.profile.urgency = Some(urgency),
            FormEvent::SetName(name) => next.contact.name = name,
            FormEvent::SetEmail(email) => next.contact.email = email,
            FormEvent::SetPhone(phone) => next.contact.phone = phone,
        }
        next
    }

    /// Current estimate, `None` while the profile is incomplete.
    pub fn quote(&self) -> Option<QuoteEstimate> {
        pricing::estimate(&self.profile)
    }

    /// Validates the contact and freezes the session into a dispatchable
    /// submission. Fails with the first broken rule.
    pub fn submission(&self) -> Result<Submission, ValidationError> {
        validation::ensure_complete(&self.profile)?;
        validation::validate_contact(&self.contact)?;

        let employees = self
            .profile
            .employees
            .ok_or(ValidationError::IncompleteProfile)?;
        let sector = self
            .profile
            .sector
            .ok_or(ValidationError::IncompleteProfile)?;
        let management = self
            .profile
            .management
            .ok_or(ValidationError::IncompleteProfile)?;
        let urgency = self
            .profile
            .urgency
            .ok_or(ValidationError::IncompleteProfile)?;
        let estimate =
            pricing::estimate(&self.profile).ok_or(ValidationError::IncompleteProfile)?;

        Ok(Submission {
            id: Uuid::new_v4().to_string(),
            employees,
            sites: self.profile.sites,
            sector,
            management,
            urgency,
            contact: self.contact.clone(),
            estimate,
        })
    }
}

/// Validated profile + contact + estimate, immutable once created. Handed to
/// the notification dispatcher and forgotten.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub employees: EmployeeBand,
    pub sites: u32,
    pub sector: Sector,
    pub management: Management,
    pub urgency: Urgency,
    pub contact: ContactInfo,
    pub estimate: QuoteEstimate,
}
