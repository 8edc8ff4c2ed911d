use serde::{Deserialize, Serialize};

/// Auditor daily rate, MXN.
pub const DAILY_RATE: f64 = 13_000.0;

/// Spread applied on top of the minimum price (10% range).
const PRICE_RANGE_FACTOR: f64 = 1.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeBand {
    #[serde(rename = "less-10")]
    LessThan10,
    #[serde(rename = "11-25")]
    From11To25,
    #[serde(rename = "26-50")]
    From26To50,
    #[serde(rename = "more-50")]
    MoreThan50,
}

impl EmployeeBand {
    /// Base audit days for the headcount band.
    pub fn base_days(&self) -> f64 {
        match self {
            EmployeeBand::LessThan10 => 5.0,
            EmployeeBand::From11To25 => 7.0,
            EmployeeBand::From26To50 => 9.5,
            EmployeeBand::MoreThan50 => 12.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeBand::LessThan10 => "Menos de 10 personas",
            EmployeeBand::From11To25 => "11 a 25 personas",
            EmployeeBand::From26To50 => "26 a 50 personas",
            EmployeeBand::MoreThan50 => "Más de 50 personas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Service,
    Commerce,
    Manufacturing,
    Other,
    Tech,
    Finance,
    Health,
}

impl Sector {
    pub fn multiplier(&self) -> f64 {
        match self {
            Sector::Service | Sector::Commerce => 1.0,
            Sector::Manufacturing | Sector::Other => 1.1,
            Sector::Tech | Sector::Finance | Sector::Health => 1.25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Service => "Servicios",
            Sector::Commerce => "Comercio",
            Sector::Manufacturing => "Manufactura",
            Sector::Other => "Otro",
            Sector::Tech => "Tecnología / Desarrollo de Software",
            Sector::Finance => "Finanzas / Seguros",
            Sector::Health => "Salud",
        }
    }
}

/// Whether the company already runs a management system (e.g. ISO 9001).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Management {
    Yes,
    No,
}

impl Management {
    pub fn multiplier(&self) -> f64 {
        match self {
            Management::Yes => 1.0,
            Management::No => 1.1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Management::Yes => "Sí",
            Management::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "more-6")]
    MoreThanSixMonths,
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "3-5-months")]
    ThreeToFiveMonths,
    #[serde(rename = "immediate")]
    Immediate,
}

impl Urgency {
    pub fn multiplier(&self) -> f64 {
        match self {
            Urgency::Immediate => 1.2,
            _ => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::MoreThanSixMonths => "Más de 6 meses (no me urge)",
            Urgency::SixMonths => "6 meses (tiempo promedio)",
            Urgency::ThreeToFiveMonths => "3 a 5 meses (express)",
            Urgency::Immediate => "Inmediato, me urge cuanto antes",
        }
    }
}

/// Company attributes driving the estimate. The four categorical fields start
/// unset; an unknown wire code is rejected at deserialization instead of
/// silently pricing with a neutral multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub employees: Option<EmployeeBand>,
    #[serde(default = "default_sites")]
    pub sites: u32,
    #[serde(default)]
    pub sector: Option<Sector>,
    #[serde(default)]
    pub management: Option<Management>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
}

fn default_sites() -> u32 {
    1
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            employees: None,
            sites: 1,
            sector: None,
            management: None,
            urgency: None,
        }
    }
}

impl CompanyProfile {
    pub fn is_complete(&self) -> bool {
        self.employees.is_some()
            && self.sector.is_some()
            && self.management.is_some()
            && self.urgency.is_some()
    }
}

/// Derived value, recomputed from the profile on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEstimate {
    pub audit_days: f64,
    pub price_min: u64,
    pub price_max: u64,
}

/// Pure estimator: base days scaled by the independent risk factors, plus one
/// extra day per site beyond the first, rounded to auditor half-days.
/// Returns `None` while any categorical field is unset.
pub fn estimate(profile: &CompanyProfile) -> Option<QuoteEstimate> {
    let employees = profile.employees?;
    let sector = profile.sector?;
    let management = profile.management?;
    let urgency = profile.urgency?;

    let mut days = employees.base_days()
        * sector.multiplier()
        * management.multiplier()
        * urgency.multiplier();

    // Sites below 1 behave as a single site.
    days += (profile.sites.max(1) - 1) as f64;

    let audit_days = (days * 2.0).round() / 2.0;

    let price_min = (audit_days * DAILY_RATE).round() as u64;
    let price_max = (price_min as f64 * PRICE_RANGE_FACTOR).round() as u64;

    Some(QuoteEstimate {
        audit_days,
        price_min,
        price_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> CompanyProfile {
        CompanyProfile {
            employees: Some(EmployeeBand::From11To25),
            sites: 1,
            sector: Some(Sector::Tech),
            management: Some(Management::No),
            urgency: Some(Urgency::SixMonths),
        }
    }

    #[test]
    fn test_reference_scenario() {
        // 7 * 1.25 * 1.1 * 1.0 = 9.625 -> 9.5 days
        let quote = estimate(&complete_profile()).unwrap();
        assert_eq!(quote.audit_days, 9.5);
        assert_eq!(quote.price_min, 123_500);
        assert_eq!(quote.price_max, 135_850);
    }

    #[test]
    fn test_incomplete_profile_has_no_estimate() {
        let mut profile = complete_profile();
        profile.sector = None;
        assert!(estimate(&profile).is_none());
        assert!(estimate(&CompanyProfile::default()).is_none());
    }

    #[test]
    fn test_price_range_is_ten_percent() {
        let bands = [
            EmployeeBand::LessThan10,
            EmployeeBand::From11To25,
            EmployeeBand::From26To50,
            EmployeeBand::MoreThan50,
        ];
        for band in bands {
            for sites in [1, 2, 5] {
                let mut profile = complete_profile();
                profile.employees = Some(band);
                profile.sites = sites;
                let quote = estimate(&profile).unwrap();
                assert!(quote.price_max >= quote.price_min);
                assert_eq!(
                    quote.price_max,
                    (quote.price_min as f64 * 1.10).round() as u64
                );
            }
        }
    }

    #[test]
    fn test_audit_days_are_half_day_multiples() {
        let sectors = [
            Sector::Service,
            Sector::Commerce,
            Sector::Manufacturing,
            Sector::Other,
            Sector::Tech,
            Sector::Finance,
            Sector::Health,
        ];
        for sector in sectors {
            for urgency in [Urgency::SixMonths, Urgency::Immediate] {
                let mut profile = complete_profile();
                profile.sector = Some(sector);
                profile.urgency = Some(urgency);
                let quote = estimate(&profile).unwrap();
                assert_eq!((quote.audit_days * 2.0).fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let profile = complete_profile();
        assert_eq!(estimate(&profile), estimate(&profile));
    }

    #[test]
    fn test_extra_sites_never_reduce_days() {
        let mut profile = complete_profile();
        let mut previous = estimate(&profile).unwrap().audit_days;
        for sites in 2..8 {
            profile.sites = sites;
            let days = estimate(&profile).unwrap().audit_days;
            assert!(days >= previous);
            previous = days;
        }
    }

    #[test]
    fn test_immediate_urgency_never_reduces_days() {
        for urgency in [
            Urgency::MoreThanSixMonths,
            Urgency::SixMonths,
            Urgency::ThreeToFiveMonths,
        ] {
            let mut profile = complete_profile();
            profile.urgency = Some(urgency);
            let relaxed = estimate(&profile).unwrap().audit_days;
            profile.urgency = Some(Urgency::Immediate);
            let urgent = estimate(&profile).unwrap().audit_days;
            assert!(urgent >= relaxed);
        }
    }

    #[test]
    fn test_zero_sites_clamps_to_one() {
        let mut profile = complete_profile();
        profile.sites = 0;
        assert_eq!(estimate(&profile), estimate(&complete_profile()));
    }

    #[test]
    fn test_unknown_wire_code_is_rejected() {
        let result = serde_json::from_str::<CompanyProfile>(
            r#"{"employees":"11-25","sector":"agriculture"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_wire_codes_roundtrip() {
        let profile: CompanyProfile = serde_json::from_str(
            r#"{"employees":"less-10","sites":3,"sector":"tech","management":"no","urgency":"immediate"}"#,
        )
        .unwrap();
        assert_eq!(profile.employees, Some(EmployeeBand::LessThan10));
        assert_eq!(profile.sites, 3);
        assert_eq!(profile.urgency, Some(Urgency::Immediate));
    }
}
