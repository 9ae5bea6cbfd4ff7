//! Normalization of raw recommendation inputs into a canonical filter set.

use rust_decimal::Decimal;

/// Raw, possibly-absent recommendation inputs as they arrive off the wire.
#[derive(Debug, Clone, Default)]
pub struct RawCriteria {
    pub budget: Option<String>,
    pub budget_min: Option<String>,
    pub budget_max: Option<String>,
    pub interest: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub objective: Option<String>,
}

/// Canonical filter set for a single recommendation request.
///
/// Absent fields mean "no constraint". Textual fields are kept verbatim
/// (trimmed) rather than parsed into catalog enums: a request for an
/// unknown tier or category must narrow the result to the empty set, not
/// be silently widened into "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub budget_tier: Option<String>,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    pub interest: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub objective: Option<String>,
}

impl Criteria {
    /// Normalizes raw inputs.
    ///
    /// - Blank and whitespace-only strings are treated as absent.
    /// - `budget_min` / `budget_max` are parsed as decimals; a value that
    ///   fails to parse is dropped silently, leaving that bound
    ///   unconstrained rather than failing the request.
    /// - Nothing else is validated here. Nonsensical combinations (e.g.
    ///   `budget_min > budget_max`) pass through and yield empty result
    ///   sets downstream.
    pub fn from_raw(raw: RawCriteria) -> Self {
        Self {
            budget_tier: non_blank(raw.budget),
            budget_min: parse_bound(raw.budget_min),
            budget_max: parse_bound(raw.budget_max),
            interest: non_blank(raw.interest),
            country: non_blank(raw.country),
            location: non_blank(raw.location),
            objective: non_blank(raw.objective),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bound(value: Option<String>) -> Option<Decimal> {
    non_blank(value).and_then(|v| v.parse::<Decimal>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_absent() {
        let criteria = Criteria::from_raw(RawCriteria {
            budget: Some("  ".to_string()),
            interest: Some(String::new()),
            country: Some(" France ".to_string()),
            ..Default::default()
        });

        assert_eq!(criteria.budget_tier, None);
        assert_eq!(criteria.interest, None);
        assert_eq!(criteria.country.as_deref(), Some("France"));
    }

    #[test]
    fn test_budget_bounds_parse() {
        let criteria = Criteria::from_raw(RawCriteria {
            budget_min: Some("1200.50".to_string()),
            budget_max: Some("3000".to_string()),
            ..Default::default()
        });

        assert_eq!(criteria.budget_min, Some("1200.50".parse().unwrap()));
        assert_eq!(criteria.budget_max, Some("3000".parse().unwrap()));
    }

    #[test]
    fn test_unparseable_bound_is_dropped_silently() {
        let criteria = Criteria::from_raw(RawCriteria {
            budget_min: Some("cheap".to_string()),
            budget_max: Some("3000".to_string()),
            ..Default::default()
        });

        assert_eq!(criteria.budget_min, None);
        assert_eq!(criteria.budget_max, Some("3000".parse().unwrap()));
    }

    #[test]
    fn test_unknown_tier_passes_through() {
        // Kept verbatim so downstream filtering yields an empty set.
        let criteria = Criteria::from_raw(RawCriteria {
            budget: Some("luxury".to_string()),
            ..Default::default()
        });

        assert_eq!(criteria.budget_tier.as_deref(), Some("luxury"));
    }
}
