//! Rule-based candidate filtering for destinations, hotels and transport.
//!
//! Three independent pure operations over an in-memory catalog snapshot.
//! Each applies its rules as ANDed predicates and preserves storage order;
//! no scoring or ranking is involved.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::entities::{BudgetLevel, Destination, Hotel, Transport, TransportMode};
use crate::domain::rules::Criteria;

/// Filters destinations by every supplied criterion.
///
/// Inactive destinations never match. All other predicates apply only when
/// the corresponding criterion is present:
///
/// - `budget_min` / `budget_max`: the destination's own bounds must sit
///   within the requested range (a destination without a bound fails that
///   comparison),
/// - `budget_tier`: exact match on the budget level,
/// - `interest`: exact match on the category,
/// - `country`: case-insensitive substring of the country,
/// - `location`: case-insensitive substring of location, city or country,
/// - `objective`: membership in the supported objective set.
pub fn recommend_destinations(catalog: &[Destination], criteria: &Criteria) -> Vec<Destination> {
    catalog
        .iter()
        .filter(|d| matches_destination(d, criteria))
        .cloned()
        .collect()
}

fn matches_destination(destination: &Destination, criteria: &Criteria) -> bool {
    if !destination.is_active {
        return false;
    }

    if let Some(min) = criteria.budget_min
        && !destination.budget_min.is_some_and(|v| v >= min)
    {
        return false;
    }

    if let Some(max) = criteria.budget_max
        && !destination.budget_max.is_some_and(|v| v <= max)
    {
        return false;
    }

    if let Some(tier) = &criteria.budget_tier
        && destination.budget_level.as_str() != tier
    {
        return false;
    }

    if let Some(interest) = &criteria.interest
        && destination.category.as_str() != interest
    {
        return false;
    }

    if let Some(country) = &criteria.country
        && !contains_ignore_case(&destination.country, country)
    {
        return false;
    }

    if let Some(location) = &criteria.location {
        let hit = contains_ignore_case(&destination.location, location)
            || contains_ignore_case(&destination.city, location)
            || contains_ignore_case(&destination.country, location);
        if !hit {
            return false;
        }
    }

    if let Some(objective) = &criteria.objective
        && !destination.supports_objective(objective)
    {
        return false;
    }

    true
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Star band admitted for a budget tier.
///
/// Closed table: low stays in guest-house territory, medium is exactly
/// three stars, high gets the top band, and an unknown or absent tier
/// admits everything.
pub fn star_range(budget: Option<BudgetLevel>) -> RangeInclusive<i32> {
    match budget {
        Some(BudgetLevel::Low) => 1..=2,
        Some(BudgetLevel::Medium) => 3..=3,
        Some(BudgetLevel::High) => 4..=5,
        None => 1..=5,
    }
}

/// Filters a destination's hotels by budget tier.
///
/// Two independent ANDed predicates: stars within [`star_range`], and
/// `budget_category` equal to the tier when the tier is recognized. A
/// hotel whose stars fall in the band but whose category differs is
/// excluded, so the intersection can be empty even when the destination
/// has hotels. An absent or unrecognized tier skips the category predicate
/// and widens the star band to 1-5.
pub fn recommend_hotels(hotels: &[Hotel], budget: Option<&str>) -> Vec<Hotel> {
    let tier = budget.and_then(|b| BudgetLevel::from_str(b).ok());
    let stars = star_range(tier);

    hotels
        .iter()
        .filter(|h| stars.contains(&h.stars) && tier.is_none_or(|t| h.budget_category == t))
        .cloned()
        .collect()
}

/// Transport mode for a distance, by the fixed ladder:
/// under 200 km a bus, up to and including 1000 km a train, beyond that a
/// flight.
pub fn mode_for_distance(distance_km: i64) -> TransportMode {
    if distance_km < 200 {
        TransportMode::Bus
    } else if distance_km <= 1000 {
        TransportMode::Train
    } else {
        TransportMode::Flight
    }
}

/// Returns every transport record of the mode selected for the distance.
///
/// `budget` is accepted for signature parity with the other rules but does
/// not participate in filtering; no budget rule is defined for transport.
/// TODO: fold the budget tier into transport selection once a price rule
/// is decided.
pub fn recommend_transports(
    transports: &[Transport],
    distance_km: i64,
    _budget: Option<&str>,
) -> Vec<Transport> {
    let mode = mode_for_distance(distance_km);

    transports
        .iter()
        .filter(|t| t.mode == mode)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Objective, TravelCategory};
    use crate::domain::rules::RawCriteria;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn destination(id: i64, name: &str) -> Destination {
        Destination {
            id,
            name: name.to_string(),
            country: "Italy".to_string(),
            city: "Rome".to_string(),
            description: String::new(),
            location: "Lazio, central Italy".to_string(),
            category: TravelCategory::Historical,
            best_season: "Spring".to_string(),
            budget_level: BudgetLevel::Medium,
            budget_min: Some(Decimal::from(800)),
            budget_max: Some(Decimal::from(2000)),
            objectives_supported: vec![Objective::Leisure, Objective::Honeymoon],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn hotel(id: i64, stars: i32, category: BudgetLevel) -> Hotel {
        Hotel {
            id,
            destination_id: 1,
            name: format!("Hotel {id}"),
            stars,
            price_per_night: Decimal::from(90),
            budget_category: category,
            description: String::new(),
            amenities: String::new(),
            created_at: Utc::now(),
        }
    }

    fn transport(id: i64, mode: TransportMode) -> Transport {
        Transport {
            id,
            origin: "Rome".to_string(),
            destination: "Florence".to_string(),
            mode,
            distance_km: 270,
            price: Decimal::from(35),
            duration_hours: 1.5,
            created_at: Utc::now(),
        }
    }

    fn criteria(raw: RawCriteria) -> Criteria {
        Criteria::from_raw(raw)
    }

    #[test]
    fn test_no_criteria_returns_active_subset() {
        let mut inactive = destination(2, "Pompeii");
        inactive.is_active = false;
        let catalog = vec![destination(1, "Rome"), inactive, destination(3, "Venice")];

        let result = recommend_destinations(&catalog, &Criteria::default());

        let ids: Vec<i64> = result.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_adding_criteria_never_widens() {
        let mut beach = destination(2, "Amalfi");
        beach.category = TravelCategory::Beach;
        let catalog = vec![destination(1, "Rome"), beach, destination(3, "Venice")];

        let unfiltered = recommend_destinations(&catalog, &Criteria::default());

        let narrowed = recommend_destinations(
            &catalog,
            &criteria(RawCriteria {
                interest: Some("historical".to_string()),
                ..Default::default()
            }),
        );

        let narrower = recommend_destinations(
            &catalog,
            &criteria(RawCriteria {
                interest: Some("historical".to_string()),
                country: Some("italy".to_string()),
                budget: Some("medium".to_string()),
                ..Default::default()
            }),
        );

        assert!(narrowed.len() <= unfiltered.len());
        assert!(narrower.len() <= narrowed.len());
    }

    #[test]
    fn test_budget_range_filters() {
        let catalog = vec![destination(1, "Rome")];

        // Destination range [800, 2000] sits inside the requested range.
        let inside = criteria(RawCriteria {
            budget_min: Some("500".to_string()),
            budget_max: Some("2500".to_string()),
            ..Default::default()
        });
        assert_eq!(recommend_destinations(&catalog, &inside).len(), 1);

        // Requested minimum above the destination's own minimum.
        let too_high_floor = criteria(RawCriteria {
            budget_min: Some("1000".to_string()),
            ..Default::default()
        });
        assert!(recommend_destinations(&catalog, &too_high_floor).is_empty());

        // A destination without bounds never matches a range request.
        let mut unbounded = destination(2, "Naples");
        unbounded.budget_min = None;
        unbounded.budget_max = None;
        assert!(recommend_destinations(&[unbounded], &inside).is_empty());
    }

    #[test]
    fn test_unknown_tier_yields_empty_not_unfiltered() {
        let catalog = vec![destination(1, "Rome")];
        let result = recommend_destinations(
            &catalog,
            &criteria(RawCriteria {
                budget: Some("luxury".to_string()),
                ..Default::default()
            }),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_location_matches_any_of_location_city_country() {
        let catalog = vec![destination(1, "Rome")];

        for needle in ["lazio", "ROME", "ita"] {
            let result = recommend_destinations(
                &catalog,
                &criteria(RawCriteria {
                    location: Some(needle.to_string()),
                    ..Default::default()
                }),
            );
            assert_eq!(result.len(), 1, "location needle {needle:?} should match");
        }

        let miss = recommend_destinations(
            &catalog,
            &criteria(RawCriteria {
                location: Some("bavaria".to_string()),
                ..Default::default()
            }),
        );
        assert!(miss.is_empty());
    }

    #[test]
    fn test_objective_membership() {
        let catalog = vec![destination(1, "Rome")];

        let hit = criteria(RawCriteria {
            objective: Some("honeymoon".to_string()),
            ..Default::default()
        });
        assert_eq!(recommend_destinations(&catalog, &hit).len(), 1);

        let miss = criteria(RawCriteria {
            objective: Some("business".to_string()),
            ..Default::default()
        });
        assert!(recommend_destinations(&catalog, &miss).is_empty());
    }

    #[test]
    fn test_star_range_table() {
        assert_eq!(star_range(Some(BudgetLevel::Low)), 1..=2);
        assert_eq!(star_range(Some(BudgetLevel::Medium)), 3..=3);
        assert_eq!(star_range(Some(BudgetLevel::High)), 4..=5);
        assert_eq!(star_range(None), 1..=5);
    }

    #[test]
    fn test_low_budget_hotels_need_stars_and_category() {
        let hotels = vec![
            hotel(1, 1, BudgetLevel::Low),
            hotel(2, 2, BudgetLevel::Low),
            // Stars in band, wrong category: must be excluded.
            hotel(3, 1, BudgetLevel::Medium),
            hotel(4, 4, BudgetLevel::Low),
        ];

        let result = recommend_hotels(&hotels, Some("low"));
        let ids: Vec<i64> = result.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_double_filter_can_be_empty() {
        // Every hotel is either out of band or out of category.
        let hotels = vec![
            hotel(1, 3, BudgetLevel::Low),
            hotel(2, 1, BudgetLevel::High),
        ];
        assert!(recommend_hotels(&hotels, Some("low")).is_empty());
    }

    #[test]
    fn test_absent_or_unknown_budget_skips_category_filter() {
        let hotels = vec![
            hotel(1, 1, BudgetLevel::Low),
            hotel(2, 3, BudgetLevel::Medium),
            hotel(3, 5, BudgetLevel::High),
        ];

        assert_eq!(recommend_hotels(&hotels, None).len(), 3);
        assert_eq!(recommend_hotels(&hotels, Some("weird")).len(), 3);
    }

    #[test]
    fn test_distance_ladder_boundaries() {
        assert_eq!(mode_for_distance(150), TransportMode::Bus);
        assert_eq!(mode_for_distance(199), TransportMode::Bus);
        assert_eq!(mode_for_distance(200), TransportMode::Train);
        assert_eq!(mode_for_distance(1000), TransportMode::Train);
        assert_eq!(mode_for_distance(1001), TransportMode::Flight);
    }

    #[test]
    fn test_transport_budget_is_ignored() {
        let transports = vec![
            transport(1, TransportMode::Train),
            transport(2, TransportMode::Bus),
            transport(3, TransportMode::Train),
        ];

        let cheap = recommend_transports(&transports, 500, Some("low"));
        let pricey = recommend_transports(&transports, 500, Some("high"));
        let none = recommend_transports(&transports, 500, None);

        let ids = |v: &[Transport]| v.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(&cheap), vec![1, 3]);
        assert_eq!(ids(&pricey), vec![1, 3]);
        assert_eq!(ids(&none), vec![1, 3]);
    }
}
