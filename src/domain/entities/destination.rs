//! Destination entity and its catalog enums.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interest category a destination is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelCategory {
    Beach,
    Wildlife,
    Historical,
    CityTour,
    Adventure,
    Culture,
}

impl TravelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelCategory::Beach => "beach",
            TravelCategory::Wildlife => "wildlife",
            TravelCategory::Historical => "historical",
            TravelCategory::CityTour => "city_tour",
            TravelCategory::Adventure => "adventure",
            TravelCategory::Culture => "culture",
        }
    }
}

impl fmt::Display for TravelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beach" => Ok(TravelCategory::Beach),
            "wildlife" => Ok(TravelCategory::Wildlife),
            "historical" => Ok(TravelCategory::Historical),
            "city_tour" => Ok(TravelCategory::CityTour),
            "adventure" => Ok(TravelCategory::Adventure),
            "culture" => Ok(TravelCategory::Culture),
            _ => Err(()),
        }
    }
}

/// Coarse price band used by destinations and hotels alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(BudgetLevel::Low),
            "medium" => Ok(BudgetLevel::Medium),
            "high" => Ok(BudgetLevel::High),
            _ => Err(()),
        }
    }
}

/// Travel objective a destination can cater to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Leisure,
    Adventure,
    Honeymoon,
    Business,
    Family,
}

impl Objective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Leisure => "leisure",
            Objective::Adventure => "adventure",
            Objective::Honeymoon => "honeymoon",
            Objective::Business => "business",
            Objective::Family => "family",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leisure" => Ok(Objective::Leisure),
            "adventure" => Ok(Objective::Adventure),
            "honeymoon" => Ok(Objective::Honeymoon),
            "business" => Ok(Objective::Business),
            "family" => Ok(Objective::Family),
            _ => Err(()),
        }
    }
}

/// A travel destination in the catalog.
///
/// Only active destinations participate in recommendations; admins toggle
/// `is_active` instead of deleting records that have plans attached.
#[derive(Debug, Clone)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: String,
    pub location: String,
    pub category: TravelCategory,
    pub best_season: String,
    pub budget_level: BudgetLevel,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    pub objectives_supported: Vec<Objective>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Destination {
    /// Returns true if the destination caters to the given objective tag.
    ///
    /// The tag is compared against the canonical wire names, so unknown
    /// tags never match.
    pub fn supports_objective(&self, objective: &str) -> bool {
        self.objectives_supported
            .iter()
            .any(|o| o.as_str() == objective)
    }
}

/// Input data for creating a new destination.
#[derive(Debug, Clone)]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: String,
    pub location: String,
    pub category: TravelCategory,
    pub best_season: String,
    pub budget_level: BudgetLevel,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    pub objectives_supported: Vec<Objective>,
    pub is_active: bool,
}

/// Partial update for an existing destination.
///
/// `None` fields are left unchanged. `budget_min: Some(None)` clears the
/// bound; `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct DestinationPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<TravelCategory>,
    pub best_season: Option<String>,
    pub budget_level: Option<BudgetLevel>,
    pub budget_min: Option<Option<Decimal>>,
    pub budget_max: Option<Option<Decimal>>,
    pub objectives_supported: Option<Vec<Objective>>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for name in [
            "beach",
            "wildlife",
            "historical",
            "city_tour",
            "adventure",
            "culture",
        ] {
            let category: TravelCategory = name.parse().unwrap();
            assert_eq!(category.as_str(), name);
        }

        assert!("mountain".parse::<TravelCategory>().is_err());
    }

    #[test]
    fn test_budget_level_round_trip() {
        for name in ["low", "medium", "high"] {
            let level: BudgetLevel = name.parse().unwrap();
            assert_eq!(level.as_str(), name);
        }

        assert!("luxury".parse::<BudgetLevel>().is_err());
    }

    #[test]
    fn test_supports_objective() {
        let destination = Destination {
            id: 1,
            name: "Serengeti".to_string(),
            country: "Tanzania".to_string(),
            city: "Arusha".to_string(),
            description: String::new(),
            location: String::new(),
            category: TravelCategory::Wildlife,
            best_season: "June-October".to_string(),
            budget_level: BudgetLevel::High,
            budget_min: None,
            budget_max: None,
            objectives_supported: vec![Objective::Adventure, Objective::Family],
            is_active: true,
            created_at: Utc::now(),
        };

        assert!(destination.supports_objective("adventure"));
        assert!(destination.supports_objective("family"));
        assert!(!destination.supports_objective("honeymoon"));
        assert!(!destination.supports_objective("safari"));
    }
}
