//! Transport entity and mode enum.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Means of travel between two places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Bus,
    Train,
    Flight,
    Car,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Flight => "flight",
            TransportMode::Car => "car",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bus" => Ok(TransportMode::Bus),
            "train" => Ok(TransportMode::Train),
            "flight" => Ok(TransportMode::Flight),
            "car" => Ok(TransportMode::Car),
            _ => Err(()),
        }
    }
}

/// A transport option between an origin and a destination, resolved by
/// distance rather than by catalog destination ownership.
#[derive(Debug, Clone)]
pub struct Transport {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub distance_km: i64,
    pub price: Decimal,
    pub duration_hours: f64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new transport option.
#[derive(Debug, Clone)]
pub struct NewTransport {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub distance_km: i64,
    pub price: Decimal,
    pub duration_hours: f64,
}

/// Partial update for an existing transport option.
#[derive(Debug, Clone, Default)]
pub struct TransportPatch {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub mode: Option<TransportMode>,
    pub distance_km: Option<i64>,
    pub price: Option<Decimal>,
    pub duration_hours: Option<f64>,
}
