//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Patch DTOs distinguish "absent" from "null" with
//! [`deserialize_some`] so nullable columns can be cleared explicitly.

pub mod destinations;
pub mod health;
pub mod hotels;
pub mod plans;
pub mod transports;

use serde::{Deserialize, Deserializer};

/// Deserializes a present-but-possibly-null field into `Some(inner)`.
///
/// With `#[serde(default)]` on an `Option<Option<T>>` field this yields:
/// absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
