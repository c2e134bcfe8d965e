//! Serde helper functions for query-string deserialization.
//!
//! Query strings like `?journey=&start=2024-06-01` carry empty values for
//! parameters the client left blank; those should be treated as absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
