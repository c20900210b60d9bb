//! Contact types
//!
//! `Contact` is the persisted record. `ContactInput` is what callers hand to
//! the store on create and update; it is validated before any write.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Message returned when a write is missing its name or phone.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and phone are required.";

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// Write-side payload for create and update.
///
/// Both fields are optional here so that a missing key reports the same
/// validation error as an empty one instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactInput {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone: Some(phone.into()),
        }
    }

    /// Check that both fields are present and non-empty, returning them.
    ///
    /// Whitespace is not trimmed: `" "` counts as a name.
    pub fn validate(&self) -> Result<(&str, &str)> {
        match (self.name.as_deref(), self.phone.as_deref()) {
            (Some(name), Some(phone)) if !name.is_empty() && !phone.is_empty() => {
                Ok((name, phone))
            }
            _ => Err(Error::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.name, self.phone)
    }
}
