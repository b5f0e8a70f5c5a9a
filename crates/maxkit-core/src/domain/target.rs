//! Canonical target identifiers.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Family prefix shared by every part the SDK ships examples for.
pub const TARGET_PREFIX: &str = "MAX";

/// Canonical uppercase microcontroller part identifier, e.g. `MAX32655`.
///
/// Invariant: non-empty, ASCII alphanumeric, uppercase. Whether the part
/// actually exists in a given SDK installation is a catalog question and is
/// answered during validation, never here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(String);

impl TargetId {
    /// Resolve a raw user-supplied target string into a candidate id.
    ///
    /// Accepts a full part number (`MAX32655`, `max32655`) or a bare numeric
    /// suffix (`32655`); the latter gets [`TARGET_PREFIX`] prepended.
    /// Surrounding whitespace is stripped and case is normalized.
    ///
    /// Fails only on malformed input: empty, or containing characters outside
    /// the ASCII alphanumeric set.
    pub fn resolve(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidTargetFormat {
                input: raw.to_string(),
            });
        }

        let upper = trimmed.to_ascii_uppercase();
        let canonical = if upper.starts_with(|c: char| c.is_ascii_alphabetic()) {
            upper
        } else {
            format!("{TARGET_PREFIX}{upper}")
        };

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TargetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
