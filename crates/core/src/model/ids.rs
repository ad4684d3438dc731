use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing a `ModuleId` from string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModuleIdError {
    #[error("module id cannot be empty")]
    Empty,

    #[error("module id `{raw}` may only contain lowercase letters, digits and '-'")]
    InvalidCharacters { raw: String },
}

/// Stable slug identifying a curriculum module (`intro`, `final-project`).
///
/// Ordering of modules comes from their position in the catalog, never from
/// comparing ids.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates a new `ModuleId` after validating the slug.
    ///
    /// # Errors
    ///
    /// Returns `ModuleIdError` if the slug is empty or contains characters other
    /// than lowercase ascii letters, digits and `-`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ModuleIdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModuleIdError::Empty);
        }
        let valid = trimmed
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
        if !valid {
            return Err(ModuleIdError::InvalidCharacters { raw });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleId {
    type Err = ModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ModuleId {
    type Error = ModuleIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_display() {
        let id = ModuleId::new("final-project").unwrap();
        assert_eq!(id.to_string(), "final-project");
    }

    #[test]
    fn module_id_from_str_trims_whitespace() {
        let id: ModuleId = "  intro ".parse().unwrap();
        assert_eq!(id.as_str(), "intro");
    }

    #[test]
    fn module_id_rejects_empty() {
        assert_eq!("   ".parse::<ModuleId>(), Err(ModuleIdError::Empty));
    }

    #[test]
    fn module_id_rejects_uppercase_and_spaces() {
        assert!(matches!(
            ModuleId::new("Final Project"),
            Err(ModuleIdError::InvalidCharacters { .. })
        ));
    }
}
