use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LabelError {
    #[error("label cannot be empty")]
    Empty,
}

/// Validated canonical answer label (trimmed, non-empty).
///
/// Equality is exact and case-sensitive. Collapsing raw label spellings
/// onto the canonical set happens before a `Label` is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Create a validated label.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Empty` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LabelError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LabelError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
