use std::fmt;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssetRefError {
    #[error("asset reference cannot be empty")]
    Empty,
}

/// Opaque identifier for a quiz asset.
///
/// Listings mix server-relative paths ("images/shirt.jpg") with absolute
/// URLs; both shapes are kept as-is. `as_str` is the identity used for
/// pool uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetRef {
    Relative(String),
    Absolute(Url),
}

impl AssetRef {
    /// Parse an asset reference from listing text.
    ///
    /// Absolute URLs become `AssetRef::Absolute`; anything else is kept
    /// as a relative path for the presentation layer to resolve.
    ///
    /// # Errors
    ///
    /// Returns `AssetRefError::Empty` if the input is empty after trimming.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, AssetRefError> {
        let s = value.as_ref().trim();
        if s.is_empty() {
            return Err(AssetRefError::Empty);
        }
        match Url::parse(s) {
            Ok(url) => Ok(AssetRef::Absolute(url)),
            Err(_) => Ok(AssetRef::Relative(s.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            AssetRef::Relative(path) => path,
            AssetRef::Absolute(url) => url.as_str(),
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            AssetRef::Absolute(url) => Some(url),
            AssetRef::Relative(_) => None,
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
