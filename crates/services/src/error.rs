//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::LabelError;
use quiz_core::session::SessionError;

/// Errors emitted while fetching an asset listing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("listing request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while building a `LabelCatalog`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("a catalog needs at least two labels")]
    TooFewLabels,
    #[error("duplicate label in catalog: {0}")]
    DuplicateLabel(String),
    #[error("fallback label is not part of the catalog: {0}")]
    UnknownFallback(String),
    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("no usable quiz items in the listing")]
    NoUsableItems,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
