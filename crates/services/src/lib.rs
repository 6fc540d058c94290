#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;
pub mod source;

pub use quiz_core::Clock;

pub use catalog::LabelCatalog;
pub use error::{CatalogError, QuizServiceError, SourceError};
pub use sessions::{ChoicePolicy, QuizLoopService, RoundOutcome, RoundView, SummaryView};
pub use source::{FixedItemSource, HttpItemSource, ItemSource, ListingRecord};
