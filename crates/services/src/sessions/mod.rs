mod choices;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::QuizServiceError;
pub use choices::ChoicePolicy;
pub use service::QuizLoopService;
pub use view::{RoundOutcome, RoundView, SummaryView};
