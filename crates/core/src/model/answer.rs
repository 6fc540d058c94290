use crate::model::Label;

/// Result of comparing a chosen label against the correct one.
///
/// `Incorrect` carries the correct label so the presentation layer can
/// show it without holding on to the drawn item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_label: Label },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}
