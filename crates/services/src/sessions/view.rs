use chrono::{DateTime, Utc};

use quiz_core::model::{AnswerOutcome, AssetRef, Label, QuizItem};

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// Presentation data for one drawn round. Rendering is the caller's job;
/// the drawn item stays here so the answer can be scored against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// 1-based number of the round being asked.
    pub round_number: u32,
    pub total_rounds: u32,
    /// Score entering the round.
    pub score: u64,
    pub item: QuizItem,
    pub choices: Vec<Label>,
}

impl RoundView {
    #[must_use]
    pub fn asset(&self) -> &AssetRef {
        self.item.asset()
    }

    #[must_use]
    pub fn round_display(&self) -> String {
        format!("Round {} of {}", self.round_number, self.total_rounds)
    }

    #[must_use]
    pub fn score_display(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Outcome of answering one round, with the updated running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub outcome: AnswerOutcome,
    pub score: u64,
    pub is_complete: bool,
}

impl RoundOutcome {
    #[must_use]
    pub fn feedback_display(&self) -> String {
        match &self.outcome {
            AnswerOutcome::Correct => "Correct!".to_string(),
            AnswerOutcome::Incorrect { correct_label } => {
                format!("Wrong! Correct: {correct_label}")
            }
        }
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Final summary for a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub score: u64,
    pub rounds_played: u32,
    pub total_rounds: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SummaryView {
    #[must_use]
    pub fn final_display(&self) -> String {
        format!("Final score: {}/{}", self.score, self.total_rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AssetRef;

    #[test]
    fn round_display_is_one_based() {
        let view = RoundView {
            round_number: 2,
            total_rounds: 5,
            score: 1,
            item: QuizItem::new(
                AssetRef::parse("images/shirt.jpg").unwrap(),
                Label::new("Usable").unwrap(),
            ),
            choices: vec![Label::new("Usable").unwrap()],
        };
        assert_eq!(view.round_display(), "Round 2 of 5");
        assert_eq!(view.score_display(), "Score: 1");
    }

    #[test]
    fn feedback_shows_the_correct_label_on_a_miss() {
        let outcome = RoundOutcome {
            outcome: AnswerOutcome::Incorrect {
                correct_label: Label::new("Not usable").unwrap(),
            },
            score: 1,
            is_complete: false,
        };
        assert_eq!(outcome.feedback_display(), "Wrong! Correct: Not usable");
    }

    #[test]
    fn summary_formats_score_over_rounds() {
        let summary = SummaryView {
            score: 3,
            rounds_played: 5,
            total_rounds: 5,
            started_at: quiz_core::time::fixed_now(),
            completed_at: Some(quiz_core::time::fixed_now()),
        };
        assert_eq!(summary.final_display(), "Final score: 3/5");
    }
}
