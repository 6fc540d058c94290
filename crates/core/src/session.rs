use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::{AnswerOutcome, Label, QuizItem, SessionConfig};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no quiz items available to start a session")]
    EmptyPool,

    #[error("no drawn question is awaiting an answer")]
    NoPendingQuestion,
}

/// Result of asking the session for the next question.
///
/// `EndOfSession` is an expected terminal signal, not an error: either
/// every round has been played or the pool has run dry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    Question(QuizItem),
    EndOfSession,
}

/// Aggregated view of session progress, useful for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total_rounds: u32,
    pub answered: u32,
    pub remaining_pool: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session: a non-repeating random question sampler with
/// a running score.
///
/// Items are drawn uniformly at random from the *remaining* pool and
/// removed at the moment they are drawn, so the drawn and available
/// items always partition the originally loaded pool and no item can be
/// asked twice. Rounds are counted on answer submission, not on draw,
/// which keeps the round display honest against the configured total.
pub struct QuizSession {
    pool: Vec<QuizItem>,
    used: HashSet<String>,
    drawn: u32,
    rounds_played: u32,
    score: u64,
    config: SessionConfig,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Load a pool of items and start a fresh session.
    ///
    /// Items are de-duplicated by asset reference (first occurrence
    /// wins). `started_at` should come from the services layer clock to
    /// keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyPool` if no items remain after
    /// de-duplication; the caller must not proceed to draws.
    pub fn new(
        items: impl IntoIterator<Item = QuizItem>,
        config: SessionConfig,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let mut seen = HashSet::new();
        let pool: Vec<QuizItem> = items
            .into_iter()
            .filter(|item| seen.insert(item.asset().as_str().to_string()))
            .collect();

        if pool.is_empty() {
            return Err(SessionError::EmptyPool);
        }

        Ok(Self {
            pool,
            used: HashSet::new(),
            drawn: 0,
            rounds_played: 0,
            score: 0,
            config,
            started_at,
            completed_at: None,
        })
    }

    /// Draw the next question uniformly at random from the remaining pool.
    ///
    /// The chosen item is removed from the pool directly, so every draw
    /// is without replacement and terminates in one step; there is no
    /// retry-until-unused loop that can fall out of sync with a separate
    /// exclusion set. Returns `Draw::EndOfSession`, without touching any
    /// state, once the session is complete.
    pub fn next_question(&mut self, rng: &mut impl Rng) -> Draw {
        if self.is_complete() {
            return Draw::EndOfSession;
        }

        let index = rng.random_range(0..self.pool.len());
        let item = self.pool.swap_remove(index);
        self.used.insert(item.asset().as_str().to_string());
        self.drawn += 1;
        Draw::Question(item)
    }

    /// Score the answer for the most recently drawn question.
    ///
    /// Comparison is exact, case-sensitive label equality; raw labels
    /// must be normalized onto the canonical set before the session sees
    /// them. A correct answer adds the configured points; either outcome
    /// counts one round. The pool is unaffected.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPendingQuestion` when no drawn question
    /// is awaiting an answer: before the first draw, after completion,
    /// or when the latest draw has already been answered.
    pub fn submit_answer(
        &mut self,
        chosen: &Label,
        correct_label: &Label,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        if self.drawn <= self.rounds_played {
            return Err(SessionError::NoPendingQuestion);
        }

        let outcome = if chosen == correct_label {
            self.score += u64::from(self.config.points_per_correct());
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                correct_label: correct_label.clone(),
            }
        };

        self.rounds_played += 1;
        if self.rounds_played >= self.config.total_rounds() || self.pool.is_empty() {
            self.completed_at = Some(answered_at);
        }

        Ok(outcome)
    }

    /// True once every round has been played or the pool has run dry,
    /// whichever comes first. Once true, `next_question` returns
    /// `Draw::EndOfSession`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rounds_played >= self.config.total_rounds() || self.pool.is_empty()
    }

    /// Running score. Valid at any time; most meaningful once the
    /// session is complete.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of answered rounds so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Number of questions drawn so far, answered or not.
    #[must_use]
    pub fn drawn_count(&self) -> u32 {
        self.drawn
    }

    /// Items still available to draw.
    #[must_use]
    pub fn remaining_pool(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total_rounds: self.config.total_rounds(),
            answered: self.rounds_played,
            remaining_pool: self.pool.len(),
            is_complete: self.is_complete(),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("pool_len", &self.pool.len())
            .field("used_len", &self.used.len())
            .field("drawn", &self.drawn)
            .field("rounds_played", &self.rounds_played)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
