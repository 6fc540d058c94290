use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{AssetRef, Label, QuizItem, SessionConfig};
use quiz_core::session::{Draw, QuizSession};

use super::choices::{ChoicePolicy, build_choices};
use super::view::{RoundOutcome, RoundView, SummaryView};
use crate::catalog::LabelCatalog;
use crate::error::QuizServiceError;
use crate::source::{ItemSource, is_eligible_asset};

/// Orchestrates listing fetch, session start, and the question/answer
/// loop. Emits pure presentation data; rendering and input collection
/// stay with the caller.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    source: Arc<dyn ItemSource>,
    catalog: LabelCatalog,
    config: SessionConfig,
    choice_policy: ChoicePolicy,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn ItemSource>, catalog: LabelCatalog) -> Self {
        Self {
            clock,
            source,
            catalog,
            config: SessionConfig::default(),
            choice_policy: ChoicePolicy::Fixed,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_choice_policy(mut self, policy: ChoicePolicy) -> Self {
        self.choice_policy = policy;
        self
    }

    /// Fetch the listing and start a session over the eligible items.
    ///
    /// Records pointing at non-image assets are dropped, raw labels are
    /// normalized through the catalog (records a strict catalog rejects
    /// are skipped), and duplicate references collapse inside the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Source` when the listing fetch fails
    /// and `QuizServiceError::NoUsableItems` when nothing eligible
    /// remains; the caller should surface "no questions available" and
    /// must not enter the question loop.
    pub async fn start_session(&self) -> Result<QuizSession, QuizServiceError> {
        let listing = self.source.fetch_listing().await?;

        let mut items = Vec::with_capacity(listing.len());
        for record in listing {
            if !is_eligible_asset(&record.image) {
                continue;
            }
            let Some(label) = self.catalog.normalize(&record.label) else {
                continue;
            };
            let Ok(asset) = AssetRef::parse(&record.image) else {
                continue;
            };
            items.push(QuizItem::new(asset, label));
        }

        if items.is_empty() {
            return Err(QuizServiceError::NoUsableItems);
        }

        Ok(QuizSession::new(items, self.config, self.clock.now())?)
    }

    /// Draw the next question and assemble its presentation data.
    ///
    /// Returns `None` once the session is complete (rounds exhausted or
    /// pool dry).
    pub fn next_round(&self, session: &mut QuizSession) -> Option<RoundView> {
        let mut rng = rand::rng();
        let Draw::Question(item) = session.next_question(&mut rng) else {
            return None;
        };

        let choices = build_choices(
            self.choice_policy,
            &self.catalog,
            item.correct_label(),
            &mut rng,
        );

        Some(RoundView {
            round_number: session.rounds_played() + 1,
            total_rounds: session.config().total_rounds(),
            score: session.score(),
            item,
            choices,
        })
    }

    /// Score the chosen label for a drawn round.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError::NoPendingQuestion` when `round` is not
    /// the latest unanswered draw.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        round: &RoundView,
        chosen: &Label,
    ) -> Result<RoundOutcome, QuizServiceError> {
        let outcome =
            session.submit_answer(chosen, round.item.correct_label(), self.clock.now())?;
        Ok(RoundOutcome {
            outcome,
            score: session.score(),
            is_complete: session.is_complete(),
        })
    }

    /// Final summary for presentation.
    #[must_use]
    pub fn summary(&self, session: &QuizSession) -> SummaryView {
        SummaryView {
            score: session.score(),
            rounds_played: session.rounds_played(),
            total_rounds: session.config().total_rounds(),
            started_at: session.started_at(),
            completed_at: session.completed_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixedItemSource, ListingRecord};
    use quiz_core::time::fixed_clock;

    fn service_over(records: Vec<ListingRecord>, catalog: LabelCatalog) -> QuizLoopService {
        QuizLoopService::new(fixed_clock(), Arc::new(FixedItemSource::new(records)), catalog)
    }

    #[tokio::test]
    async fn start_session_filters_and_normalizes_the_listing() {
        let records = vec![
            ListingRecord::new("images/jackettt.jpeg", "usable"),
            ListingRecord::new("images/readme.txt", "usable"),
            ListingRecord::new("images/mystery.jpg", "torn"),
        ];
        let catalog = LabelCatalog::new(["Usable", "Not usable"]).unwrap();
        let service = service_over(records, catalog);

        let session = service.start_session().await.unwrap();
        // Only the jpeg with a recognizable label survives the strict catalog.
        assert_eq!(session.remaining_pool(), 1);
    }

    #[tokio::test]
    async fn fallback_catalog_keeps_unrecognized_labels() {
        let records = vec![
            ListingRecord::new("images/jackettt.jpeg", "usable"),
            ListingRecord::new("images/mystery.jpg", "torn"),
        ];
        let service = service_over(records, LabelCatalog::usability());

        let session = service.start_session().await.unwrap();
        assert_eq!(session.remaining_pool(), 2);
    }

    #[tokio::test]
    async fn empty_listing_reports_no_usable_items() {
        let service = service_over(Vec::new(), LabelCatalog::usability());
        let err = service.start_session().await.unwrap_err();
        assert!(matches!(err, QuizServiceError::NoUsableItems));
    }

    #[tokio::test]
    async fn round_views_count_up_and_carry_choices() {
        let records = vec![
            ListingRecord::new("images/a.jpg", "usable"),
            ListingRecord::new("images/b.jpg", "not usable"),
        ];
        let service = service_over(records, LabelCatalog::usability())
            .with_config(SessionConfig::new(2, 1).unwrap());

        let mut session = service.start_session().await.unwrap();

        let round = service.next_round(&mut session).unwrap();
        assert_eq!(round.round_number, 1);
        assert_eq!(round.round_display(), "Round 1 of 2");
        assert_eq!(
            round.choices,
            LabelCatalog::usability().labels().to_vec()
        );

        let chosen = round.item.correct_label().clone();
        let outcome = service.answer(&mut session, &round, &chosen).unwrap();
        assert!(outcome.outcome.is_correct());
        assert_eq!(outcome.score, 1);
        assert!(!outcome.is_complete);

        let round = service.next_round(&mut session).unwrap();
        assert_eq!(round.round_number, 2);
        assert_eq!(round.score, 1);
    }
}
