use std::sync::Arc;

use quiz_core::model::SessionConfig;
use quiz_core::time::fixed_clock;
use services::{
    ChoicePolicy, FixedItemSource, LabelCatalog, ListingRecord, QuizLoopService, QuizServiceError,
};

fn listing() -> Vec<ListingRecord> {
    vec![
        ListingRecord::new("images/damageddd.jpg", "not usable"),
        ListingRecord::new("images/damageddd2.png", "not usable"),
        ListingRecord::new("images/damageddd3.png", "not usable"),
        ListingRecord::new("images/jackettt.jpeg", "usable"),
        ListingRecord::new("images/jackettt2.jpeg", "usable"),
        ListingRecord::new("images/panttts.jpg", "usable"),
        ListingRecord::new("images/shirttt.jpg", "usable"),
    ]
}

fn service(records: Vec<ListingRecord>) -> QuizLoopService {
    QuizLoopService::new(
        fixed_clock(),
        Arc::new(FixedItemSource::new(records)),
        LabelCatalog::usability(),
    )
}

#[tokio::test]
async fn quiz_runs_to_completion_with_correct_answers() {
    let service = service(listing()).with_config(SessionConfig::new(5, 1).unwrap());

    let mut session = service.start_session().await.unwrap();
    let mut rounds = 0;
    while let Some(round) = service.next_round(&mut session) {
        rounds += 1;
        assert_eq!(round.round_number, rounds);
        let chosen = round.item.correct_label().clone();
        assert!(round.choices.contains(&chosen));
        let outcome = service.answer(&mut session, &round, &chosen).unwrap();
        assert!(outcome.outcome.is_correct());
    }

    assert_eq!(rounds, 5);
    assert!(session.is_complete());
    assert_eq!(session.completed_at(), Some(fixed_clock().now()));

    let summary = service.summary(&session);
    assert_eq!(summary.score, 5);
    assert_eq!(summary.rounds_played, 5);
    assert_eq!(summary.completed_at, Some(fixed_clock().now()));
    assert_eq!(summary.final_display(), "Final score: 5/5");
}

#[tokio::test]
async fn short_listing_ends_when_the_pool_runs_dry() {
    let service = service(listing().into_iter().take(3).collect())
        .with_config(SessionConfig::new(5, 1).unwrap());

    let mut session = service.start_session().await.unwrap();
    let mut rounds = 0;
    while let Some(round) = service.next_round(&mut session) {
        rounds += 1;
        let chosen = round.item.correct_label().clone();
        service.answer(&mut session, &round, &chosen).unwrap();
    }

    assert_eq!(rounds, 3);
    assert!(session.is_complete());
    assert!(service.next_round(&mut session).is_none());

    let summary = service.summary(&session);
    assert_eq!(summary.rounds_played, 3);
    assert_eq!(summary.total_rounds, 5);
}

#[tokio::test]
async fn shuffled_choices_always_include_the_correct_label() {
    let service = service(listing())
        .with_config(SessionConfig::new(5, 1).unwrap())
        .with_choice_policy(ChoicePolicy::Shuffled { distractors: 1 });

    let mut session = service.start_session().await.unwrap();
    while let Some(round) = service.next_round(&mut session) {
        assert_eq!(round.choices.len(), 2);
        assert!(round.choices.contains(round.item.correct_label()));
        let chosen = round.item.correct_label().clone();
        service.answer(&mut session, &round, &chosen).unwrap();
    }
}

#[tokio::test]
async fn hundred_point_scoring_is_configuration() {
    let service = service(listing()).with_config(SessionConfig::new(2, 100).unwrap());

    let mut session = service.start_session().await.unwrap();
    while let Some(round) = service.next_round(&mut session) {
        let chosen = round.item.correct_label().clone();
        service.answer(&mut session, &round, &chosen).unwrap();
    }

    assert_eq!(service.summary(&session).score, 200);
}

#[tokio::test]
async fn ineligible_listing_blocks_the_session() {
    let service = service(vec![ListingRecord::new("notes/readme.txt", "usable")]);
    let err = service.start_session().await.unwrap_err();
    assert!(matches!(err, QuizServiceError::NoUsableItems));
}
