//! End-to-end review lifecycle over the in-memory store: first log,
//! repeated successes, a failure reset, and the due-date queries a caller
//! would run on the persisted result.

use chrono::{Days, NaiveDate};

use review_scheduler::config::SchedulerConfig;
use review_scheduler::engine::ReviewEngine;
use review_scheduler::logging::{init_tracing, LogConfig};
use review_scheduler::scheduler::due::{days_until_review, is_due_for_review};
use review_scheduler::store::MemoryStore;
use review_scheduler::types::{AttemptStatus, DifficultyRating, ReviewOutcome, ReviewStatus};

fn outcome(status: AttemptStatus, difficulty: Option<DifficultyRating>) -> ReviewOutcome {
    ReviewOutcome {
        status,
        difficulty_rating: difficulty,
    }
}

#[test]
fn review_chain_grows_then_resets_on_failure() {
    init_tracing(&LogConfig::default());

    let engine = ReviewEngine::new(SchedulerConfig::default(), MemoryStore::new()).unwrap();
    let day0 = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    // First encounter, solved with difficulty: schedule one day out.
    let first = engine
        .submit_review_on(
            "u1",
            1000,
            outcome(AttemptStatus::Solved, Some(DifficultyRating::Hard)),
            day0,
        )
        .unwrap();
    assert_eq!(first.state.interval_days, 1);
    assert_eq!(first.state.repetitions, 1);
    assert_eq!(first.status, ReviewStatus::Solved);
    assert_eq!(first.next_review_date, day0 + Days::new(1));

    // Reviewed the next day: the chain advances to the six-day step.
    let day1 = day0 + Days::new(1);
    let second = engine
        .submit_review_on(
            "u1",
            1000,
            outcome(AttemptStatus::Solved, Some(DifficultyRating::Hard)),
            day1,
        )
        .unwrap();
    assert_eq!(second.state.interval_days, 6);
    assert_eq!(second.state.repetitions, 2);
    assert!((second.state.easiness_factor - 2.22).abs() < 1e-9);

    // Third success multiplies the previous interval by the easiness factor.
    let day7 = day1 + Days::new(6);
    let third = engine
        .submit_review_on("u1", 1000, outcome(AttemptStatus::Solved, None), day7)
        .unwrap();
    assert_eq!(third.state.interval_days, 13); // round(6 * 2.22)
    assert_eq!(third.state.repetitions, 3);
    assert_eq!(third.next_review_date, day7 + Days::new(13));

    assert!(!is_due_for_review(Some(third.next_review_date), day7));
    assert_eq!(
        days_until_review(Some(third.next_review_date), day7),
        Some(13)
    );

    // A later failure flags the problem for review and restarts the chain,
    // keeping the (lowered) easiness factor.
    let day20 = day7 + Days::new(13);
    let fourth = engine
        .submit_review_on("u1", 1000, outcome(AttemptStatus::Failed, None), day20)
        .unwrap();
    assert_eq!(fourth.status, ReviewStatus::ReviewNeeded);
    assert_eq!(fourth.state.interval_days, 1);
    assert_eq!(fourth.state.repetitions, 0);
    assert!((fourth.state.easiness_factor - 1.90).abs() < 1e-9);
    assert!(fourth.state.easiness_factor < third.state.easiness_factor);

    let day21 = day20 + Days::new(1);
    assert!(is_due_for_review(Some(fourth.next_review_date), day21));
}

#[test]
fn problems_are_scheduled_independently() {
    let engine = ReviewEngine::new(SchedulerConfig::default(), MemoryStore::new()).unwrap();
    let day0 = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    engine
        .submit_review_on(
            "u1",
            1000,
            outcome(AttemptStatus::Solved, Some(DifficultyRating::Easy)),
            day0,
        )
        .unwrap();
    engine
        .submit_review_on(
            "u1",
            1000,
            outcome(AttemptStatus::Solved, Some(DifficultyRating::Easy)),
            day0 + Days::new(1),
        )
        .unwrap();

    // A different problem for the same user starts from the default state.
    let other = engine
        .submit_review_on(
            "u1",
            2000,
            outcome(AttemptStatus::Solved, Some(DifficultyRating::Easy)),
            day0,
        )
        .unwrap();
    assert_eq!(other.state.repetitions, 1);
    assert_eq!(other.state.interval_days, 1);

    // Same problem for a different user likewise.
    let other_user = engine
        .submit_review_on(
            "u2",
            1000,
            outcome(AttemptStatus::Solved, Some(DifficultyRating::Easy)),
            day0,
        )
        .unwrap();
    assert_eq!(other_user.state.repetitions, 1);
}
