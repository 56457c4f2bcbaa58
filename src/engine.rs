//! Review submission workflow.
//!
//! Ties the pure scheduler to a [`ReviewStore`]: map the outcome to a
//! quality score, advance the persisted state (or initialize it on the
//! first submission), save, and hand the result back. Retroactively rating
//! an already-logged attempt goes through the same path; the only
//! difference is that a persisted state already exists.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::config::SchedulerConfig;
use crate::scheduler::{quality, sm2};
use crate::store::{ReviewStore, StoreError, StoredReview};
use crate::types::{ReviewOutcome, SchedulingResult};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("invalid scheduler config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ReviewEngine<S> {
    config: SchedulerConfig,
    store: S,
}

impl<S: ReviewStore> ReviewEngine<S> {
    pub fn new(config: SchedulerConfig, store: S) -> Result<Self, ReviewError> {
        config.validate().map_err(ReviewError::InvalidConfig)?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Record one review of a problem and persist the rescheduled state.
    pub fn submit_review(
        &self,
        user_id: &str,
        problem_id: u32,
        outcome: ReviewOutcome,
    ) -> Result<SchedulingResult, ReviewError> {
        self.submit_review_on(user_id, problem_id, outcome, Utc::now().date_naive())
    }

    /// [`Self::submit_review`] with an explicit "today", for callers that
    /// batch-import history or need reproducible scheduling in tests.
    pub fn submit_review_on(
        &self,
        user_id: &str,
        problem_id: u32,
        outcome: ReviewOutcome,
        today: NaiveDate,
    ) -> Result<SchedulingResult, ReviewError> {
        let quality = quality::outcome_to_quality(outcome.status, outcome.difficulty_rating);

        let result = match self.store.load_review(user_id, problem_id)? {
            Some(existing) => sm2::update_schedule(&existing.state, quality, today, &self.config),
            None => sm2::initial_schedule(quality, today, &self.config),
        };

        self.store.save_review(
            user_id,
            problem_id,
            &StoredReview {
                state: result.state,
                next_review_date: result.next_review_date,
                status: result.status,
            },
        )?;

        tracing::debug!(
            user_id,
            problem_id,
            quality,
            interval_days = result.state.interval_days,
            repetitions = result.state.repetitions,
            next_review = %result.next_review_date,
            "review scheduled"
        );

        Ok(result)
    }
}
