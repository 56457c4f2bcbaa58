use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;

/// Self-reported difficulty of a successful attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyRating {
    Easy,
    Normal,
    Hard,
}

/// Whether the attempt itself succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Solved,
    Failed,
}

/// Label derived from the quality score of the most recent review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Solved,
    ReviewNeeded,
}

/// One review submission as reported by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub status: AttemptStatus,
    #[serde(default)]
    pub difficulty_rating: Option<DifficultyRating>,
}

/// Persistent scheduling state for one (user, problem) pair.
///
/// Field names serialize as camelCase, matching the JSON shape the web
/// clients already store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItemState {
    /// How well-remembered the item is; never below the configured floor.
    pub easiness_factor: f64,
    /// Days between the previous review and the next due date.
    pub interval_days: u32,
    /// Consecutive successful reviews; resets to 0 on failure.
    pub repetitions: u32,
}

impl ReviewItemState {
    /// State attached to a problem the first time it is logged.
    pub fn initial(config: &SchedulerConfig) -> Self {
        Self {
            easiness_factor: config.default_easiness_factor,
            interval_days: 0,
            repetitions: 0,
        }
    }
}

/// Outcome of one scheduling step: the state to persist plus the derived
/// due date and status label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    pub state: ReviewItemState,
    pub next_review_date: NaiveDate,
    pub status: ReviewStatus,
}
