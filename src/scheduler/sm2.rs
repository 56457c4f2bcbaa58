//! SM-2 interval update.
//!
//! Each review produces a new [`ReviewItemState`] from the previous one and
//! a 0-5 quality score. Quality below 3 resets the repetition chain to a
//! one-day interval; quality 3 and up walks the chain: first interval,
//! second interval, then the previous interval multiplied by the easiness
//! factor. The easiness factor itself is recomputed on every review, failure
//! included, and clamped to the configured floor.

use chrono::{Days, NaiveDate};

use crate::config::SchedulerConfig;
use crate::types::{ReviewItemState, ReviewStatus, SchedulingResult};

const QUALITY_MIN: i32 = 0;
const QUALITY_MAX: i32 = 5;
/// Quality at or above this counts as a successful recall.
const SUCCESS_THRESHOLD: i32 = 3;

/// Advance the scheduling state by one review.
///
/// Pure: the same `(state, quality, today)` always yields the same result.
/// Out-of-range quality is clamped into `[0, 5]` rather than rejected.
///
/// The success-branch interval is computed from the pre-update easiness
/// factor and the pre-increment repetition count, then rounded with
/// `f64::round` (nearest, ties away from zero).
pub fn update_schedule(
    state: &ReviewItemState,
    quality: i32,
    today: NaiveDate,
    config: &SchedulerConfig,
) -> SchedulingResult {
    let quality = quality.clamp(QUALITY_MIN, QUALITY_MAX);

    let (interval_days, repetitions) = if quality < SUCCESS_THRESHOLD {
        (config.failure_interval_days, 0)
    } else {
        let interval = match state.repetitions {
            0 => config.first_interval_days,
            1 => config.second_interval_days,
            _ => (state.interval_days as f64 * state.easiness_factor).round() as u32,
        };
        (interval, state.repetitions + 1)
    };

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored.
    let miss = (QUALITY_MAX - quality) as f64;
    let easiness_factor = (state.easiness_factor + (0.1 - miss * (0.08 + miss * 0.02)))
        .max(config.min_easiness_factor);

    let status = if quality < SUCCESS_THRESHOLD {
        ReviewStatus::ReviewNeeded
    } else {
        ReviewStatus::Solved
    };

    SchedulingResult {
        state: ReviewItemState {
            easiness_factor,
            interval_days,
            repetitions,
        },
        next_review_date: today
            .checked_add_days(Days::new(interval_days as u64))
            .unwrap_or(NaiveDate::MAX),
        status,
    }
}

/// Schedule a problem the first time it is logged: the default state run
/// through one update, so the entry immediately carries a concrete interval
/// and due date.
pub fn initial_schedule(
    quality: i32,
    today: NaiveDate,
    config: &SchedulerConfig,
) -> SchedulingResult {
    update_schedule(&ReviewItemState::initial(config), quality, today, config)
}
