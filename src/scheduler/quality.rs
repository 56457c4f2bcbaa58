use crate::types::{AttemptStatus, DifficultyRating};

// Quality scale, SM-2 convention:
//   5 perfect response (easy)
//   4 correct with some hesitation (normal)
//   3 correct with serious difficulty (hard)
//   2 incorrect but remembered
//   1 incorrect, wrong approach
//   0 complete blackout
//
// A failed attempt always maps to 2: the product treats any attempted-but-
// failed problem as "incorrect but remembered" and never distinguishes
// failure severity, so 0 and 1 are never produced here.
const QUALITY_FAILED: i32 = 2;
const QUALITY_EASY: i32 = 5;
const QUALITY_NORMAL: i32 = 4;
const QUALITY_HARD: i32 = 3;

/// Map a human-facing outcome onto the 0-5 quality scale.
///
/// The difficulty rating is ignored for failed attempts; a missing rating on
/// a solved attempt defaults to normal.
pub fn outcome_to_quality(status: AttemptStatus, difficulty: Option<DifficultyRating>) -> i32 {
    match status {
        AttemptStatus::Failed => QUALITY_FAILED,
        AttemptStatus::Solved => match difficulty {
            Some(DifficultyRating::Easy) => QUALITY_EASY,
            Some(DifficultyRating::Hard) => QUALITY_HARD,
            Some(DifficultyRating::Normal) | None => QUALITY_NORMAL,
        },
    }
}
