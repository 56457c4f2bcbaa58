//! Due-date queries over a persisted next-review date.

use chrono::NaiveDate;

const NEAR_FUTURE_DAYS: i64 = 7;

/// A problem is due once its next review date is today or earlier.
/// An unscheduled problem (`None`) is never due.
pub fn is_due_for_review(next_review: Option<NaiveDate>, today: NaiveDate) -> bool {
    match next_review {
        Some(date) => date <= today,
        None => false,
    }
}

/// Signed day count until the next review; negative when overdue.
pub fn days_until_review(next_review: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    next_review.map(|date| (date - today).num_days())
}

/// Human-facing rendering of a next-review date.
pub fn format_next_review(next_review: NaiveDate, today: NaiveDate) -> String {
    let diff_days = (next_review - today).num_days();
    if diff_days == 0 {
        "Today".to_string()
    } else if diff_days == 1 {
        "Tomorrow".to_string()
    } else if diff_days < 0 {
        format!("{} days overdue", -diff_days)
    } else if diff_days < NEAR_FUTURE_DAYS {
        format!("In {diff_days} days")
    } else {
        next_review.format("%b %-d").to_string()
    }
}
