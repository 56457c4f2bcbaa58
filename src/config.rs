use serde::{Deserialize, Serialize};

/// Tuning knobs for the SM-2 interval update.
///
/// The quality-mapping table is intentionally not configurable: changing it
/// would silently alter every derived interval, so it lives as fixed policy
/// in [`crate::scheduler::quality`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Easiness factor assigned to a freshly logged problem.
    pub default_easiness_factor: f64,
    /// Lower bound the easiness factor is clamped to after every update.
    pub min_easiness_factor: f64,
    /// Interval after the first successful review.
    pub first_interval_days: u32,
    /// Interval after the second consecutive successful review.
    pub second_interval_days: u32,
    /// Interval a failed review falls back to.
    pub failure_interval_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_easiness_factor: 2.5,
            min_easiness_factor: 1.3,
            first_interval_days: 1,
            second_interval_days: 6,
            failure_interval_days: 1,
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_easiness_factor < 1.0 {
            return Err("minEasinessFactor must be >= 1.0".to_string());
        }
        if self.default_easiness_factor < self.min_easiness_factor {
            return Err("defaultEasinessFactor must be >= minEasinessFactor".to_string());
        }
        if self.first_interval_days == 0 {
            return Err("firstIntervalDays must be > 0".to_string());
        }
        if self.second_interval_days == 0 {
            return Err("secondIntervalDays must be > 0".to_string());
        }
        if self.failure_interval_days == 0 {
            return Err("failureIntervalDays must be > 0".to_string());
        }
        Ok(())
    }
}
