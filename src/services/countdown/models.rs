use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Element id the label is written to when nothing else is configured.
pub const DEFAULT_TARGET_ID: &str = "days";

/// Signed span between now and the deadline, split into calendar-style units.
///
/// Every field is derived from `total_millis`; once the deadline has passed
/// the total and each component turn negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownDuration {
    pub total_millis: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownDuration {
    /// Decompose a signed millisecond total.
    ///
    /// Each unit is floor-divided out of the total and then reduced with a
    /// remainder that keeps the sign of the dividend.
    pub fn from_millis(total_millis: i64) -> Self {
        Self {
            total_millis,
            days: total_millis.div_euclid(MILLIS_PER_DAY),
            hours: total_millis.div_euclid(MILLIS_PER_HOUR) % 24,
            minutes: total_millis.div_euclid(MILLIS_PER_MINUTE) % 60,
            seconds: total_millis.div_euclid(MILLIS_PER_SECOND) % 60,
        }
    }

    /// True once the deadline is now or behind us.
    pub fn is_past(&self) -> bool {
        self.total_millis <= 0
    }
}
