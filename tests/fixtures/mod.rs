// Test fixtures - reusable test data
// Provides consistent instants and pages across the integration tests
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};

/// Sample instants for testing
pub mod dates {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
            .and_utc()
    }

    /// The default deadline, June 6 2023 at midnight
    pub fn deadline() -> DateTime<Utc> {
        at(2023, 6, 6, 0)
    }

    /// Five whole days before the deadline
    pub fn five_days_before() -> DateTime<Utc> {
        at(2023, 6, 1, 0)
    }

    /// Late on the deadline day, 23 hours past it
    pub fn late_on_deadline_day() -> DateTime<Utc> {
        at(2023, 6, 6, 23)
    }

    /// Feb 29, 2024 at noon (leap year)
    pub fn leap_day_2024() -> DateTime<Utc> {
        at(2024, 2, 29, 12)
    }
}

/// Sample pages for testing
pub mod pages {
    /// A page with a `days` element, the way the countdown site lays it out
    pub fn home() -> &'static str {
        r#"<!DOCTYPE html>
<html>
  <body>
    <h1>See you there!</h1>
    <p>Only <strong id="days">0 days</strong> left.</p>
  </body>
</html>
"#
    }
}
