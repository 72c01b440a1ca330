// Deadline parsing helpers

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::services::countdown::CountdownError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Timezone used to place a deadline literal that carries no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineZone {
    Local,
    Utc,
    Named(Tz),
}

impl Default for DeadlineZone {
    fn default() -> Self {
        Self::Local
    }
}

impl FromStr for DeadlineZone {
    type Err = CountdownError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            Ok(Self::Local)
        } else if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            Ok(Self::Utc)
        } else {
            trimmed
                .parse::<Tz>()
                .map(Self::Named)
                .map_err(|_| CountdownError::UnknownTimezone(trimmed.to_string()))
        }
    }
}

impl fmt::Display for DeadlineZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl DeadlineZone {
    /// Place a wall-clock time in this zone. Ambiguous times resolve to the
    /// earlier instant; times skipped by a DST jump have no instant.
    pub fn to_utc(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Local => earliest(Local.from_local_datetime(naive)),
            Self::Utc => Some(naive.and_utc()),
            Self::Named(tz) => earliest(tz.from_local_datetime(naive)),
        }
    }
}

fn earliest<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Utc>> {
    result.earliest().map(|dt| dt.with_timezone(&Utc))
}

/// Parse a deadline literal.
///
/// RFC 3339 input keeps its own offset. Otherwise a date with an optional
/// `T`- or space-separated time is read as wall-clock time in `zone`; a bare
/// date means midnight.
pub fn parse_deadline(input: &str, zone: DeadlineZone) -> Result<DateTime<Utc>, CountdownError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(CountdownError::invalid_deadline(input, "empty"));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            CountdownError::invalid_deadline(input, "expected YYYY-MM-DD[ HH:MM[:SS]]")
        })?;

    zone.to_utc(&naive).ok_or_else(|| {
        CountdownError::invalid_deadline(input, format!("does not exist in {zone}"))
    })
}
