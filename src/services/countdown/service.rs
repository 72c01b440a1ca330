use chrono::{DateTime, TimeZone, Utc};

use super::error::CountdownError;
use super::formatter::{compute_duration, render_days_remaining};
use super::models::{CountdownDuration, DEFAULT_TARGET_ID};
use super::render::{update_element_at, TextSink};
use crate::models::settings::CountdownSettings;

/// One configured countdown: a fixed deadline and the element it renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownService {
    deadline: DateTime<Utc>,
    target_id: String,
}

impl CountdownService {
    pub fn new(deadline: DateTime<Utc>, target_id: impl Into<String>) -> Self {
        Self {
            deadline,
            target_id: target_id.into(),
        }
    }

    /// Countdown into the default `days` element.
    pub fn for_deadline(deadline: DateTime<Utc>) -> Self {
        Self::new(deadline, DEFAULT_TARGET_ID)
    }

    /// Parse the configured deadline once; the result is immutable afterwards.
    pub fn from_settings(settings: &CountdownSettings) -> Result<Self, CountdownError> {
        let deadline = settings.resolve_deadline()?;
        log::debug!(
            "deadline `{}` ({}) resolved to {}",
            settings.deadline,
            settings.timezone,
            deadline
        );
        Ok(Self::new(deadline, settings.target.clone()))
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn duration_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> CountdownDuration {
        compute_duration(&self.deadline, now)
    }

    pub fn label_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String {
        render_days_remaining(&self.duration_at(now))
    }

    /// Render the label as of `now` into the configured element.
    pub fn update<S, Tz>(&self, sink: &mut S, now: &DateTime<Tz>) -> Result<String, CountdownError>
    where
        S: TextSink + ?Sized,
        Tz: TimeZone,
    {
        let label = update_element_at(sink, &self.target_id, &self.deadline, now)?;
        log::info!("wrote `{}` to `{}`", label, self.target_id);
        Ok(label)
    }

    /// Same as [`update`](Self::update) using the wall clock.
    pub fn update_now<S>(&self, sink: &mut S) -> Result<String, CountdownError>
    where
        S: TextSink + ?Sized,
    {
        self.update(sink, &Utc::now())
    }
}
