// Countdown settings model

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::countdown::{CountdownError, DEFAULT_TARGET_ID};
use crate::utils::date::{parse_deadline, DeadlineZone};

/// User-editable countdown configuration, stored as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    /// Deadline literal, e.g. `2023-06-06T00:00:00`.
    pub deadline: String,
    /// `local`, `utc` or an IANA zone name; applies when `deadline` has no offset.
    pub timezone: String,
    /// Element id that receives the label.
    pub target: String,
    /// HTML page to update in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PathBuf>,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            deadline: "2023-06-06T00:00:00".to_string(),
            timezone: "local".to_string(),
            target: DEFAULT_TARGET_ID.to_string(),
            page: None,
        }
    }
}

impl CountdownSettings {
    pub fn zone(&self) -> Result<DeadlineZone, CountdownError> {
        self.timezone.parse()
    }

    pub fn resolve_deadline(&self) -> Result<DateTime<Utc>, CountdownError> {
        parse_deadline(&self.deadline, self.zone()?)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), String> {
        if self.target.trim().is_empty() {
            return Err("Target element id must not be empty".to_string());
        }

        self.resolve_deadline().map_err(|e| e.to_string())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CountdownSettings::default();
        assert_eq!(settings.deadline, "2023-06-06T00:00:00");
        assert_eq!(settings.timezone, "local");
        assert_eq!(settings.target, "days");
        assert!(settings.page.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_target_is_invalid() {
        let settings = CountdownSettings {
            target: "  ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_timezone_is_invalid() {
        let settings = CountdownSettings {
            timezone: "Nowhere/Special".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("Nowhere/Special"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: CountdownSettings = toml::from_str(r#"target = "left""#).unwrap();
        assert_eq!(settings.target, "left");
        assert_eq!(settings.deadline, CountdownSettings::default().deadline);
    }
}
