// Command line front end

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::json;

use crate::models::settings::CountdownSettings;
use crate::services::countdown::{CountdownService, ElementMap, HtmlPage};
use crate::services::settings::SettingsService;

/// Write the number of days left until a deadline into a page element.
#[derive(Debug, Parser)]
#[command(name = "days-countdown", author, version, about)]
pub struct Args {
    /// Settings file (defaults to the platform config dir).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Deadline, e.g. `2023-06-06T00:00:00` or `2023-06-06`.
    #[arg(short, long)]
    pub deadline: Option<String>,

    /// Zone for deadlines without an offset: `local`, `utc` or an IANA name.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Element id that receives the label.
    #[arg(short, long)]
    pub target: Option<String>,

    /// HTML page to update in place instead of printing the label.
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// Print the full countdown as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Flags win over whatever the settings file holds.
    pub fn apply(&self, settings: &mut CountdownSettings) {
        if let Some(deadline) = &self.deadline {
            settings.deadline = deadline.clone();
        }
        if let Some(timezone) = &self.timezone {
            settings.timezone = timezone.clone();
        }
        if let Some(target) = &self.target {
            settings.target = target.clone();
        }
        if let Some(page) = &self.page {
            settings.page = Some(page.clone());
        }
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The page file was rewritten with this label.
    Page { path: PathBuf, label: String },
    /// Text for stdout: the label, or the JSON report with `--json`.
    Text(String),
}

/// Settings from the file plus flags, validated once merged.
pub fn resolve_settings(args: &Args) -> Result<CountdownSettings> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(SettingsService::default_path);
    let mut settings = SettingsService::read(&config_path)?;
    args.apply(&mut settings);
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    log::debug!("settings: {settings:?}");
    Ok(settings)
}

/// Render the countdown as of `now`.
pub fn run(args: &Args, now: DateTime<Utc>) -> Result<Output> {
    let settings = resolve_settings(args)?;
    let service = CountdownService::from_settings(&settings).context("invalid countdown")?;

    if let Some(path) = &settings.page {
        let mut page = HtmlPage::open(path)?;
        let label = service.update(&mut page, &now)?;
        page.save()?;
        return Ok(Output::Page {
            path: path.clone(),
            label,
        });
    }

    let mut elements = ElementMap::new().with_element(service.target_id());
    let label = service.update(&mut elements, &now)?;
    if !args.json {
        return Ok(Output::Text(label));
    }

    let report = json!({
        "deadline": service.deadline(),
        "target": service.target_id(),
        "duration": service.duration_at(&now),
        "label": label,
    });
    Ok(Output::Text(serde_json::to_string_pretty(&report)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let args = Args::try_parse_from([
            "days-countdown",
            "--deadline",
            "2030-01-01",
            "--timezone",
            "utc",
            "--target",
            "left",
        ])
        .unwrap();
        let mut settings = CountdownSettings::default();
        args.apply(&mut settings);

        assert_eq!(settings.deadline, "2030-01-01");
        assert_eq!(settings.timezone, "utc");
        assert_eq!(settings.target, "left");
        assert!(settings.page.is_none());
    }

    #[test]
    fn test_absent_flags_keep_settings() {
        let args = Args::try_parse_from(["days-countdown"]).unwrap();
        let mut settings = CountdownSettings::default();
        args.apply(&mut settings);
        assert_eq!(settings, CountdownSettings::default());
    }
}
