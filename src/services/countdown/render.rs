//! Rendering targets addressed by element id.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use regex::Regex;

use super::error::CountdownError;
use super::formatter::{compute_duration, render_days_remaining};

/// Anything that can display text under an element identifier.
///
/// Implementations must either replace the element's text completely or
/// leave the sink untouched and return an error.
#[cfg_attr(test, mockall::automock)]
pub trait TextSink {
    fn write_text(&mut self, id: &str, text: &str) -> Result<(), CountdownError>;
}

/// Compute the label for `deadline` as seen from `now` and write it to the
/// element `id`. Returns the label that was written.
pub fn update_element_at<S, A, B>(
    sink: &mut S,
    id: &str,
    deadline: &DateTime<A>,
    now: &DateTime<B>,
) -> Result<String, CountdownError>
where
    S: TextSink + ?Sized,
    A: TimeZone,
    B: TimeZone,
{
    let duration = compute_duration(deadline, now);
    log::debug!("countdown for `{id}`: {duration:?}");
    let label = render_days_remaining(&duration);
    sink.write_text(id, &label)?;
    Ok(label)
}

/// In-memory elements. Only ids registered up front can be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementMap {
    elements: BTreeMap<String, String>,
}

impl ElementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.register(id);
        self
    }

    /// Adds an empty element unless one with this id already exists.
    pub fn register(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TextSink for ElementMap {
    fn write_text(&mut self, id: &str, text: &str) -> Result<(), CountdownError> {
        let slot = self
            .elements
            .get_mut(id)
            .ok_or_else(|| CountdownError::target_not_found(id))?;
        *slot = text.to_string();
        Ok(())
    }
}

/// A static HTML document whose elements are located by their `id` attribute.
///
/// Only the first element carrying the id is rewritten, and everything between
/// its opening tag and the next matching closing tag is treated as its text.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    path: Option<PathBuf>,
    html: String,
}

impl HtmlPage {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            path: None,
            html: html.into(),
        }
    }

    pub fn open(path: &Path) -> Result<Self, CountdownError> {
        let html = fs::read_to_string(path).map_err(|source| CountdownError::Page {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            html,
        })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the document back to the file it was opened from.
    ///
    /// Pages built with [`from_html`](Self::from_html) have no file, so saving
    /// them does nothing.
    pub fn save(&self) -> Result<(), CountdownError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, &self.html).map_err(|source| CountdownError::Page {
            path: path.clone(),
            source,
        })
    }

    /// Byte range of the inner text of the first live element with this id.
    ///
    /// The attribute must be exactly `id` with a matching pair of quotes, and
    /// elements inside `<!-- -->` comments are skipped.
    fn inner_range(&self, id: &str) -> Option<(usize, usize)> {
        let escaped = regex::escape(id);
        let pattern = format!(
            r#"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*?\sid\s*=\s*(?:"{escaped}"|'{escaped}')[^>]*>"#
        );
        let open = Regex::new(&pattern).ok()?;
        let comments = comment_spans(&self.html);
        let captures = open.captures_iter(&self.html).find(|captures| {
            captures.get(0).is_some_and(|found| {
                !comments
                    .iter()
                    .any(|&(start, end)| found.start() >= start && found.start() < end)
            })
        })?;
        let tag = captures.get(1)?.as_str();
        let start = captures.get(0)?.end();

        let close = Regex::new(&format!(r"(?i)</{}\s*>", regex::escape(tag))).ok()?;
        let end = close.find(&self.html[start..])?.start() + start;
        Some((start, end))
    }
}

/// Byte ranges of `<!-- -->` comments; an unterminated comment runs to the end.
fn comment_spans(html: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut offset = 0;
    while let Some(found) = html[offset..].find("<!--") {
        let start = offset + found;
        let end = html[start + 4..]
            .find("-->")
            .map_or(html.len(), |close| start + 4 + close + 3);
        spans.push((start, end));
        offset = end;
    }
    spans
}

impl TextSink for HtmlPage {
    fn write_text(&mut self, id: &str, text: &str) -> Result<(), CountdownError> {
        let (start, end) = self
            .inner_range(id)
            .ok_or_else(|| CountdownError::target_not_found(id))?;
        self.html.replace_range(start..end, &escape_text(text));
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    askama_escape::escape(text, askama_escape::Html).to_string()
}
