use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while resolving a deadline or writing a countdown label.
#[derive(Debug, Error)]
pub enum CountdownError {
    /// No rendering target is registered under the requested identifier.
    #[error("no render target with id `{id}`")]
    TargetNotFound { id: String },

    #[error("invalid deadline `{input}`: {reason}")]
    InvalidDeadline { input: String, reason: String },

    #[error("unknown timezone `{0}`")]
    UnknownTimezone(String),

    #[error("failed to access page {}: {source}", path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CountdownError {
    pub fn target_not_found(id: impl Into<String>) -> Self {
        Self::TargetNotFound { id: id.into() }
    }

    pub fn invalid_deadline(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDeadline {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
