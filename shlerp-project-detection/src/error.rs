//! Error types for project detection

use shlerp_common::{ErrorSeverity, Severity};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using DetectionError
pub type Result<T> = std::result::Result<T, DetectionError>;

/// Errors raised by the rule store, the history cache and the election engine
///
/// Only the rule source errors end a detection run. History errors are
/// returned by the low-level store calls so they can be reported, but the
/// election engine recovers from both of them.
#[derive(Error, Debug)]
pub enum DetectionError {
    /// Rule source is absent or unreadable
    #[error("rule source '{path}' not found: {source}")]
    ConfigMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule source exists but does not describe a list of rules
    #[error("rule source '{path}' is invalid: {source}")]
    RuleSourceInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two rules share a name
    #[error("rule source '{path}' defines '{name}' more than once")]
    DuplicateRule { path: PathBuf, name: String },

    /// History file is absent or malformed
    #[error("history '{path}' unavailable: {reason}")]
    HistoryUnavailable { path: PathBuf, reason: String },

    /// Updated history could not be written
    #[error("failed to write history '{path}': {source}")]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DetectionError {
    /// Create a ConfigMissing error.
    pub fn config_missing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigMissing {
            path: path.into(),
            source,
        }
    }

    /// Create a HistoryUnavailable error.
    pub fn history_unavailable(path: &Path, reason: impl ToString) -> Self {
        Self::HistoryUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a PersistenceFailure error.
    pub fn persistence_failure(path: &Path, source: std::io::Error) -> Self {
        Self::PersistenceFailure {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Severity for DetectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DetectionError::ConfigMissing { .. } => ErrorSeverity::Critical,
            DetectionError::RuleSourceInvalid { .. } => ErrorSeverity::Critical,
            DetectionError::DuplicateRule { .. } => ErrorSeverity::Critical,
            DetectionError::HistoryUnavailable { .. } => ErrorSeverity::Warning,
            DetectionError::PersistenceFailure { .. } => ErrorSeverity::Warning,
        }
    }
}
