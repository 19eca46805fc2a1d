//! # shlerp Common
//!
//! Foundational types and utilities shared across the shlerp crates.
//!
//! ## Modules
//!
//! - [`error`] - Severity classification implemented by every error type
//! - [`run_id`] - Short identifiers tagging the log lines of one run
//! - [`timestamp`] - Compact timestamps for backup destination names
//! - [`types`] - Types shared by rule definitions and backup collaborators

pub mod error;
pub mod run_id;
pub mod timestamp;
pub mod types;

pub use error::{ErrorSeverity, Severity};
pub use run_id::{RunId, RUN_ID_LEN};
pub use timestamp::{compact_timestamp, format_compact, COMPACT_TIMESTAMP_FORMAT};
pub use types::Exclusions;

// Pretty wrapper for formatting types as YAML in logs
use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
/// Use in tracing statements: debug!("Leads: {}", Pretty(&leads));
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Sample {
        name: String,
        total: u64,
    }

    #[test]
    fn test_pretty_renders_yaml_with_leading_newline() {
        let sample = Sample {
            name: "node".to_string(),
            total: 10,
        };
        let rendered = Pretty(&sample).to_string();
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("name: node"));
        assert!(rendered.contains("total: 10"));
    }
}
