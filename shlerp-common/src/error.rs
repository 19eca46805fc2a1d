//! Severity classification shared by every shlerp error type
//!
//! Each crate defines its own `thiserror` enum. They all implement [`Severity`]
//! so the binary can decide whether a failure ends the run or is only reported.

/// Severity levels for error classification
///
/// # Severity Levels
///
/// - **Warning**: the run continues; the condition is reported and a fallback
///   is used (missing history file, history that could not be written).
/// - **Error**: one operation failed but the run can report and carry on
///   (a single entry that could not be archived).
/// - **Critical**: the run cannot continue (missing or malformed rule source).
///
/// # Examples
///
/// ```rust
/// use shlerp_common::ErrorSeverity;
///
/// let history_missing = ErrorSeverity::Warning;
/// let rules_missing = ErrorSeverity::Critical;
/// assert!(rules_missing.is_fatal());
/// assert!(!history_missing.is_fatal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but the run can continue
    Error,

    /// The run cannot continue
    Critical,
}

impl ErrorSeverity {
    /// True when an error of this severity must end the run
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorSeverity::Critical)
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Trait for error types that have severity levels
///
/// # Example
///
/// ```rust
/// use shlerp_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum MyError {
///     SourceMissing,
///     EntrySkipped,
///     CacheStale,
/// }
///
/// impl Severity for MyError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             MyError::SourceMissing => ErrorSeverity::Critical,
///             MyError::EntrySkipped => ErrorSeverity::Error,
///             MyError::CacheStale => ErrorSeverity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(MyError::SourceMissing.severity(), ErrorSeverity::Critical);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}
