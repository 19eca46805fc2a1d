//! Error types for backup operations

use shlerp_common::{ErrorSeverity, Severity};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using BackupError
pub type Result<T> = std::result::Result<T, BackupError>;

#[derive(Error, Debug)]
pub enum BackupError {
    /// Project folder could not be listed
    #[error("cannot list '{path}': {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Refusing to copy into an existing folder
    #[error("destination '{path}' already exists")]
    DestinationExists { path: PathBuf },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("archive error on '{path}': {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl BackupError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn archive(path: &Path, source: zip::result::ZipError) -> Self {
        Self::Archive {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Severity for BackupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BackupError::Listing { .. } => ErrorSeverity::Error,
            BackupError::DestinationExists { .. } => ErrorSeverity::Error,
            BackupError::Io { .. } => ErrorSeverity::Error,
            BackupError::Archive { .. } => ErrorSeverity::Error,
        }
    }
}
