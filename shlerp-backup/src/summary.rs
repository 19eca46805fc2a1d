//! Counts reported at the end of a backup

use std::fmt;
use std::time::Duration;

/// Kind of entry written to a backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
    Symlink,
}

/// What a backup operation wrote, and how long it took
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackupSummary {
    pub folders: usize,
    pub files: usize,
    pub symlinks: usize,
    pub elapsed: Duration,
}

impl BackupSummary {
    pub fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Folder => self.folders += 1,
            EntryKind::File => self.files += 1,
            EntryKind::Symlink => self.symlinks += 1,
        }
    }

    /// Number of entries written
    pub fn total(&self) -> usize {
        self.folders + self.files + self.symlinks
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for BackupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Folders: {} - Files: {} - Symbolic links: {} ({:.2}s)",
            self.folders,
            self.files,
            self.symlinks,
            self.elapsed.as_secs_f64()
        )
    }
}
