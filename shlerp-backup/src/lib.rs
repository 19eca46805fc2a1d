//! # shlerp Backup
//!
//! Once a rule is known, its exclusions decide which top-level entries of the
//! project are kept. Those entries are then either packed into a zip archive
//! or copied to a timestamped folder.

pub mod archive;
pub mod destination;
pub mod duplicate;
pub mod error;
pub mod listing;
pub mod summary;
mod walk;

pub use archive::{archive_path, build_archive, COMPRESSION_LEVEL};
pub use destination::destination_for;
pub use duplicate::duplicate;
pub use error::{BackupError, Result};
pub use listing::{list_entries, ListOptions};
pub use summary::{BackupSummary, EntryKind};
