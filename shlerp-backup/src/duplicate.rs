//! Plain folder copy of a project

use crate::error::{BackupError, Result};
use crate::summary::{BackupSummary, EntryKind};
use crate::walk::{walk_listed, Item};
use shlerp_common::Exclusions;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Copy the listed entries of `project_dir` into a new `destination` folder
///
/// Missing parents of `destination` are created, `destination` itself must
/// not exist yet. On Unix symlinks are recreated as symlinks; elsewhere the
/// file they point to is copied. A path that cannot be copied is logged and
/// skipped.
///
/// # Errors
///
/// * `DestinationExists` if `destination` is already there
/// * `Io` if it cannot be created
pub fn duplicate(
    project_dir: &Path,
    entries: &[String],
    exclusions: &Exclusions,
    destination: &Path,
) -> Result<BackupSummary> {
    let started = Instant::now();

    if destination.exists() {
        return Err(BackupError::DestinationExists {
            path: destination.to_path_buf(),
        });
    }
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| BackupError::io(parent, e))?;
    }
    fs::create_dir(destination).map_err(|e| BackupError::io(destination, e))?;

    let mut summary = BackupSummary::default();
    for item in walk_listed(project_dir, entries, exclusions, destination) {
        match copy_item(&item, destination) {
            Ok(kind) => {
                summary.record(kind);
                debug!("Done: {}", item.relative.display());
            }
            Err(e) => warn!(
                "A problem happened while handling {}: {}",
                item.relative.display(),
                e
            ),
        }
    }

    summary.elapsed = started.elapsed();
    info!("{}", summary);
    Ok(summary)
}

fn copy_item(item: &Item, destination: &Path) -> Result<EntryKind> {
    let source = item.entry.path();
    let target = destination.join(&item.relative);
    let file_type = item.entry.file_type();

    if file_type.is_symlink() {
        copy_symlink(source, &target)?;
        Ok(EntryKind::Symlink)
    } else if file_type.is_dir() {
        fs::create_dir_all(&target).map_err(|e| BackupError::io(&target, e))?;
        Ok(EntryKind::Folder)
    } else {
        fs::copy(source, &target).map_err(|e| BackupError::io(&target, e))?;
        Ok(EntryKind::File)
    }
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(source).map_err(|e| BackupError::io(source, e))?;
    std::os::unix::fs::symlink(&link, target).map_err(|e| BackupError::io(target, e))
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    if source.is_dir() {
        warn!("Not following folder link {}", source.display());
        return Ok(());
    }
    fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| BackupError::io(target, e))
}
