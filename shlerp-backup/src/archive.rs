//! Zip archive of a project

use crate::error::{BackupError, Result};
use crate::summary::{BackupSummary, EntryKind};
use crate::walk::{portable_name, walk_listed, Item};
use shlerp_common::Exclusions;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Deflate level used for every entry
pub const COMPRESSION_LEVEL: i32 = 9;

/// `<destination>.zip`
pub fn archive_path(destination: &Path) -> PathBuf {
    let mut path = destination.as_os_str().to_owned();
    path.push(".zip");
    PathBuf::from(path)
}

/// Write the listed entries of `project_dir` into a zip file
///
/// Entries are stored relative to the project root. Symlinks are stored as
/// symlink entries holding their target. A path that cannot be added is
/// logged and skipped; an archive that ends up empty is reported as a
/// warning.
///
/// # Errors
///
/// Fails when the archive file cannot be created or finalized.
pub fn build_archive(
    project_dir: &Path,
    entries: &[String],
    exclusions: &Exclusions,
    archive: &Path,
) -> Result<BackupSummary> {
    let started = Instant::now();

    let file = File::create(archive).map_err(|e| BackupError::io(archive, e))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let mut summary = BackupSummary::default();
    for item in walk_listed(project_dir, entries, exclusions, archive) {
        let name = portable_name(&item.relative);
        match add_item(&mut zip, &item, &name, options) {
            Ok(kind) => {
                summary.record(kind);
                debug!("Done: {}", name);
            }
            Err(e) => warn!("A problem happened while handling {}: {}", name, e),
        }
    }

    zip.finish().map_err(|e| BackupError::archive(archive, e))?;
    summary.elapsed = started.elapsed();

    if summary.is_empty() {
        warn!("Corrupted archive: {}", archive.display());
    } else {
        info!("{}", summary);
    }
    Ok(summary)
}

fn add_item<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    item: &Item,
    name: &str,
    options: FileOptions,
) -> Result<EntryKind> {
    let path = item.entry.path();
    let file_type = item.entry.file_type();

    if file_type.is_symlink() {
        let target = fs::read_link(path).map_err(|e| BackupError::io(path, e))?;
        zip.add_symlink(name, target.to_string_lossy(), options)
            .map_err(|e| BackupError::archive(path, e))?;
        Ok(EntryKind::Symlink)
    } else if file_type.is_dir() {
        zip.add_directory(name, options)
            .map_err(|e| BackupError::archive(path, e))?;
        Ok(EntryKind::Folder)
    } else {
        let mut source = File::open(path).map_err(|e| BackupError::io(path, e))?;
        zip.start_file(name, options)
            .map_err(|e| BackupError::archive(path, e))?;
        io::copy(&mut source, zip).map_err(|e| BackupError::io(path, e))?;
        Ok(EntryKind::File)
    }
}
