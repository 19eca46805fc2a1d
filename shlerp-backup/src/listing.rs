//! Top-level entries of a project that go into a backup

use crate::error::{BackupError, Result};
use shlerp_common::Exclusions;
use std::path::Path;
use tracing::{trace, warn};
use walkdir::WalkDir;

const GIT_FOLDER: &str = ".git";
const GIT_IGNORE: &str = ".gitignore";

/// Switches that loosen or tighten the rule exclusions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Also leave out `.git` and `.gitignore`
    pub no_git: bool,
    /// Ignore the rule exclusions, only the dependency folder is left out
    pub no_exclusions: bool,
    /// Keep entries whose name starts with a dot
    pub keep_hidden: bool,
}

/// Names of the direct children of `project_dir` to back up, sorted
///
/// Without `keep_hidden`, dot-entries are dropped except `.git` and
/// `.gitignore`. Folder and file exclusions, and the dependency folder,
/// drop any entry whose name contains them. With `no_exclusions` only an
/// entry named exactly like the dependency folder is dropped. Names that
/// are not valid UTF-8 are skipped with a warning.
///
/// # Errors
///
/// Returns `Listing` when the folder cannot be read.
pub fn list_entries(
    project_dir: &Path,
    exclusions: &Exclusions,
    options: ListOptions,
) -> Result<Vec<String>> {
    let mut exclusions = exclusions.clone();
    if options.no_git {
        exclusions.folders.push(GIT_FOLDER.to_string());
        exclusions.files.push(GIT_IGNORE.to_string());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(project_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| BackupError::Listing {
            path: project_dir.to_path_buf(),
            source: e,
        })?;

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 entry: {}", entry.path().display());
            continue;
        };

        // Follows symlinks, so a link to a folder is treated as a folder
        let is_dir = entry.path().is_dir();

        if keeps(name, is_dir, &exclusions, options) {
            names.push(name.to_string());
        } else {
            trace!("Excluded: {}", name);
        }
    }

    Ok(names)
}

fn keeps(name: &str, is_dir: bool, exclusions: &Exclusions, options: ListOptions) -> bool {
    if options.no_exclusions {
        return !exclusions.is_dep_folder(name);
    }

    if !options.keep_hidden && name.starts_with('.') && name != GIT_FOLDER && name != GIT_IGNORE {
        return false;
    }

    let excluded = if is_dir {
        exclusions.excludes_folder(name)
    } else {
        exclusions.excludes_file(name)
    };

    !excluded && !exclusions.mentions_dep_folder(name)
}
