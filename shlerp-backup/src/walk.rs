//! Recursive walk of the listed entries, shared by archive and duplicate

use shlerp_common::Exclusions;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// A path to back up, with its location relative to the project root
pub(crate) struct Item {
    pub entry: DirEntry,
    pub relative: PathBuf,
}

/// Every path under the listed entries, parents before children
///
/// Symlinks are yielded as-is and never followed. Any folder named like the
/// dependency folder is pruned along with its content, and so is `output`,
/// the archive or folder being written, when it lies inside the project.
/// Unreadable paths are logged and skipped.
pub(crate) fn walk_listed<'a>(
    project_dir: &'a Path,
    entries: &'a [String],
    exclusions: &'a Exclusions,
    output: &'a Path,
) -> impl Iterator<Item = Item> + 'a {
    entries.iter().flat_map(move |name| {
        WalkDir::new(project_dir.join(name))
            .follow_links(false)
            .follow_root_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.path() != output
                    && !(entry.file_type().is_dir()
                        && exclusions.is_dep_folder(&entry.file_name().to_string_lossy()))
            })
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let relative = entry.path().strip_prefix(project_dir).ok()?.to_path_buf();
                    Some(Item { entry, relative })
                }
                Err(e) => {
                    warn!("A problem happened while walking {}: {}", name, e);
                    None
                }
            })
    })
}

/// Relative path with `/` separators, as stored in archives
pub(crate) fn portable_name(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_prunes_nested_dependency_folder() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/app/node_modules/lib")).unwrap();
        fs::write(root.join("packages/app/node_modules/lib/index.js"), "").unwrap();
        fs::write(root.join("packages/app/main.js"), "").unwrap();

        let entries = vec!["packages".to_string()];
        let exclusions = Exclusions::dependency_folder("node_modules");
        let names: Vec<String> = walk_listed(root, &entries, &exclusions, &root.join("out"))
            .map(|item| portable_name(&item.relative))
            .collect();

        assert_eq!(names, ["packages", "packages/app", "packages/app/main.js"]);
    }

    #[test]
    fn test_walk_prunes_output_inside_project() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("backups/app_161026120000")).unwrap();
        fs::write(root.join("backups/app_161026120000/copied.py"), "").unwrap();
        fs::write(root.join("backups/older.zip"), "").unwrap();

        let entries = vec!["backups".to_string()];
        let names: Vec<String> = walk_listed(
            root,
            &entries,
            &Exclusions::none(),
            &root.join("backups/app_161026120000"),
        )
        .map(|item| portable_name(&item.relative))
        .collect();

        assert_eq!(names, ["backups", "backups/older.zip"]);
    }

    #[test]
    fn test_portable_name() {
        assert_eq!(portable_name(Path::new("a/b/c.txt")), "a/b/c.txt");
        assert_eq!(portable_name(Path::new("single")), "single");
    }
}
