//! Naming of backup destinations

use std::path::{Path, PathBuf};

/// Folder (or archive stem) a backup of `project_dir` is written to
///
/// `<output>/<project-name>_<timestamp>` when an output folder is given,
/// otherwise `<project-name>_<timestamp>` next to the project.
pub fn destination_for(project_dir: &Path, output: Option<&Path>, timestamp: &str) -> PathBuf {
    let project_name = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());
    let folder = format!("{}_{}", project_name, timestamp);

    match output {
        Some(output) => output.join(folder),
        None => project_dir.parent().unwrap_or(project_dir).join(folder),
    }
}
