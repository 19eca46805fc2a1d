//! Deep extension crawl used to break ties and rescue empty passes

use crate::types::{Lead, PendingExtension};
use glob::Pattern;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Add the weight of every file matching a lead's deferred extensions
///
/// Each pending extension contributes `weight` for every regular file below
/// `project_dir` whose name matches it. Hidden files and directories are
/// skipped and symlinks are not followed. The project tree is walked at most
/// once per call, however many leads and patterns there are.
pub fn crawl(project_dir: &Path, leads: &mut [Lead]) {
    if leads.iter().all(|lead| lead.extensions.is_empty()) {
        return;
    }

    let file_names = visible_file_names(project_dir);
    debug!(
        "Crawling {} files under {}",
        file_names.len(),
        project_dir.display()
    );

    for lead in leads.iter_mut() {
        let gained = lead
            .extensions
            .iter()
            .map(|extension| extension_points(&file_names, extension))
            .fold(0u64, u64::saturating_add);
        lead.credit(gained);
    }
}

fn extension_points(file_names: &[String], extension: &PendingExtension) -> u64 {
    let pattern = match Pattern::new(&extension.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("Ignoring extension '{}': {}", extension.pattern, e);
            return 0;
        }
    };

    let count = file_names
        .iter()
        .filter(|name| pattern.matches(name))
        .count() as u64;

    count.saturating_mul(u64::from(extension.weight))
}

fn visible_file_names(project_dir: &Path) -> Vec<String> {
    WalkDir::new(project_dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lead_with(name: &str, extensions: &[(&str, u32)]) -> Lead {
        let mut lead = Lead::new(name);
        for (pattern, weight) in extensions {
            lead.defer(*pattern, *weight);
        }
        lead
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_crawl_counts_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "main.go");
        touch(temp_dir.path(), "pkg/util.go");
        touch(temp_dir.path(), "pkg/deep/more.go");
        touch(temp_dir.path(), "README.md");

        let mut leads = vec![lead_with("go", &[("*.go", 2)])];
        crawl(temp_dir.path(), &mut leads);

        assert_eq!(leads[0].total, 6);
    }

    #[test]
    fn test_crawl_adds_to_existing_total() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.py");

        let mut lead = lead_with("python", &[("*.py", 1), ("*.pyi", 4)]);
        lead.credit(10);
        let mut leads = vec![lead];
        crawl(temp_dir.path(), &mut leads);

        assert_eq!(leads[0].total, 11);
    }

    #[test]
    fn test_crawl_skips_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), ".hidden.rs");
        touch(temp_dir.path(), ".cache/cached.rs");
        touch(temp_dir.path(), "src/lib.rs");

        let mut leads = vec![lead_with("rust", &[("*.rs", 1)])];
        crawl(temp_dir.path(), &mut leads);

        assert_eq!(leads[0].total, 1);
    }

    #[test]
    fn test_crawl_ignores_directories_named_like_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("weird.rs")).unwrap();

        let mut leads = vec![lead_with("rust", &[("*.rs", 1)])];
        crawl(temp_dir.path(), &mut leads);

        assert_eq!(leads[0].total, 0);
    }

    #[test]
    fn test_crawl_each_lead_independently() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.js");
        touch(temp_dir.path(), "b.ts");
        touch(temp_dir.path(), "c.ts");

        let mut leads = vec![
            lead_with("js", &[("*.js", 1)]),
            lead_with("ts", &[("*.ts", 1)]),
            lead_with("none", &[]),
        ];
        crawl(temp_dir.path(), &mut leads);

        let totals: Vec<u64> = leads.iter().map(|l| l.total).collect();
        assert_eq!(totals, [1, 2, 0]);
    }

    #[test]
    fn test_invalid_pattern_scores_nothing() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.x");

        let mut leads = vec![lead_with("bad", &[("*.[x", 5)])];
        crawl(temp_dir.path(), &mut leads);

        assert_eq!(leads[0].total, 0);
    }
}
