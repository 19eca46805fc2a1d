//! One backup run: settings, rule selection, then archive or copy

use crate::cli::Cli;
use crate::exit_codes::{EXIT_NO_RULE, EXIT_SUCCESS};
use anyhow::{anyhow, bail, Context, Result};
use shlerp_backup::{
    archive_path, build_archive, destination_for, duplicate, list_entries, BackupSummary,
    ListOptions,
};
use shlerp_common::{compact_timestamp, RunId};
use shlerp_config::Settings;
use shlerp_project_detection::{Detector, Rule, RuleStore};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, info_span};

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// `--detect-only`: the rule that would be applied
    Detected(String),
    /// Backup written
    BackedUp {
        destination: PathBuf,
        summary: BackupSummary,
    },
    /// Detection settled on nothing and no `--rule` was given
    NoRule,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Detected(_) | RunOutcome::BackedUp { .. } => EXIT_SUCCESS,
            RunOutcome::NoRule => EXIT_NO_RULE,
        }
    }
}

/// Run the command described by `cli`
pub fn run(cli: &Cli) -> Result<RunOutcome> {
    let started = Instant::now();
    let run_id = RunId::generate();

    let project_dir = resolve_project_dir(cli.path.as_deref())?;
    let settings = Settings::load(&cli.config_dir).with_context(|| {
        format!(
            "Failed to load settings from {}",
            cli.config_dir.display()
        )
    })?;
    let store = RuleStore::new(
        settings.rules.source_path(&cli.config_dir),
        settings.rules.history_path(&cli.config_dir),
    );

    let rule = {
        let span = info_span!("scan", run = %run_id);
        let _enter = span.enter();

        match select_rule(cli, &store, settings.rules.history_limit, &project_dir)? {
            Some(rule) => rule,
            None => {
                error!("Please select a rule to apply with --rule");
                return Ok(RunOutcome::NoRule);
            }
        }
    };

    if cli.detect_only {
        return Ok(RunOutcome::Detected(rule.name));
    }

    let options = ListOptions {
        no_git: cli.nogit,
        no_exclusions: cli.noexcl,
        keep_hidden: cli.keephidden,
    };
    let entries = list_entries(&project_dir, &rule.exclusions, options)?;

    let output = cli
        .output
        .as_deref()
        .map(std::path::absolute)
        .transpose()
        .context("Invalid output folder")?;
    let destination = destination_for(&project_dir, output.as_deref(), &compact_timestamp());

    if cli.archive {
        let span = info_span!("arch", run = %run_id);
        let _enter = span.enter();

        let archive = archive_path(&destination);
        let summary = build_archive(&project_dir, &entries, &rule.exclusions, &archive)?;
        info!(
            "Project archived ({:.2}s): {}",
            started.elapsed().as_secs_f64(),
            archive.display()
        );
        Ok(RunOutcome::BackedUp {
            destination: archive,
            summary,
        })
    } else {
        let span = info_span!("copy", run = %run_id);
        let _enter = span.enter();

        let summary = duplicate(&project_dir, &entries, &rule.exclusions, &destination)?;
        info!(
            "Project duplicated ({:.2}s): {}",
            started.elapsed().as_secs_f64(),
            destination.display()
        );
        Ok(RunOutcome::BackedUp {
            destination,
            summary,
        })
    }
}

/// The `--rule` given on the command line, or the detected one
fn select_rule(
    cli: &Cli,
    store: &RuleStore,
    history_limit: usize,
    project_dir: &Path,
) -> Result<Option<Rule>> {
    if let Some(name) = &cli.rule {
        let rule = store
            .find_rule(name)?
            .ok_or_else(|| anyhow!("Unknown rule '{}' in {}", name, store.source_path().display()))?;
        return Ok(Some(rule));
    }

    let outcome = Detector::new(store, history_limit).auto_detect(project_dir)?;
    Ok(outcome.into_rule())
}

fn resolve_project_dir(path: Option<&Path>) -> Result<PathBuf> {
    let project_dir = match path {
        Some(path) => std::path::absolute(path)
            .with_context(|| format!("Invalid project path {}", path.display()))?,
        None => std::env::current_dir().context("Cannot read the current directory")?,
    };

    if !project_dir.is_dir() {
        bail!("Project folder {} does not exist", project_dir.display());
    }
    Ok(project_dir)
}
