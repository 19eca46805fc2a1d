//! Command line definition

use std::path::PathBuf;

use clap::Parser;

/// Dev project backups made easy
///
/// Detects what kind of project a folder holds, then archives or copies it
/// without the files that kind of project does not need backed up.
#[derive(Parser, Debug)]
#[command(name = "shlerp")]
#[command(version)]
#[command(about = "Dev project backups made easy")]
pub struct Cli {
    /// Project folder to back up (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Folder the backup is written to (default: next to the project)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Use this rule instead of detecting one
    #[arg(short, long, value_name = "NAME")]
    pub rule: Option<String>,

    /// Write a zip archive instead of copying the project
    #[arg(short, long)]
    pub archive: bool,

    /// Also leave out .git and .gitignore
    #[arg(long)]
    pub nogit: bool,

    /// Ignore the rule exclusions (the dependency folder is still left out)
    #[arg(long)]
    pub noexcl: bool,

    /// Keep hidden files and folders
    #[arg(long)]
    pub keephidden: bool,

    /// Folder holding settings.json, the rules and the history
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Print the detected rule name and stop
    #[arg(long)]
    pub detect_only: bool,

    /// Enable debug output to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}
