//! shlerp command line
//!
//! Library half of the `shlerp` binary, so the run logic can be tested
//! without spawning a process.

pub mod cli;
pub mod exit_codes;
pub mod logging;
pub mod run;

pub use cli::Cli;
pub use run::{run, RunOutcome};
