//! Tracing subscriber setup

use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Filter for the requested verbosity
///
/// `--debug` and `--quiet` win over `RUST_LOG`, which is honored otherwise.
pub fn log_filter(debug: bool, quiet: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global subscriber, writing to stderr
pub fn configure_logging(debug: bool, quiet: bool) {
    registry()
        .with(log_filter(debug, quiet))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}
