//! Logging setup.
//!
//! Diagnostics go to stderr so stdout stays reserved for rendered output
//! (`--format json` can be piped straight into another tool).
//!
//! ```ignore
//! use mscmap::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbosity);
//! }
//! ```

use std::io;
use tracing_subscriber::EnvFilter;

/// Maps `-v` repetitions to a default filter directive.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter: `RUST_LOG` when set and valid, else the verbosity default.
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)))
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(build_filter(verbosity))
        .with_target(false)
        .try_init();
}
