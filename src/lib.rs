// edgepatch - maintenance patchers for edge function sources
// Regex-based rewrites of fetch header blocks and CORS constants

pub mod cli;
pub mod config;
pub mod error;
pub mod patch;
pub mod report;
pub mod runner;
pub mod target;
pub mod utils;

use anyhow::{anyhow, Result};
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging for the command-line tools
///
/// Logs go to stderr so stdout only carries the report. `RUST_LOG`
/// takes precedence over the `verbose` flag.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "edgepatch=debug" } else { "edgepatch=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing edgepatch v{}", version());
    Ok(())
}
