use anyhow::{Context, Result};
use clap::Parser;
use edgepatch::{cli::CommonArgs, config::ApiKeyConfig, runner};

/// Add the apikey header to fetch requests aimed at the edge functions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    edgepatch::init_with_logger(cli.common.verbose)?;

    let mut stdout = std::io::stdout().lock();
    runner::add_apikey_headers(&cli.common.root, &ApiKeyConfig::default(), &mut stdout)
        .context("Failed to add apikey headers")?;

    Ok(())
}
