use anyhow::{Context, Result};
use clap::Parser;
use edgepatch::{cli::CommonArgs, config::CorsConfig, runner};

/// Update the CORS headers constant in every edge function
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
    runner::update_all_cors(&cli.common.root, &CorsConfig::default(), &mut stdout)
        .context("Failed to update CORS headers")?;

    Ok(())
}
