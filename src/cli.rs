use clap::Args;
use std::path::PathBuf;

/// Flags shared by the patch binaries
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root the fixed target paths are resolved against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging (includes a diff of every change)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["update-all-cors"]).unwrap();
        assert_eq!(cli.common.root, PathBuf::from("."));
        assert!(!cli.common.verbose);
    }

    #[test]
    fn test_root_and_verbose() {
        let cli = Cli::try_parse_from(["add-apikey-headers", "--root", "/srv/app", "-v"]).unwrap();
        assert_eq!(cli.common.root, PathBuf::from("/srv/app"));
        assert!(cli.common.verbose);
    }
}
