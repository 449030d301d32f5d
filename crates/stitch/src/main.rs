//! Stitch CLI - assembles HTML fragment projects and their landing page.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "stitch")]
#[command(about = "Assemble HTML fragment projects and regenerate their landing page")]
#[command(version)]
pub struct Cli {
    /// Project to build (builds every project when omitted)
    project: Option<String>,

    /// Root directory containing the project directories
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Path to config file (defaults to stitch.toml in the root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    commands::build::run(cli.root, cli.config, cli.project.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["stitch"]).unwrap();

        assert_eq!(cli.project, None);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.config, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_single_project() {
        let cli = Cli::try_parse_from(["stitch", "survey", "-v", "--root", "site"]).unwrap();

        assert_eq!(cli.project.as_deref(), Some("survey"));
        assert_eq!(cli.root, PathBuf::from("site"));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_second_project() {
        assert!(Cli::try_parse_from(["stitch", "a", "b"]).is_err());
    }
}
