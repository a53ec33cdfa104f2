//! CLI argument parsing for loopcheck

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_WORKFLOW_PATH: &str = "n8n-workflow-content-generation.json";

#[derive(Parser, Debug)]
#[command(name = "loopcheck")]
#[command(author, version, about = "Check split-in-batches loops in an exported n8n workflow", long_about = None)]
pub struct Cli {
    /// Exported workflow JSON to analyze
    #[arg(default_value = DEFAULT_WORKFLOW_PATH)]
    pub path: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_defaults_to_conventional_export_name() {
        let cli = Cli::parse_from(["loopcheck"]);
        assert_eq!(cli.path, PathBuf::from(DEFAULT_WORKFLOW_PATH));
        assert!(!cli.no_color);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["loopcheck", "--no-color", "-v", "wf.json"]);
        assert_eq!(cli.path, PathBuf::from("wf.json"));
        assert!(cli.no_color && cli.verbose);
    }
}
