//! CLI argument parsing module for bump-bedrock

use crate::config::{
    parse_timeout, BumpConfig, FetchConfig, ProjectPaths, DEFAULT_CHANGELOG_FILE,
    DEFAULT_DEPENDENCY, DEFAULT_MANIFEST_FILE, DEFAULT_TAGS_ENDPOINT,
};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Printed to stdout when `bump` is called without a project directory
pub const BUMP_USAGE: &str = "Usage: bump-bedrock bump <PATH>

PATH is the Bedrock project directory containing composer.json and CHANGELOG.md";

fn parse_timeout_arg(s: &str) -> Result<Duration, String> {
    parse_timeout(s).map_err(|e| e.to_string())
}

/// Bump that Bedrock version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bump-bedrock",
    version,
    about = "Bump the WordPress version of a Bedrock project",
    arg_required_else_help = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Tag-listing endpoint to query
    #[arg(long, global = true, default_value = DEFAULT_TAGS_ENDPOINT)]
    pub endpoint: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_parser = parse_timeout_arg)]
    pub timeout: Duration,

    /// GitHub API token (raises the anonymous rate limit)
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - status line only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get the most recent WordPress version
    #[command(name = "getversion", visible_alias = "getv")]
    GetVersion,

    /// Execute a bump. Update CHANGELOG.md and composer.json
    Bump(BumpArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BumpArgs {
    /// Bedrock project directory
    pub path: Option<PathBuf>,

    /// Composer package that carries the WordPress version
    #[arg(long, default_value = DEFAULT_DEPENDENCY)]
    pub dependency: String,

    /// Manifest file name inside PATH
    #[arg(long, default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Changelog file name inside PATH
    #[arg(long, default_value = DEFAULT_CHANGELOG_FILE)]
    pub changelog: PathBuf,

    /// Dry run mode - show what would change without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Settings for the tag request
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
            token: self.token.clone().filter(|t| !t.trim().is_empty()),
        }
    }
}

impl BumpArgs {
    /// Settings for a bump rooted at `root`
    pub fn bump_config(&self, root: &Path) -> BumpConfig {
        let paths = ProjectPaths::with_files(root, &self.manifest, &self.changelog);
        BumpConfig::new(paths)
            .with_dependency(self.dependency.clone())
            .with_dry_run(self.dry_run)
    }
}
