//! bump-bedrock - keep a Bedrock project on the latest WordPress release
//!
//! Subcommands:
//! - getversion (getv): print the latest upstream WordPress tag
//! - bump <PATH>: update composer.json and CHANGELOG.md when a newer tag exists

use bump_bedrock::cli::{BumpArgs, CliArgs, Command, BUMP_USAGE};
use bump_bedrock::orchestrator::BumpOrchestrator;
use bump_bedrock::output::{create_formatter, OutputConfig};
use bump_bedrock::progress::Progress;
use bump_bedrock::registry::{GitHubTags, TagSource};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("bump-bedrock v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Endpoint: {}", args.endpoint);
        eprintln!("Timeout: {}s", args.timeout.as_secs());
    }

    match &args.command {
        Command::GetVersion => get_version(&args).await,
        Command::Bump(bump) => run_bump(&args, bump).await,
    }
}

async fn get_version(args: &CliArgs) -> anyhow::Result<ExitCode> {
    let source = GitHubTags::from_config(&args.fetch_config())?;

    let mut progress = Progress::new(!args.quiet && !args.json);
    progress.spinner("Fetching WordPress tags...");
    let tag = source.fetch_latest_tag().await;
    progress.finish_and_clear();
    let tag = tag?;

    let formatter = create_formatter(OutputConfig::from_cli(
        args.json,
        args.verbose,
        args.quiet,
        false,
    ));
    let mut stdout = io::stdout().lock();
    formatter.format_tag(&tag, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

async fn run_bump(args: &CliArgs, bump: &BumpArgs) -> anyhow::Result<ExitCode> {
    // A missing project directory is a usage error; nothing is read or fetched
    let Some(root) = bump.path.as_deref() else {
        println!("{}", BUMP_USAGE);
        return Ok(ExitCode::FAILURE);
    };

    let config = bump.bump_config(root);
    config.paths.validate()?;

    if args.verbose {
        eprintln!("Manifest: {}", config.paths.manifest.display());
        eprintln!("Changelog: {}", config.paths.changelog.display());
        eprintln!("Dependency: {}", config.dependency);
        if config.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let source = GitHubTags::from_config(&args.fetch_config())?;
    let orchestrator = BumpOrchestrator::new(Box::new(source), config)
        .with_progress(!args.quiet && !args.json)
        .with_verbose(args.verbose);
    let result = orchestrator.bump().await?;

    let formatter = create_formatter(OutputConfig::from_cli(
        args.json,
        args.verbose,
        args.quiet,
        bump.dry_run,
    ));
    let mut stdout = io::stdout().lock();
    formatter.format_bump(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
