//! CLI for the Renovate Stripper.
//!
//! Removes the `renovate` entry from `package.json` in each given repository
//! and commits the change.

use clap::Parser;
use renovate_stripper::{
    ProcessingResult, RepositoryName, RunFile, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Renovate Stripper - Remove the 'renovate' entry from package.json across repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Repository to process, in "owner/name" format. May be repeated.
    #[arg(long = "repo", value_name = "OWNER/NAME")]
    repos: Vec<String>,

    /// Location of package.json if it is not in the repository root.
    #[arg(long)]
    path: Option<String>,

    /// TOML run file listing repositories and options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum repositories processed at once.
    #[arg(long)]
    concurrency: Option<usize>,

    /// GitHub API root, for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    base_uri: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the configuration from the run file and arguments, then runs.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.token);

    if let Some(path) = &args.config {
        config = config.with_run_file(&RunFile::load(path)?)?;
    }

    let repositories = args
        .repos
        .iter()
        .map(|repo| RepositoryName::parse(repo))
        .collect::<Result<Vec<_>, _>>()?;
    config = config.with_repositories(repositories);

    if let Some(path) = args.path {
        config = config.with_path(path);
    }
    if let Some(concurrency) = args.concurrency {
        config = config.with_concurrency(concurrency);
    }
    if let Some(base_uri) = args.base_uri {
        config = config.with_base_uri(base_uri);
    }

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    for result in &summary.results {
        match result {
            ProcessingResult::Updated {
                repository,
                commit_url,
            } => println!(
                "  {repository}: updated {}",
                commit_url.as_deref().unwrap_or_default()
            ),
            ProcessingResult::Unchanged { repository, reason } => {
                println!("  {repository}: unchanged ({reason})")
            }
            ProcessingResult::Failed { repository, error } => {
                println!("  {repository}: failed ({error})")
            }
        }
    }
    println!(
        "  Repositories processed: {}",
        summary.repositories_processed
    );
    println!("  Updated: {}", summary.updated);
    println!("  Unchanged: {}", summary.unchanged);
    println!("  Failed: {}", summary.failed);
}
