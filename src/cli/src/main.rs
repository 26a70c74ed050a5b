//! CLI for the Gitea issue migrator.
//!
//! This tool copies every issue of a Gitea repository, with its comments
//! quoted in the body, into a GitHub repository.

use clap::Parser;
use gitea_issue_migrator::{MigrationConfig, RateLimitPolicy, RunSummary, Runner, RunnerError};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Gitea Issue Migrator - Copy issues and comments from Gitea to GitHub.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gitea repository API URL (e.g. https://git.example.com/api/v1/repos/owner/repo).
    #[arg(long, env = "GITEA_REPO_URL")]
    gitea_repo_url: String,

    /// Gitea access token.
    #[arg(long, env = "GITEA_TOKEN", hide_env_values = true)]
    gitea_token: String,

    /// GitHub issues API URL (e.g. https://api.github.com/repos/owner/repo/issues).
    #[arg(long, env = "GITHUB_ISSUE_API_URL")]
    github_issue_api_url: String,

    /// GitHub token with write access to issues.
    #[arg(long, env = "GITHUB_API_KEY", hide_env_values = true)]
    github_api_key: String,

    /// Preview issues without creating them.
    #[arg(long)]
    dry_run: bool,

    /// Seconds to wait before retrying a rate-limited issue creation.
    #[arg(long, default_value_t = 3)]
    retry_delay_secs: u64,

    /// Maximum create attempts per issue while rate limited.
    #[arg(long, default_value_t = 20)]
    max_create_attempts: u32,

    /// Pause when fewer than this many GitHub requests remain.
    #[arg(long, default_value_t = 10)]
    low_quota_threshold: u64,

    /// Seconds to pause when the remaining GitHub quota is low.
    #[arg(long, default_value_t = 10)]
    low_quota_delay_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before tracing so it can set RUST_LOG
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    init_tracing();

    // A missing .env file is fine; variables may come from the environment
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to load .env file");
        }
    }

    // Octocrab and reqwest both pull in rustls; pin one crypto provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Migration failed");
            ExitCode::from(1)
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

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let policy = RateLimitPolicy {
        create_retry_delay: Duration::from_secs(args.retry_delay_secs),
        max_create_attempts: args.max_create_attempts,
        low_remaining_threshold: args.low_quota_threshold,
        low_remaining_delay: Duration::from_secs(args.low_quota_delay_secs),
    };
    let config = MigrationConfig::new(
        &args.gitea_repo_url,
        &args.gitea_token,
        &args.github_issue_api_url,
        &args.github_api_key,
    )?
    .with_dry_run(args.dry_run)
    .with_rate_limit_policy(policy)?;

    let runner = Runner::new(&config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues found: {}", summary.issues_discovered);
    println!("  Comments found: {}", summary.comments_discovered);
    println!("  Issues processed: {}", summary.issues_processed());

    if summary.dry_run {
        println!("  Issues previewed: {}", summary.issues_previewed);
    } else {
        println!("  Issues created: {}", summary.issues_created);
        println!("  Issues closed: {}", summary.issues_closed);
    }
    println!("  Issues skipped: {}", summary.issues_skipped);
}
