//! Hotspot downloader CLI
//!
//! Downloads security hotspots from a SonarQube or SonarCloud instance and
//! prints one report line per hotspot, or writes them to a file.

use std::path::PathBuf;

use clap::Parser;
use hotspot_downloader::{
    client::SonarClient,
    config::RunConfig,
    error::Result,
    report::{self, ReportSink},
    services,
};
use regex::Regex;

/// Environment variable holding the authentication token.
const TOKEN_ENV_VAR: &str = "SONAR_TOKEN";

/// Download security hotspots from SonarQube/SonarCloud
#[derive(Parser, Debug)]
#[command(
    name = "hotspot-downloader",
    version,
    about = "Downloads security hotspots from SonarQube/SonarCloud"
)]
struct Cli {
    /// Regex to filter project keys by (full match). Ignored when --project
    /// is given.
    #[arg(short = 'r', long = "project-filter", value_parser = parse_full_match_regex)]
    project_filter: Option<Regex>,

    /// Page size to use for pagination (may affect performance)
    #[arg(long, default_value_t = 500)]
    page_size: u32,

    /// Project key to download hotspots from; repeat for multiple projects.
    /// Skips project enumeration and the project filter entirely.
    #[arg(short = 'p', long = "project")]
    projects: Vec<String>,

    /// Base URL of SonarCloud or your SonarQube instance
    #[arg(short, long, default_value = "https://sonarcloud.io")]
    base_url: String,

    /// Organization (required on SonarCloud)
    #[arg(short, long)]
    organization: Option<String>,

    /// Regex to filter hotspot messages by (full match)
    #[arg(short = 'm', long = "message-filter", value_parser = parse_full_match_regex)]
    message_filter: Option<Regex>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'f', long = "outputfile")]
    outputfile: Option<PathBuf>,

    /// Rule key to filter hotspots by; repeat for multiple rules
    #[arg(short = 'k', long = "rule-key")]
    rule_keys: Vec<String>,

    /// Cap on simultaneous requests per fan-out stage (unbounded if unset)
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_full_match_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    services::full_match_regex(pattern)
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let token = std::env::var(TOKEN_ENV_VAR).ok();
    if token.as_deref().is_none_or(|t| t.trim().is_empty()) {
        log::debug!("{TOKEN_ENV_VAR} not set, sending unauthenticated requests");
    }

    let config = RunConfig {
        base_url: cli.base_url.trim_end_matches('/').to_string(),
        organization: cli.organization,
        token,
        page_size: cli.page_size,
        timeout_secs: cli.timeout,
        max_concurrent: cli.max_concurrent,
        ..RunConfig::default()
    };
    config.validate()?;

    let client = SonarClient::new(&config)?;

    // Open the sink up front so a bad output path fails before any request.
    let mut sink = ReportSink::open(cli.outputfile.as_deref())?;

    let project_keys = services::resolve_project_keys(
        &client,
        &config,
        &cli.projects,
        cli.project_filter.as_ref(),
    )
    .await?;
    log::debug!("Resolved {} project(s).", project_keys.len());

    let hotspots = services::collect_all_hotspots(
        &client,
        &config,
        &project_keys,
        cli.message_filter.as_ref(),
    )
    .await?;
    log::debug!("Collected {} matching hotspot(s).", hotspots.len());

    let details = services::enrich_and_filter(&client, &config, hotspots, &cli.rule_keys).await?;

    for detail in &details {
        sink.emit(&report::format_line(detail, config.base_url.as_str()))?;
    }

    Ok(())
}
