mod classify;
mod cli;
mod config;
mod error;
mod export;
mod metrics;
mod report;
mod source;
mod types;

use crate::error::{DoraError, Result};
use crate::metrics::frequency::MAX_WINDOW_DAYS;
use crate::types::config::DoraConfig;
use crate::types::pull_request::PullRequestRecord;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_DATA: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Compute(cmd) => {
            let loaded = load_config(&cmd.metrics)?;
            let prs = source::load_records(&cmd.input)?;
            emit(&prs, &cmd.metrics, &loaded)
        }
        cli::Commands::Github(cmd) => {
            let loaded = load_config(&cmd.metrics)?;
            let repo = cmd
                .repo
                .as_deref()
                .or_else(|| loaded.repo())
                .ok_or_else(|| {
                    DoraError::InvalidRepo("no repository given and github.repo is unset".to_string())
                })?;
            let token_env = cmd.token_env.as_deref().unwrap_or_else(|| loaded.token_env());
            let token = std::env::var(token_env)
                .ok()
                .filter(|token| !token.trim().is_empty())
                .ok_or_else(|| DoraError::MissingToken(token_env.to_string()))?;
            let api_url = cmd.api_url.as_deref().unwrap_or_else(|| loaded.api_url());
            let state = cmd
                .state
                .map(cli::PrState::as_str)
                .unwrap_or_else(|| loaded.state());

            let client = source::github::GitHubClient::new(api_url, repo, &token)?;
            client.validate_credentials()?;
            let prs = client.fetch_pull_requests(state, loaded.per_page())?;
            tracing::info!(repo, count = prs.len(), "fetched pull requests");

            if let Some(path) = &cmd.save_prs {
                source::save_records(path, &prs)?;
            }
            emit(&prs, &cmd.metrics, &loaded)
        }
    }
}

fn load_config(args: &cli::MetricsArgs) -> Result<DoraConfig> {
    let loaded = config::load_config(&args.config_dir)?;
    if loaded.is_none() {
        tracing::debug!(dir = %args.config_dir.display(), "no configuration files found; using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn emit(prs: &[PullRequestRecord], args: &cli::MetricsArgs, config: &DoraConfig) -> Result<i32> {
    let days = args.days.unwrap_or_else(|| config.window_days());
    if days == 0 || days > MAX_WINDOW_DAYS {
        return Err(DoraError::InvalidWindow(format!(
            "days must be between 1 and {MAX_WINDOW_DAYS} (found {days})"
        )));
    }
    let now = match &args.now {
        Some(raw) => parse_now(raw)?,
        None => Utc::now(),
    };

    let (snapshot, results) = metrics::assemble(prs, metrics::Window::new(days, now));

    let output_format = match args.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };
    let rendered = report::render(&snapshot, &results, output_format)?;
    println!("{rendered}");

    let xlsx = args
        .xlsx
        .clone()
        .or_else(|| config.xlsx_path().map(PathBuf::from));
    let mirror_dir = args
        .mirror_dir
        .clone()
        .or_else(|| config.mirror_dir().map(PathBuf::from));
    match (xlsx, mirror_dir) {
        (Some(path), mirror_dir) => {
            export::write_xlsx(&snapshot, &path)?;
            if let Some(dir) = mirror_dir {
                export::mirror(&path, &dir)?;
            }
        }
        (None, Some(_)) => {
            return Err(DoraError::ConfigParse(
                "mirror directory requires an xlsx export path".to_string(),
            ));
        }
        (None, None) => {}
    }

    if results.has_data() {
        Ok(exit_code::SUCCESS)
    } else {
        eprintln!("warning: no metric had data; reported zeros are placeholders");
        Ok(exit_code::NO_DATA)
    }
}

fn parse_now(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|now| now.with_timezone(&Utc))
        .map_err(|e| DoraError::InvalidTimestamp(format!("{raw}: {e}")))
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
