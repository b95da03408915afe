use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dora",
    version,
    about = "DORA delivery metrics from pull-request history"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute metrics from a JSON file of pull requests
    Compute(ComputeCommand),
    /// Fetch pull requests from GitHub and compute metrics
    Github(GithubCommand),
}

#[derive(Args)]
pub struct ComputeCommand {
    pub input: PathBuf,
    #[command(flatten)]
    pub metrics: MetricsArgs,
}

#[derive(Args)]
pub struct GithubCommand {
    /// Repository as owner/name; falls back to github.repo in dora.toml
    pub repo: Option<String>,
    /// Environment variable holding the GitHub token
    #[arg(long)]
    pub token_env: Option<String>,
    #[arg(long)]
    pub api_url: Option<String>,
    #[arg(long, value_enum)]
    pub state: Option<PrState>,
    /// Also write the fetched pull requests as JSON
    #[arg(long)]
    pub save_prs: Option<PathBuf>,
    #[command(flatten)]
    pub metrics: MetricsArgs,
}

#[derive(Args)]
pub struct MetricsArgs {
    /// Trailing window for deployment frequency, in days
    #[arg(long)]
    pub days: Option<u32>,
    /// Evaluation time as RFC 3339 (defaults to the current time)
    #[arg(long)]
    pub now: Option<String>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Write the snapshot to an .xlsx spreadsheet
    #[arg(long)]
    pub xlsx: Option<PathBuf>,
    /// Copy the spreadsheet into this directory after writing it
    #[arg(long)]
    pub mirror_dir: Option<PathBuf>,
    /// Directory holding dora.toml and .dora/local.toml; ~/.config/dora/config.toml always applies
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrState {
    Open,
    Closed,
    All,
}

impl PrState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}
