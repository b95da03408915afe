use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoraError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid window: {0}")]
    InvalidWindow(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("github token missing: set {0}")]
    MissingToken(String),

    #[error("invalid repository name (expected owner/name): {0}")]
    InvalidRepo(String),

    #[error("invalid GitHub token")]
    InvalidToken,

    #[error("repository not found: {0}")]
    RepoNotFound(String),

    #[error("github api error: {status} {url}")]
    GitHubStatus { status: u16, url: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, DoraError>;
