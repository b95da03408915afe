use crate::error::DoraError;
use crate::metrics::frequency::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_STATE: &str = "closed";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoraConfig {
    pub window: Option<WindowConfig>,
    pub github: Option<GitHubConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    pub repo: Option<String>,
    pub api_url: Option<String>,
    pub token_env: Option<String>,
    pub per_page: Option<u32>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub xlsx: Option<String>,
    pub mirror_dir: Option<String>,
}

impl DoraConfig {
    pub fn window_days(&self) -> u32 {
        self.window
            .as_ref()
            .map(|window| window.days)
            .unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    pub fn repo(&self) -> Option<&str> {
        self.github.as_ref().and_then(|github| github.repo.as_deref())
    }

    pub fn api_url(&self) -> &str {
        self.github
            .as_ref()
            .and_then(|github| github.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
    }

    pub fn token_env(&self) -> &str {
        self.github
            .as_ref()
            .and_then(|github| github.token_env.as_deref())
            .unwrap_or(DEFAULT_TOKEN_ENV)
    }

    pub fn per_page(&self) -> u32 {
        self.github
            .as_ref()
            .and_then(|github| github.per_page)
            .unwrap_or(DEFAULT_PER_PAGE)
    }

    pub fn state(&self) -> &str {
        self.github
            .as_ref()
            .and_then(|github| github.state.as_deref())
            .unwrap_or(DEFAULT_STATE)
    }

    pub fn xlsx_path(&self) -> Option<&str> {
        self.export.as_ref().and_then(|export| export.xlsx.as_deref())
    }

    pub fn mirror_dir(&self) -> Option<&str> {
        self.export
            .as_ref()
            .and_then(|export| export.mirror_dir.as_deref())
    }

    pub fn validate(&self) -> Result<(), DoraError> {
        let days = self.window_days();
        if days == 0 || days > MAX_WINDOW_DAYS {
            return Err(DoraError::ConfigParse(format!(
                "window.days must be between 1 and {MAX_WINDOW_DAYS} (found {days})"
            )));
        }

        let per_page = self.per_page();
        if !(1..=100).contains(&per_page) {
            return Err(DoraError::ConfigParse(format!(
                "github.per_page must be between 1 and 100 (found {per_page})"
            )));
        }

        validate_state(self.state())?;

        if let Some(repo) = self.repo() {
            validate_repo(repo)
                .map_err(|_| DoraError::ConfigParse(format!("github.repo must be owner/name: {repo}")))?;
        }

        if self.xlsx_path().is_none() && self.mirror_dir().is_some() {
            return Err(DoraError::ConfigParse(
                "export.mirror_dir requires export.xlsx".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn validate_state(state: &str) -> Result<(), DoraError> {
    if matches!(state, "open" | "closed" | "all") {
        Ok(())
    } else {
        Err(DoraError::ConfigParse(format!(
            "unsupported pull request state: {state}"
        )))
    }
}

pub fn validate_repo(repo: &str) -> Result<(), DoraError> {
    let mut parts = repo.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.trim().is_empty() && !name.trim().is_empty() => {
            Ok(())
        }
        _ => Err(DoraError::InvalidRepo(repo.to_string())),
    }
}
