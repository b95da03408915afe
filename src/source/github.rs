use crate::error::{DoraError, Result};
use crate::types::config::validate_repo;
use crate::types::pull_request::PullRequestRecord;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;

/// Blocking client for the GitHub pull-request endpoints.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    repo: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, repo: &str, token: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(DoraError::MissingToken("a GitHub token".to_string()));
        }
        validate_repo(repo)?;

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| DoraError::InvalidToken)?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("dora/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn repo_url(&self) -> String {
        format!("{}/repos/{}", self.api_url, self.repo)
    }

    pub fn pulls_url(&self) -> String {
        format!("{}/pulls", self.repo_url())
    }

    /// Confirms the token can see the repository.
    pub fn validate_credentials(&self) -> Result<()> {
        let url = self.repo_url();
        let response = self.client.get(&url).send()?;
        check_status(response, &self.repo, &url)?;
        tracing::info!(repo = %self.repo, "validated GitHub credentials");
        Ok(())
    }

    /// Fetches every page of pull requests in `state`.
    pub fn fetch_pull_requests(&self, state: &str, per_page: u32) -> Result<Vec<PullRequestRecord>> {
        let url = self.pulls_url();
        let per_page = per_page.clamp(1, 100);
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("state", state.to_string()),
                    ("per_page", per_page.to_string()),
                    ("page", page.to_string()),
                ])
                .send()?;
            let pulls: Vec<PullRequestRecord> = check_status(response, &self.repo, &url)?.json()?;
            tracing::info!(page, count = pulls.len(), "fetched pull requests");

            let fetched = pulls.len();
            all.extend(pulls);
            if is_last_page(fetched, per_page) {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}

fn is_last_page(fetched: usize, per_page: u32) -> bool {
    fetched < per_page as usize
}

fn check_status(response: Response, repo: &str, url: &str) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        status => Err(status_error(status, repo, url)),
    }
}

fn status_error(status: StatusCode, repo: &str, url: &str) -> DoraError {
    match status {
        StatusCode::UNAUTHORIZED => DoraError::InvalidToken,
        StatusCode::NOT_FOUND => DoraError::RepoNotFound(repo.to_string()),
        other => DoraError::GitHubStatus {
            status: other.as_u16(),
            url: url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const TOKEN: &str = "t0ken";

    fn page_body(count: usize) -> String {
        let pulls: Vec<_> = (0..count)
            .map(|number| {
                json!({
                    "number": number,
                    "title": format!("Change {number}"),
                    "body": null,
                    "created_at": "2024-06-01T08:00:00Z",
                    "merged_at": "2024-06-01T10:00:00Z",
                })
            })
            .collect();
        serde_json::Value::Array(pulls).to_string()
    }

    fn page_query(state: &str, per_page: &str, page: &str) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), state.into()),
            Matcher::UrlEncoded("per_page".into(), per_page.into()),
            Matcher::UrlEncoded("page".into(), page.into()),
        ])
    }

    #[test]
    fn fetch_follows_pages_until_a_short_page() {
        let mut server = Server::new();
        let first = server
            .mock("GET", "/repos/acme/widgets/pulls")
            .match_query(page_query("closed", "100", "1"))
            .match_header("authorization", "Bearer t0ken")
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(100))
            .expect(1)
            .create();
        let second = server
            .mock("GET", "/repos/acme/widgets/pulls")
            .match_query(page_query("closed", "100", "2"))
            .match_header("authorization", "Bearer t0ken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(3))
            .expect(1)
            .create();
        let third = server
            .mock("GET", "/repos/acme/widgets/pulls")
            .match_query(page_query("closed", "100", "3"))
            .with_status(200)
            .with_body("[]")
            .expect(0)
            .create();

        let client = GitHubClient::new(&server.url(), "acme/widgets", TOKEN)
            .expect("client should build");
        let prs = client
            .fetch_pull_requests("closed", 100)
            .expect("fetch should succeed");

        assert_eq!(prs.len(), 103);
        assert_eq!(prs[0].title, "Change 0");
        assert_eq!(prs[0].hours_to_merge(), Some(2.0));
        first.assert();
        second.assert();
        third.assert();
    }

    #[test]
    fn fetch_sends_requested_state_and_page_size() {
        let mut server = Server::new();
        let only = server
            .mock("GET", "/repos/acme/widgets/pulls")
            .match_query(page_query("all", "25", "1"))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(0))
            .expect(1)
            .create();

        let client = GitHubClient::new(&server.url(), "acme/widgets", TOKEN)
            .expect("client should build");
        let prs = client.fetch_pull_requests("all", 25).expect("fetch should succeed");

        assert!(prs.is_empty());
        only.assert();
    }

    #[test]
    fn fetch_maps_server_errors_to_status() {
        let mut server = Server::new();
        let _failing = server
            .mock("GET", "/repos/acme/widgets/pulls")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let client = GitHubClient::new(&server.url(), "acme/widgets", TOKEN)
            .expect("client should build");
        assert!(matches!(
            client.fetch_pull_requests("closed", 100),
            Err(DoraError::GitHubStatus { status: 500, .. })
        ));
    }

    #[test]
    fn validate_credentials_maps_unauthorized_and_missing_repo() {
        let mut server = Server::new();
        let unauthorized = server
            .mock("GET", "/repos/acme/widgets")
            .match_header("authorization", "Bearer t0ken")
            .with_status(401)
            .expect(1)
            .create();
        let missing = server
            .mock("GET", "/repos/acme/gone")
            .with_status(404)
            .expect(1)
            .create();

        let client = GitHubClient::new(&server.url(), "acme/widgets", TOKEN)
            .expect("client should build");
        assert!(matches!(
            client.validate_credentials(),
            Err(DoraError::InvalidToken)
        ));

        let client = GitHubClient::new(&server.url(), "acme/gone", TOKEN)
            .expect("client should build");
        assert!(matches!(
            client.validate_credentials(),
            Err(DoraError::RepoNotFound(repo)) if repo == "acme/gone"
        ));

        unauthorized.assert();
        missing.assert();
    }

    #[test]
    fn validate_credentials_accepts_visible_repo() {
        let mut server = Server::new();
        let repo = server
            .mock("GET", "/repos/acme/widgets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "full_name": "acme/widgets" }"#)
            .create();

        let client = GitHubClient::new(&server.url(), "acme/widgets", TOKEN)
            .expect("client should build");
        client.validate_credentials().expect("credentials should validate");
        repo.assert();
    }

    #[test]
    fn new_requires_token_and_owner_name_repo() {
        assert!(matches!(
            GitHubClient::new("https://api.github.com", "acme/widgets", "  "),
            Err(DoraError::MissingToken(_))
        ));
        assert!(matches!(
            GitHubClient::new("https://api.github.com", "widgets", "t0ken"),
            Err(DoraError::InvalidRepo(_))
        ));
    }

    #[test]
    fn urls_are_built_from_api_root() {
        let client = GitHubClient::new("https://github.example.com/api/v3/", "acme/widgets", "t0ken")
            .expect("client should build");
        assert_eq!(
            client.repo_url(),
            "https://github.example.com/api/v3/repos/acme/widgets"
        );
        assert_eq!(
            client.pulls_url(),
            "https://github.example.com/api/v3/repos/acme/widgets/pulls"
        );
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "acme/widgets", "u"),
            DoraError::InvalidToken
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "acme/widgets", "u"),
            DoraError::RepoNotFound(repo) if repo == "acme/widgets"
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "acme/widgets", "u"),
            DoraError::GitHubStatus { status: 403, .. }
        ));
    }

    #[test]
    fn short_page_ends_pagination() {
        assert!(is_last_page(0, 100));
        assert!(is_last_page(42, 100));
        assert!(!is_last_page(100, 100));
    }
}
