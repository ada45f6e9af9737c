use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Read-only client for the two GitHub endpoints we need.
///
/// Requests are anonymous, so whatever the unauthenticated rate limit allows
/// is what we get.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise or a local test server
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("Showcase/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List a user's repositories, most recently updated first.
    ///
    /// Only one page is requested.
    pub async fn list_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<GitHubRepo>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        debug!("Fetching repository listing from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("per_page", per_page.to_string().as_str()),
                ("sort", "updated"),
                ("direction", "desc"),
            ])
            .send()
            .await?;

        let response = check_status(response, username).await?;
        let body = response.text().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;
        Ok(repos)
    }

    /// Bytes of code per language for one repository (`owner/name`)
    pub async fn get_repo_languages(&self, full_name: &str) -> Result<BTreeMap<String, u64>> {
        let url = format!("{}/repos/{}/languages", self.base_url, full_name);
        debug!("Fetching languages from {}", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, full_name).await?;
        let body = response.text().await?;
        let languages: BTreeMap<String, u64> = serde_json::from_str(&body)?;
        Ok(languages)
    }
}

async fn check_status(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(GitHubError::NotFound(what.to_string()));
    }

    // GitHub signals an exhausted anonymous quota with 403 + remaining=0
    let quota_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "0")
        .unwrap_or(false);

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS
        || (status == reqwest::StatusCode::FORBIDDEN && quota_exhausted)
    {
        return Err(GitHubError::RateLimitExceeded);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::RequestFailed(format!("Status {}: {}", status, body)))
}

/// Repository as returned by `GET /users/{user}/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub private: bool,
    pub default_branch: Option<String>,
    pub updated_at: Option<String>,
}
