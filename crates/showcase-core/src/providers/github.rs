// GitHub provider - bridges the API client with the RepoSource trait
use async_trait::async_trait;
use showcase_api::{GitHubClient, GitHubRepo};

use crate::{
    config::GitHubConfig,
    models::{LanguageBreakdown, Repository},
    source::RepoSource,
    Result,
};

/// Lists one account's repositories through the GitHub REST API
pub struct GitHubSource {
    client: GitHubClient,
    username: String,
    per_page: u32,
}

impl GitHubSource {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        Ok(Self {
            client: GitHubClient::with_base_url(config.api_url.clone())?,
            username: config.username.clone(),
            per_page: config.per_page,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl RepoSource for GitHubSource {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let repos = self
            .client
            .list_user_repos(&self.username, self.per_page)
            .await?;

        Ok(repos.into_iter().map(github_to_repo).collect())
    }

    async fn language_breakdown(&self, full_name: &str) -> Result<LanguageBreakdown> {
        let languages = self.client.get_repo_languages(full_name).await?;
        Ok(LanguageBreakdown::new(languages))
    }
}

/// Convert GitHub API repo to our internal Repository model
fn github_to_repo(gh: GitHubRepo) -> Repository {
    Repository {
        id: gh.id,
        name: gh.name,
        full_name: gh.full_name,
        description: gh.description,
        topics: gh.topics,
        language: gh.language,
        stars: gh.stargazers_count,
        forks: gh.forks_count,
        is_archived: gh.archived,
        is_disabled: gh.disabled,
        is_private: gh.private,
        url: gh.html_url,
        // GitHub sends "" for a cleared homepage
        homepage_url: gh.homepage.filter(|h| !h.trim().is_empty()),
    }
}
