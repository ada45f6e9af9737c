use async_trait::async_trait;

use crate::{
    models::{LanguageBreakdown, Repository},
    Result,
};

/// Where repositories come from
///
/// The catalog only talks to this trait, so tests can hand it canned
/// listings and failures without any network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Every repository in the listing, including ones we will filter out
    async fn list_repositories(&self) -> Result<Vec<Repository>>;

    /// Byte counts per language for `owner/name`
    async fn language_breakdown(&self, full_name: &str) -> Result<LanguageBreakdown>;
}
