// Project catalog: listing fetch, fan-out, and snapshot caching
use crate::{
    config::Config,
    models::{LanguageBreakdown, Project, Repository},
    source::RepoSource,
    transform::ProjectTransformer,
    Result,
};
use chrono::Duration;
use futures::stream::{self, StreamExt};
use showcase_cache::{Clock, SnapshotCache};
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Serves the gallery's project list, refetching once the snapshot is stale
pub struct ProjectCatalog {
    source: Arc<dyn RepoSource>,
    transformer: ProjectTransformer,
    cache: SnapshotCache<Project>,
    max_concurrent: usize,
    curated: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(source: Arc<dyn RepoSource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            transformer: ProjectTransformer::default(),
            cache: SnapshotCache::new(ttl, clock),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            curated: Vec::new(),
        }
    }

    pub fn from_config(
        source: Arc<dyn RepoSource>,
        clock: Arc<dyn Clock>,
        config: &Config,
    ) -> Result<Self> {
        let catalog = Self::new(source, clock, config.cache.ttl()?)
            .with_max_concurrent(config.fetch.max_concurrent)
            .with_curated(config.projects.clone());
        Ok(catalog)
    }

    pub fn with_transformer(mut self, transformer: ProjectTransformer) -> Self {
        self.transformer = transformer;
        self
    }

    /// Hand-written projects, listed ahead of generated ones. A generated
    /// project whose slug is already taken here is dropped.
    pub fn with_curated(mut self, projects: Vec<Project>) -> Self {
        self.curated = projects.into_iter().map(blank_urls_to_none).collect();
        self
    }

    /// Cap on language lookups in flight. Zero is treated as one.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Every publishable project, featured ones first.
    ///
    /// Never fails: if the listing can't be fetched this logs and returns
    /// only the curated projects (usually none), and nothing is cached so the
    /// next call tries again. Use [`ProjectCatalog::refresh`] to see the error.
    pub async fn all_projects(&self) -> Vec<Project> {
        if let Some(projects) = self.cache.get().await {
            debug!("Serving {} projects from cache", projects.len());
            return projects;
        }

        match self.refresh().await {
            Ok(projects) => projects,
            Err(e) => {
                warn!("Failed to fetch repository listing: {}", e);
                self.merge(Vec::new())
            }
        }
    }

    /// Fetch and transform everything now, ignoring the cache, and replace
    /// the snapshot on success
    pub async fn refresh(&self) -> Result<Vec<Project>> {
        info!("Fetching repository listing");
        let repos = self.source.list_repositories().await?;

        let total = repos.len();
        let publishable: Vec<Repository> = repos
            .into_iter()
            .filter(Repository::is_publishable)
            .collect();
        debug!(
            "{} of {} repositories are publishable",
            publishable.len(),
            total
        );

        let source = &self.source;
        let transformer = &self.transformer;

        // buffered() yields in input order, whatever order the lookups finish in
        let generated: Vec<Project> = stream::iter(publishable)
            .map(|repo| async move {
                let languages = match source.language_breakdown(&repo.full_name).await {
                    Ok(languages) => languages,
                    Err(e) => {
                        warn!("Failed to fetch languages for {}: {}", repo.full_name, e);
                        LanguageBreakdown::default()
                    }
                };
                transformer.transform(&repo, &languages)
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let projects = self.merge(generated);
        self.cache.store(projects.clone()).await;
        info!("Cached {} projects", projects.len());

        Ok(projects)
    }

    /// Curated projects first, then generated ones with a free slug, featured
    /// first overall
    fn merge(&self, generated: Vec<Project>) -> Vec<Project> {
        let mut projects = self.curated.clone();
        for project in generated {
            if self.curated.iter().any(|p| p.slug == project.slug) {
                debug!("Curated project shadows generated {}", project.slug);
                continue;
            }
            projects.push(project);
        }

        // Stable, so listing order survives inside each group
        projects.sort_by_key(|p| !p.featured);
        projects
    }

    /// Look a project up by slug in the (possibly cached) full list
    pub async fn project_by_slug(&self, slug: &str) -> Option<Project> {
        self.all_projects()
            .await
            .into_iter()
            .find(|p| p.slug == slug)
    }

    /// Drop the snapshot so the next read refetches
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}

fn blank_urls_to_none(mut project: Project) -> Project {
    project.repo_url = project.repo_url.filter(|u| !u.trim().is_empty());
    project.demo_url = project.demo_url.filter(|u| !u.trim().is_empty());
    project
}
