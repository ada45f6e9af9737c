use crate::models::Project;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Loaded from `<config dir>/showcase/config.toml`; anything missing falls
/// back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    /// Hand-written entries shown alongside the generated ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
}

impl Config {
    /// Load config from the default location, or defaults if there is none
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but can't be used
    pub fn validate(&self) -> crate::Result<()> {
        self.cache.ttl()?;
        self.contact.cooldown()?;
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("showcase");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubConfig {
    /// Account whose public repositories make up the gallery
    #[serde(default = "default_username")]
    pub username: String,

    /// API URL (for GitHub Enterprise)
    #[serde(default = "default_github_url")]
    pub api_url: String,

    /// Size of the single listing page we request
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_username() -> String {
    "aminlahbib".to_string()
}

fn default_github_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100 // GitHub's maximum
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_url: default_github_url(),
            per_page: default_per_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// How long a fetched project list is served before refetching
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

fn default_cache_ttl() -> u64 {
    300
}

impl CacheConfig {
    pub fn ttl(&self) -> crate::Result<Duration> {
        seconds_to_duration("cache.ttl_seconds", self.ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchConfig {
    /// Language lookups allowed in flight at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_max_concurrent() -> usize {
    8
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Minimum gap between two accepted contact submissions
    #[serde(default = "default_cooldown")]
    pub cooldown_seconds: u64,
}

fn default_cooldown() -> u64 {
    60
}

impl ContactConfig {
    pub fn cooldown(&self) -> crate::Result<Duration> {
        seconds_to_duration("contact.cooldown_seconds", self.cooldown_seconds)
    }
}

/// chrono tops out around 2^63 milliseconds, well below `u64::MAX` seconds
fn seconds_to_duration(field: &str, seconds: u64) -> crate::Result<Duration> {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| {
            crate::Error::ConfigError(format!("{} is out of range: {}", field, seconds))
        })
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: default_cooldown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.fetch.max_concurrent, 8);
        assert_eq!(config.contact.cooldown_seconds, 60);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [github]
            username = "octocat"

            [cache]
            ttl_seconds = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.cache.ttl_seconds, 30);
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("ttl_seconds"));
        assert!(toml.contains("username"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.github.username = "someone".into();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_curated_projects_section() {
        let config: Config = toml::from_str(
            r#"
            [[projects]]
            id = "1"
            slug = "cloud-secrets-manager"
            title = "Cloud Secrets Manager"
            shortDescription = "Secrets management platform"
            fullDescription = "Microservices, observability and IaC."
            tags = ["Java 21", "Spring Boot", "Kubernetes"]
            category = "Full Stack"
            imageUrl = "https://images.example.com/secrets.jpg"
            repoUrl = "https://github.com/aminlahbib/Cloud-Secrets-Manager"
            featured = true
            usedBy = ["Production-ready Kubernetes deployment"]

            [[projects.metrics]]
            label = "Test Coverage"
            value = "80%+"

            [[projects.metrics]]
            label = "Microservices"
            value = "3"
            "#,
        )
        .unwrap();

        assert_eq!(config.cache, CacheConfig::default());
        assert_eq!(config.projects.len(), 1);

        let project = &config.projects[0];
        assert_eq!(project.category, crate::models::Category::FullStack);
        assert_eq!(project.demo_url, None);
        assert_eq!(project.metrics.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            project.used_by,
            Some(vec!["Production-ready Kubernetes deployment".to_string()])
        );
    }

    #[test]
    fn test_curated_projects_survive_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.projects.push(Project {
            id: "1".into(),
            slug: "tts".into(),
            title: "TTS".into(),
            short_description: "Speech".into(),
            full_description: "Speech, fast".into(),
            tags: vec!["Rust".into()],
            category: crate::models::Category::Backend,
            image_url: "https://images.example.com/tts.jpg".into(),
            repo_url: None,
            demo_url: Some("https://tts.example.dev".into()),
            featured: true,
            metrics: Some(vec![crate::models::Metric::new("Latency", "<1ms")]),
            used_by: None,
        });
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.cache.ttl().unwrap(), Duration::minutes(5));
        assert_eq!(config.contact.cooldown().unwrap(), Duration::seconds(60));
    }

    #[test]
    fn test_huge_ttl_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cache]\nttl_seconds = 100000000000000000\n").unwrap();

        match Config::load_from(&path) {
            Err(crate::Error::ConfigError(msg)) => assert!(msg.contains("cache.ttl_seconds")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_durations_out_of_range() {
        let mut config = Config::default();
        config.cache.ttl_seconds = u64::MAX;
        config.contact.cooldown_seconds = i64::MAX as u64;

        assert!(matches!(
            config.cache.ttl(),
            Err(crate::Error::ConfigError(_))
        ));
        assert!(matches!(
            config.contact.cooldown(),
            Err(crate::Error::ConfigError(_))
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "cache = [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(crate::Error::ConfigError(_))
        ));
    }
}
