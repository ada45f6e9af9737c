use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Repository as we see it after pulling it off the platform API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub is_archived: bool,
    pub is_disabled: bool,
    pub is_private: bool,
    pub url: String,
    pub homepage_url: Option<String>,
}

impl Repository {
    /// Archived, disabled and private repositories never make it to the gallery
    pub fn is_publishable(&self) -> bool {
        !self.is_archived && !self.is_disabled && !self.is_private
    }
}

/// Bytes of code per language for one repository
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LanguageBreakdown(BTreeMap<String, u64>);

impl LanguageBreakdown {
    pub fn new(bytes: BTreeMap<String, u64>) -> Self {
        Self(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Language names, most bytes first. Ties keep alphabetical order.
    pub fn ranked(&self) -> Vec<&str> {
        let mut entries: Vec<(&String, &u64)> = self.0.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries.into_iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The four buckets the gallery is split into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Frontend,
    Backend,
    DevOps,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl Category {
    pub fn all() -> [Category; 4] {
        [
            Category::Frontend,
            Category::Backend,
            Category::DevOps,
            Category::FullStack,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::DevOps => "DevOps",
            Category::FullStack => "Full Stack",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            "devops" => Ok(Category::DevOps),
            "full stack" | "full-stack" | "fullstack" => Ok(Category::FullStack),
            other => Err(crate::Error::Validation(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

/// A labelled figure shown on a project page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// What the gallery renders. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_languages_by_bytes() {
        let breakdown: LanguageBreakdown =
            [("CSS", 200), ("TypeScript", 8000), ("HTML", 950)].into_iter().collect();
        assert_eq!(breakdown.ranked(), vec!["TypeScript", "HTML", "CSS"]);
    }

    #[test]
    fn test_ranked_ties_are_alphabetical() {
        let breakdown: LanguageBreakdown =
            [("Shell", 10), ("Dockerfile", 10), ("Go", 500)].into_iter().collect();
        assert_eq!(breakdown.ranked(), vec!["Go", "Dockerfile", "Shell"]);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::FullStack).unwrap();
        assert_eq!(json, "\"Full Stack\"");
        let back: Category = serde_json::from_str("\"DevOps\"").unwrap();
        assert_eq!(back, Category::DevOps);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("frontend".parse::<Category>().unwrap(), Category::Frontend);
        assert_eq!(
            "Full Stack".parse::<Category>().unwrap(),
            Category::FullStack
        );
        assert_eq!(
            "full-stack".parse::<Category>().unwrap(),
            Category::FullStack
        );
        assert!("mobile".parse::<Category>().is_err());
    }

    #[test]
    fn test_project_json_uses_camel_case() {
        let project = Project {
            id: "github-1".into(),
            slug: "demo".into(),
            title: "Demo".into(),
            short_description: "short".into(),
            full_description: "full".into(),
            tags: vec!["Rust".into()],
            category: Category::Backend,
            image_url: "https://picsum.photos/800/600?random=1".into(),
            repo_url: None,
            demo_url: None,
            featured: false,
            metrics: None,
            used_by: None,
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["shortDescription"], "short");
        assert_eq!(json["imageUrl"], "https://picsum.photos/800/600?random=1");
        assert!(json.get("repoUrl").is_none());
        assert!(json.get("usedBy").is_none());
    }

    #[test]
    fn test_publishable_flags() {
        let mut repo = Repository {
            id: 1,
            name: "x".into(),
            full_name: "o/x".into(),
            description: None,
            topics: vec![],
            language: None,
            stars: 0,
            forks: 0,
            is_archived: false,
            is_disabled: false,
            is_private: false,
            url: "https://github.com/o/x".into(),
            homepage_url: None,
        };
        assert!(repo.is_publishable());

        repo.is_disabled = true;
        assert!(!repo.is_publishable());
    }
}
