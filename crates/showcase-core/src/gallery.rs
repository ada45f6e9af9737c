// Gallery selection over an already-fetched project list
use crate::models::{Category, Project};
use std::collections::HashMap;

pub fn featured(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

pub fn by_category(projects: &[Project], category: Category) -> Vec<&Project> {
    projects.iter().filter(|p| p.category == category).collect()
}

/// Projects carrying `tag`, compared case-insensitively
pub fn by_tag<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    let tag = tag.to_lowercase();
    projects
        .iter()
        .filter(|p| p.tags.iter().any(|t| t.to_lowercase() == tag))
        .collect()
}

/// Number of projects in `category`, or all of them for `None`
pub fn category_count(projects: &[Project], category: Option<Category>) -> usize {
    match category {
        Some(category) => projects.iter().filter(|p| p.category == category).count(),
        None => projects.len(),
    }
}

/// How often each tag appears, most common first, ties by name
pub fn tag_counts(projects: &[Project]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, n)| (tag.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Everything the gallery lets a visitor narrow by. All set criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub category: Option<Category>,
    pub featured_only: bool,
    /// Exact tag label
    pub tag: Option<String>,
    /// Case-insensitive substring of the title or any tag
    pub search: Option<String>,
}

impl GalleryFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = self.category {
            if project.category != category {
                return false;
            }
        }

        if self.featured_only && !project.featured {
            return false;
        }

        if let Some(tag) = &self.tag {
            if !project.tags.contains(tag) {
                return false;
            }
        }

        if let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let term = term.to_lowercase();
            let in_title = project.title.to_lowercase().contains(&term);
            let in_tags = project.tags.iter().any(|t| t.to_lowercase().contains(&term));
            if !in_title && !in_tags {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str, category: Category, tags: &[&str], featured: bool) -> Project {
        Project {
            id: format!("github-{}", slug),
            slug: slug.into(),
            title: slug.replace('-', " "),
            short_description: String::new(),
            full_description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category,
            image_url: String::new(),
            repo_url: None,
            demo_url: None,
            featured,
            metrics: None,
            used_by: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(
                "edge-dashboard",
                Category::Frontend,
                &["React", "TypeScript", "Vite"],
                true,
            ),
            project("auth-service", Category::Backend, &["Bun", "Redis"], true),
            project(
                "gitops-pipeline",
                Category::DevOps,
                &["Docker", "Terraform"],
                false,
            ),
            project(
                "shop-platform",
                Category::FullStack,
                &["React", "Docker", "Bun"],
                false,
            ),
        ]
    }

    fn slugs(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_simple_selections() {
        let projects = sample();
        assert_eq!(
            slugs(featured(&projects)),
            vec!["edge-dashboard", "auth-service"]
        );
        assert_eq!(
            slugs(by_category(&projects, Category::DevOps)),
            vec!["gitops-pipeline"]
        );
        assert_eq!(
            slugs(by_tag(&projects, "docker")),
            vec!["gitops-pipeline", "shop-platform"]
        );
    }

    #[test]
    fn test_counts() {
        let projects = sample();
        assert_eq!(category_count(&projects, None), 4);
        assert_eq!(category_count(&projects, Some(Category::Frontend)), 1);

        let counts = tag_counts(&projects);
        assert_eq!(
            &counts[..3],
            &[
                ("Bun".to_string(), 2),
                ("Docker".to_string(), 2),
                ("React".to_string(), 2),
            ]
        );
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[3], ("Redis".to_string(), 1));
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let projects = sample();
        assert_eq!(GalleryFilter::default().apply(&projects).len(), 4);
    }

    #[test]
    fn test_combined_filter() {
        let projects = sample();
        let filter = GalleryFilter {
            tag: Some("React".into()),
            featured_only: true,
            ..Default::default()
        };
        assert_eq!(slugs(filter.apply(&projects)), vec!["edge-dashboard"]);

        let filter = GalleryFilter {
            category: Some(Category::FullStack),
            tag: Some("React".into()),
            ..Default::default()
        };
        assert_eq!(slugs(filter.apply(&projects)), vec!["shop-platform"]);
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let projects = sample();
        let filter = GalleryFilter {
            tag: Some("react".into()),
            ..Default::default()
        };
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn test_search_title_or_tag() {
        let projects = sample();

        let by_title = GalleryFilter {
            search: Some("PIPELINE".into()),
            ..Default::default()
        };
        assert_eq!(slugs(by_title.apply(&projects)), vec!["gitops-pipeline"]);

        let by_tag = GalleryFilter {
            search: Some("redi".into()),
            ..Default::default()
        };
        assert_eq!(slugs(by_tag.apply(&projects)), vec!["auth-service"]);

        let blank = GalleryFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(blank.apply(&projects).len(), 4);
    }
}
