use crate::classify::Classifier;
use crate::models::{LanguageBreakdown, Metric, Project, Repository};
use crate::tags::extract_tags;

const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/800/600";

const DEFAULT_SHORT_DESCRIPTION: &str = "A project from my GitHub portfolio.";

const DEFAULT_FULL_DESCRIPTION: &str =
    "A project from my GitHub portfolio. Check out the repository for more details.";

const FULL_DESCRIPTION_SUFFIX: &str = "This repository contains the source code and documentation \
for this project. Check out the repository for more details, issues, and contributions.";

/// Topics that promote a repository to featured regardless of stars
const FEATURED_TOPICS: &[&str] = &["portfolio", "showcase"];

/// Turns repositories into gallery projects
#[derive(Debug, Clone, Default)]
pub struct ProjectTransformer {
    classifier: Classifier,
}

impl ProjectTransformer {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn transform(&self, repo: &Repository, languages: &LanguageBreakdown) -> Project {
        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.is_empty());

        Project {
            id: format!("github-{}", repo.id),
            slug: slugify(&repo.name),
            title: title_from_name(&repo.name),
            short_description: description
                .unwrap_or(DEFAULT_SHORT_DESCRIPTION)
                .to_string(),
            full_description: match description {
                Some(d) => format!("{}\n\n{}", d, FULL_DESCRIPTION_SUFFIX),
                None => DEFAULT_FULL_DESCRIPTION.to_string(),
            },
            tags: extract_tags(repo, languages),
            category: self
                .classifier
                .classify(repo.language.as_deref(), &repo.topics),
            image_url: placeholder_image_url(&repo.name),
            repo_url: Some(repo.url.clone()),
            demo_url: repo.homepage_url.clone(),
            featured: is_featured(repo),
            metrics: Some(vec![
                Metric::new("Stars", repo.stars.to_string()),
                Metric::new("Forks", repo.forks.to_string()),
            ]),
            used_by: None,
        }
    }
}

/// Transform with the built-in classification rules
pub fn transform(repo: &Repository, languages: &LanguageBreakdown) -> Project {
    ProjectTransformer::default().transform(repo, languages)
}

/// Lower-case, collapse every run of non-alphanumerics into one hyphen, and
/// strip hyphens from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// `"my-cool-app"` → `"My Cool App"`. Letters other than a word's first are
/// left alone. Non-ASCII letters count as word characters, so `"naïve-app"`
/// becomes `"Naïve App"`.
pub fn title_from_name(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word_char = c.is_alphanumeric() || c == '_';

        if is_word_char && at_word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        at_word_start = !is_word_char;
    }

    title
}

/// Decorative image, stable per repository name.
///
/// The seed is the sum of the name's UTF-16 code units.
pub fn placeholder_image_url(name: &str) -> String {
    let seed: u64 = name.encode_utf16().map(u64::from).sum();
    format!("{}?random={}", PLACEHOLDER_IMAGE_BASE, seed)
}

fn is_featured(repo: &Repository) -> bool {
    repo.stars > 0
        || repo
            .topics
            .iter()
            .any(|t| FEATURED_TOPICS.contains(&t.as_str()))
}
