use crate::models::{LanguageBreakdown, Repository};
use crate::normalize::normalize;
use std::collections::HashSet;

pub const MAX_TAGS: usize = 10;

/// Below this many tags we go digging in the description
const DESCRIPTION_SCAN_THRESHOLD: usize = 5;

/// Topics that say nothing about the technology
const STOP_TOPICS: &[&str] = &[
    "portfolio",
    "website",
    "web",
    "project",
    "demo",
    "example",
    "tutorial",
    "learning",
    "practice",
];

/// Vocabulary searched for in free-text descriptions, in match order
const DESCRIPTION_KEYWORDS: &[&str] = &[
    "react",
    "vue",
    "angular",
    "svelte",
    "typescript",
    "javascript",
    "node",
    "python",
    "java",
    "go",
    "rust",
    "php",
    "ruby",
    "docker",
    "kubernetes",
    "terraform",
    "aws",
    "azure",
    "gcp",
    "tailwind",
    "vite",
    "nextjs",
    "express",
    "mongodb",
    "postgresql",
    "redis",
    "graphql",
    "prisma",
    "elysia",
    "bun",
    "fastify",
    "jest",
    "cypress",
    "playwright",
    "webpack",
    "rollup",
];

/// Insertion-ordered set of display tags
#[derive(Debug, Default)]
struct TagSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    fn insert(&mut self, tag: String) {
        if self.seen.insert(tag.clone()) {
            self.order.push(tag);
        }
    }

    fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Build the display tags for a repository.
///
/// Priority, highest first: owner topics (minus generic ones), languages by
/// bytes, the primary language, then keywords spotted in the description. The
/// description is only consulted when the other sources gave fewer than five
/// tags. At most `MAX_TAGS` are returned.
pub fn extract_tags(repo: &Repository, languages: &LanguageBreakdown) -> Vec<String> {
    let mut tags = TagSet::default();

    for topic in &repo.topics {
        let lower = topic.trim().to_lowercase();
        if lower.is_empty() || STOP_TOPICS.contains(&lower.as_str()) {
            continue;
        }
        tags.insert(normalize(topic));
    }

    for language in languages.ranked() {
        tags.insert(normalize(language));
    }

    if let Some(language) = repo.language.as_deref().filter(|l| !l.trim().is_empty()) {
        let label = normalize(language);
        if !tags.contains(&label) {
            tags.insert(label);
        }
    }

    if tags.len() < DESCRIPTION_SCAN_THRESHOLD {
        if let Some(description) = &repo.description {
            let description = description.to_lowercase();
            for keyword in DESCRIPTION_KEYWORDS {
                if tags.len() >= MAX_TAGS {
                    break;
                }
                if description.contains(keyword) {
                    tags.insert(normalize(keyword));
                }
            }
        }
    }

    let mut tags = tags.into_vec();
    tags.truncate(MAX_TAGS);
    tags
}
