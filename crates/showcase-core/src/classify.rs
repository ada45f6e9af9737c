use crate::models::Category;
use std::collections::HashSet;

/// Maps a set of keywords to a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches_any(&self, signals: &HashSet<String>) -> bool {
        self.keywords.iter().any(|k| signals.contains(k))
    }
}

const FULL_STACK_KEYWORDS: &[&str] = &["fullstack", "full-stack", "mern", "mean", "stack"];

const FRONTEND_KEYWORDS: &[&str] = &[
    "react", "vue", "angular", "svelte", "frontend", "ui", "ux", "css", "html", "tailwind",
    "nextjs", "vite",
];

const BACKEND_KEYWORDS: &[&str] = &[
    "backend", "api", "server", "express", "fastify", "elysia", "bun", "node", "python", "go",
    "rust", "java", "spring",
];

const DEVOPS_KEYWORDS: &[&str] = &[
    "devops",
    "docker",
    "kubernetes",
    "ci/cd",
    "terraform",
    "aws",
    "azure",
    "gcp",
    "github-actions",
    "gitlab",
    "jenkins",
];

const FRONTEND_LANGUAGES: &[&str] = &["javascript", "typescript", "html", "css", "scss", "sass"];

const BACKEND_LANGUAGES: &[&str] = &[
    "python", "java", "go", "rust", "php", "ruby", "c#", "c++", "c",
];

/// Decides which category a repository belongs to.
///
/// Keyword rules are checked in order, first against the topics and then
/// against the primary language; the first rule with a hit wins. A `docker`
/// topic on a Go repository therefore reads as DevOps. If nothing hits, the
/// primary language picks a family default, and failing that we go with
/// `fallback`.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<KeywordRule>,
    language_defaults: Vec<KeywordRule>,
    fallback: Category,
}

impl Classifier {
    pub fn new(
        rules: Vec<KeywordRule>,
        language_defaults: Vec<KeywordRule>,
        fallback: Category,
    ) -> Self {
        Self {
            rules,
            language_defaults,
            fallback,
        }
    }

    /// Append a keyword rule. It is checked after the existing ones.
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn classify(&self, language: Option<&str>, topics: &[String]) -> Category {
        let topic_signals = signal_set(topics.iter().map(String::as_str));
        let language_signals = signal_set(language);

        for signals in [&topic_signals, &language_signals] {
            if let Some(rule) = self.rules.iter().find(|r| r.matches_any(signals)) {
                return rule.category;
            }
        }

        if let Some(lang) = language.map(|l| l.trim().to_lowercase()) {
            let hit = self
                .language_defaults
                .iter()
                .find(|r| r.keywords.iter().any(|k| *k == lang));
            if let Some(rule) = hit {
                return rule.category;
            }
        }

        self.fallback
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            vec![
                KeywordRule::new(Category::FullStack, FULL_STACK_KEYWORDS),
                KeywordRule::new(Category::Frontend, FRONTEND_KEYWORDS),
                KeywordRule::new(Category::Backend, BACKEND_KEYWORDS),
                KeywordRule::new(Category::DevOps, DEVOPS_KEYWORDS),
            ],
            vec![
                KeywordRule::new(Category::Frontend, FRONTEND_LANGUAGES),
                KeywordRule::new(Category::Backend, BACKEND_LANGUAGES),
            ],
            Category::FullStack,
        )
    }
}

fn signal_set<'a>(raw: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    raw.into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Classify with the built-in rule table
pub fn classify(language: Option<&str>, topics: &[String]) -> Category {
    Classifier::default().classify(language, topics)
}
