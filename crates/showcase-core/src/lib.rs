// Core logic: repositories in, gallery projects out
pub mod catalog;
pub mod classify;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod source;
pub mod tags;
pub mod transform;

pub use catalog::ProjectCatalog;
pub use classify::{classify, Classifier, KeywordRule};
pub use config::Config;
pub use contact::{ContactForm, ContactGate};
pub use error::Error;
pub use gallery::GalleryFilter;
pub use models::{Category, LanguageBreakdown, Metric, Project, Repository};
pub use normalize::normalize;
pub use providers::GitHubSource;
pub use source::RepoSource;
pub use tags::extract_tags;
pub use transform::{transform, ProjectTransformer};

pub type Result<T> = std::result::Result<T, Error>;
