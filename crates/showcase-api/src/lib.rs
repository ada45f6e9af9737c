// API client for the source-hosting platform
pub mod github;

pub use github::{GitHubClient, GitHubError, GitHubRepo};
