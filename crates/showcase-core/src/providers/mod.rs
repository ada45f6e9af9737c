// Provider implementations for source-hosting platforms
pub mod github;

pub use github::GitHubSource;
