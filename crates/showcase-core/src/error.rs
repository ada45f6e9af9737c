use thiserror::Error;

/// All the ways things can go wrong in Showcase
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Rate limit exceeded. Try again in {retry_after} seconds")]
    RateLimitExceeded { retry_after: u64 },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<showcase_api::GitHubError> for Error {
    fn from(err: showcase_api::GitHubError) -> Self {
        match err {
            showcase_api::GitHubError::NetworkError(e) => Error::NetworkError(e),
            showcase_api::GitHubError::NotFound(what) => Error::NotFound(what),
            other => Error::ApiError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_api::GitHubError;

    #[test]
    fn test_not_found_keeps_its_kind() {
        let err: Error = GitHubError::NotFound("octo/missing".into()).into();
        assert!(matches!(err, Error::NotFound(ref what) if what == "octo/missing"));
    }

    #[test]
    fn test_other_api_errors_become_api_error() {
        let err: Error = GitHubError::RateLimitExceeded.into();
        assert_eq!(err.to_string(), "API request failed: Rate limit exceeded");

        let err: Error = GitHubError::RequestFailed("Status 500: boom".into()).into();
        assert!(matches!(err, Error::ApiError(ref msg) if msg.contains("Status 500")));
    }

    #[test]
    fn test_parse_error_becomes_api_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = GitHubError::from(json_err).into();
        assert!(matches!(err, Error::ApiError(ref msg) if msg.starts_with("JSON parsing failed")));
    }
}
