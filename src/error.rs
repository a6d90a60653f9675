use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FinderError {
    /// Network failures get their own banner text; everything else is a provider problem.
    pub fn is_network(&self) -> bool {
        matches!(self, FinderError::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
