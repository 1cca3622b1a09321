use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkstashError {
    #[error("element '{0}' not found in page")]
    ElementNotFound(String),

    #[error("element '{0}' is missing required attribute '{1}'")]
    MissingAttribute(String, String),

    #[error("duplicate element id '{0}'")]
    DuplicateId(String),

    #[error("form '{0}' has no action URL")]
    MissingFormAction(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LinkstashError>;
