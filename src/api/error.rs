use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of an [`ApiError`], for callers deciding whether to
/// back off, report a missing symbol, or surface a connectivity problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    RateLimited,
    NotFound,
    Transport,
    InvalidData,
    Provider,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// The provider throttled the request. Retrying is left to the caller.
    #[error("API rate limit exceeded. Please try again in a moment. ({message})")]
    RateLimited { message: String },

    /// A well-formed response without the data the operation needs.
    #[error("No data found for symbol {0}")]
    NotFound(String),

    /// A provider message that retrying will not change, such as a premium-only
    /// endpoint or a demo key used outside its allowed symbols.
    #[error("Alpha Vantage rejected the request: {message}")]
    Provider { message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Status(StatusCode),

    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to build request URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected format of '{section}' in response: {source}")]
    Malformed {
        section: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse {field} '{value}'")]
    InvalidField { field: String, value: String },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::RateLimited { .. } => ErrorKind::RateLimited,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Provider { .. } => ErrorKind::Provider,
            ApiError::Http(_)
            | ApiError::Status(_)
            | ApiError::Decode(_)
            | ApiError::InvalidUrl(_) => ErrorKind::Transport,
            ApiError::Malformed { .. } | ApiError::InvalidField { .. } => ErrorKind::InvalidData,
        }
    }

    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        ApiError::InvalidField {
            field: field.into(),
            value: value.into(),
        }
    }
}
