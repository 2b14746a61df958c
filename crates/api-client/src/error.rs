//! Error types for the API client crate.

use thiserror::Error;

/// Result type alias for API client operations.
pub type Result<T> = std::result::Result<T, ApiClientError>;

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API error response from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication error (missing or invalid token)
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl ApiClientError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }
}

impl From<ApiClientError> for storefront_core::Error {
    fn from(err: ApiClientError) -> Self {
        use storefront_core::Error;
        match err {
            ApiClientError::Http(e) if e.is_decode() => Error::Decode(e.to_string()),
            ApiClientError::Http(e) => match e.status() {
                Some(status) => Error::api(status.as_u16(), e.to_string()),
                None => Error::Transport(e.to_string()),
            },
            ApiClientError::Json(e) => Error::Decode(e.to_string()),
            ApiClientError::Api { status: 404, message } => Error::NotFound(message),
            ApiClientError::Api { status, message } => Error::Api { status, message },
            ApiClientError::Auth(message) => Error::api(401, message),
        }
    }
}
