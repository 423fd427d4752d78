//! HTTP error types

use thiserror::Error;

/// Boxed underlying cause of a transport failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Structured API error raised for a non-success response status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error ({status}): {message}")]
pub struct ApiError {
    status: u16,
    message: String,
}

impl ApiError {
    /// Create a new API error from a status code and its message
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human readable message derived from the status code
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// HTTP errors that can occur during requests
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-success response status
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(#[source] BoxError),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Request payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),
    /// Invalid request header
    #[error("Invalid header: {0}")]
    Header(String),
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(#[source] BoxError),
    /// Other error
    #[error("{0}")]
    Other(#[source] BoxError),
}

impl HttpError {
    /// Status code of an [`HttpError::Api`] error
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Api(err) => Some(err.status()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_builder() {
            HttpError::Build(Box::new(err))
        } else if err.is_connect() {
            HttpError::Connection(Box::new(err))
        } else {
            HttpError::Other(Box::new(err))
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for HttpError {
    fn from(err: url::ParseError) -> Self {
        HttpError::Url(err.to_string())
    }
}
