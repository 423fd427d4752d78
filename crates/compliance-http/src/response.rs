//! HTTP response types

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;

enum Body {
    Reqwest(reqwest::Response),
    Buffered(Vec<u8>),
}

/// Response returned by a [`RequestExecutor`](crate::RequestExecutor)
///
/// Status and headers are available immediately; the body is read only when
/// one of the consuming accessors is awaited.
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl RawResponse {
    /// Response with an in-memory body, for custom executors
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: Body::Buffered(body.into()),
        }
    }

    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            body: Body::Reqwest(response),
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Take the response headers, discarding the unread body
    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }

    /// Get the response body as bytes
    pub async fn bytes(self) -> Response<Vec<u8>> {
        match self.body {
            Body::Reqwest(response) => response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(HttpError::from),
            Body::Buffered(bytes) => Ok(bytes),
        }
    }

    /// Decode the response body as JSON
    pub async fn json<T: DeserializeOwned>(self) -> Response<T> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes).map_err(HttpError::Decode)
    }
}
