//! JSON request helper
//!
//! Thin convenience layer over a request executor: default JSON headers
//! merged with caller headers, an optional JSON payload, and responses
//! unwrapped into the decoded body or a structured [`ApiError`].
//!
//! # Example
//!
//! ```no_run
//! use compliance_http::{HttpClient, RequestOptions, Response};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct ApiResponse {
//!     message: String,
//! }
//!
//! async fn example() -> Response<ApiResponse> {
//!     let client = HttpClient::new();
//!     client
//!         .create_json(
//!             RequestOptions::new("https://api.example.com/data")
//!                 .header("X-Request-Id", "42")
//!                 .data(&serde_json::json!({ "name": "example" })),
//!         )
//!         .await
//! }
//! ```

mod backends;
mod client;
mod compliance;
mod error;
mod executor;
mod request;
mod response;
mod status;

pub use backends::ReqwestExecutor;
pub use client::{
    create_json, fetch_headers, fetch_json, remove_json, replace_json, HttpClient,
    HttpClientBuilder,
};
pub use compliance::{compliance_data_types_url, COMPLIANCE_DATA_TYPES_PATH};
pub use error::{ApiError, BoxError, HttpError};
pub use executor::RequestExecutor;
pub use request::{merge_headers, CredentialsPolicy, RequestInit, RequestOptions, JSON_MEDIA_TYPE};
pub use response::{RawResponse, Response};
pub use status::{DefaultStatusMessages, StatusMessages, FALLBACK_MESSAGE};
pub use {async_trait, http};
