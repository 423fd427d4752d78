//! HTTP client wrapper

use std::sync::Arc;
use std::time::Duration;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::backends::ReqwestExecutor;
use crate::error::{ApiError, HttpError};
use crate::executor::RequestExecutor;
use crate::request::RequestOptions;
use crate::response::{RawResponse, Response};
use crate::status::{DefaultStatusMessages, StatusMessages};

/// JSON request helper
///
/// Every call is a single independent request: default JSON headers merged
/// with the caller's, an optional JSON payload, and the response unwrapped
/// into the decoded body or an error. The client keeps no state between
/// calls.
#[derive(Clone)]
pub struct HttpClient<E = ReqwestExecutor> {
    executor: E,
    status_messages: Arc<dyn StatusMessages>,
}

impl<E: std::fmt::Debug> std::fmt::Debug for HttpClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self::with_executor(ReqwestExecutor::default())
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create an HttpClient from a reqwest::Client
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self::with_executor(ReqwestExecutor::new(client))
    }
}

impl<E: RequestExecutor> HttpClient<E> {
    /// Create a client issuing requests through `executor`
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            status_messages: Arc::new(DefaultStatusMessages),
        }
    }

    /// Replace the status message lookup used for [`ApiError`]s
    pub fn with_status_messages(mut self, lookup: impl StatusMessages + 'static) -> Self {
        self.status_messages = Arc::new(lookup);
        self
    }

    /// GET request, returns JSON deserialized to R
    ///
    /// Any payload set on `options` is not sent.
    pub async fn fetch_json<R>(&self, options: impl Into<RequestOptions>) -> Response<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::GET, options.into(), false)
            .await?
            .json()
            .await
    }

    /// POST with the optional JSON payload, returns JSON deserialized to R
    pub async fn create_json<R>(&self, options: impl Into<RequestOptions>) -> Response<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::POST, options.into(), true)
            .await?
            .json()
            .await
    }

    /// DELETE with the optional JSON payload, returns JSON deserialized to R
    pub async fn remove_json<R>(&self, options: impl Into<RequestOptions>) -> Response<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::DELETE, options.into(), true)
            .await?
            .json()
            .await
    }

    /// PUT with the optional JSON payload, returns JSON deserialized to R
    pub async fn replace_json<R>(&self, options: impl Into<RequestOptions>) -> Response<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::PUT, options.into(), true)
            .await?
            .json()
            .await
    }

    /// HEAD request, returns the response headers without reading a body
    pub async fn fetch_headers(&self, options: impl Into<RequestOptions>) -> Response<HeaderMap> {
        let response = self.send(Method::HEAD, options.into(), false).await?;
        Ok(response.into_headers())
    }

    /// Issue one request, turning a non-success status into an [`ApiError`]
    async fn send(
        &self,
        method: Method,
        options: RequestOptions,
        with_body: bool,
    ) -> Response<RawResponse> {
        let (url, init) = options.into_request(method, with_body)?;
        tracing::debug!("{} {}", init.method, url);

        let response = self.executor.execute(&url, init).await?;

        if !response.is_success() {
            let status = response.status();
            if response.is_server_error() {
                tracing::warn!("Request to {} failed with status {}", url, status);
            } else {
                tracing::debug!("Request to {} failed with status {}", url, status);
            }
            return Err(ApiError::new(status, self.status_messages.message(status)).into());
        }

        Ok(response)
    }
}

/// HTTP client builder for configuring the reqwest backend
#[derive(Default)]
pub struct HttpClientBuilder {
    accept_invalid_certs: bool,
    proxy: Option<Url>,
    timeout: Option<Duration>,
    origin: Option<Url>,
    credentials: Vec<(String, String)>,
    status_messages: Option<Arc<dyn StatusMessages>>,
}

impl std::fmt::Debug for HttpClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let credential_names: Vec<&str> =
            self.credentials.iter().map(|(k, _)| k.as_str()).collect();

        f.debug_struct("HttpClientBuilder")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .field("origin", &self.origin)
            .field("credentials", &credential_names)
            .finish_non_exhaustive()
    }
}

impl HttpClientBuilder {
    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Route all requests through a proxy
    pub fn proxy(mut self, url: Url) -> Self {
        self.proxy = Some(url);
        self
    }

    /// Total request timeout enforced by the backend
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Origin that same-origin requests are compared against
    pub fn origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Header attached to requests whose credentials policy allows it
    pub fn credential_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.credentials.push((key.into(), value.into()));
        self
    }

    /// Status message lookup used for [`ApiError`]s
    pub fn status_messages(mut self, lookup: impl StatusMessages + 'static) -> Self {
        self.status_messages = Some(Arc::new(lookup));
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<HttpClient> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(proxy_url) = self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| HttpError::Build(Box::new(e)))?;
            builder = builder.proxy(proxy);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let mut credentials = HeaderMap::new();
        for (key, value) in &self.credentials {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| HttpError::Header(format!("invalid header name `{}`", key)))?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|_| HttpError::Header(format!("invalid value for header `{}`", key)))?;
            value.set_sensitive(true);
            credentials.insert(name, value);
        }

        let client = builder.build().map_err(HttpError::from)?;
        let executor = ReqwestExecutor::new(client).with_credentials(self.origin, credentials);

        Ok(HttpClient {
            executor,
            status_messages: self
                .status_messages
                .unwrap_or_else(|| Arc::new(DefaultStatusMessages)),
        })
    }
}

/// GET request with a default client, returns JSON deserialized to R
pub async fn fetch_json<R: DeserializeOwned>(options: impl Into<RequestOptions>) -> Response<R> {
    HttpClient::new().fetch_json(options).await
}

/// POST request with a default client, returns JSON deserialized to R
pub async fn create_json<R: DeserializeOwned>(options: impl Into<RequestOptions>) -> Response<R> {
    HttpClient::new().create_json(options).await
}

/// DELETE request with a default client, returns JSON deserialized to R
pub async fn remove_json<R: DeserializeOwned>(options: impl Into<RequestOptions>) -> Response<R> {
    HttpClient::new().remove_json(options).await
}

/// PUT request with a default client, returns JSON deserialized to R
pub async fn replace_json<R: DeserializeOwned>(options: impl Into<RequestOptions>) -> Response<R> {
    HttpClient::new().replace_json(options).await
}

/// HEAD request with a default client, returns the response headers
pub async fn fetch_headers(options: impl Into<RequestOptions>) -> Response<HeaderMap> {
    HttpClient::new().fetch_headers(options).await
}
