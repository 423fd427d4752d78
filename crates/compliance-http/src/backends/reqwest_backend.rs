//! reqwest-based request executor

use async_trait::async_trait;
use http::HeaderMap;
use url::{Origin, Url};

use crate::error::HttpError;
use crate::executor::RequestExecutor;
use crate::request::{CredentialsPolicy, RequestInit};
use crate::response::{RawResponse, Response};

/// Request executor backed by a `reqwest::Client`
///
/// Holds the pass-through credential headers and the origin used to decide
/// whether a [`CredentialsPolicy::SameOrigin`] request receives them.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    inner: reqwest::Client,
    origin: Option<Origin>,
    credentials: HeaderMap,
}

impl Default for ReqwestExecutor {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl ReqwestExecutor {
    /// Create an executor from a reqwest::Client, without credentials
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            origin: None,
            credentials: HeaderMap::new(),
        }
    }

    pub(crate) fn with_credentials(
        mut self,
        origin: Option<Url>,
        credentials: HeaderMap,
    ) -> Self {
        self.origin = origin.map(|url| url.origin());
        self.credentials = credentials;
        self
    }

    /// Whether credential headers go out with a request to `url`
    fn attach_credentials(&self, url: &str, policy: CredentialsPolicy) -> bool {
        match policy {
            CredentialsPolicy::Omit => false,
            CredentialsPolicy::Include => true,
            CredentialsPolicy::SameOrigin => match (&self.origin, Url::parse(url)) {
                (Some(origin), Ok(target)) => target.origin() == *origin,
                _ => false,
            },
        }
    }
}

#[async_trait]
impl RequestExecutor for ReqwestExecutor {
    async fn execute(&self, url: &str, init: RequestInit) -> Response<RawResponse> {
        let RequestInit {
            method,
            mut headers,
            body,
            credentials,
        } = init;

        let policy = credentials.unwrap_or_default();
        if !self.credentials.is_empty() && self.attach_credentials(url, policy) {
            for (name, value) in &self.credentials {
                // Caller headers take precedence over stored credentials
                if !headers.contains_key(name) {
                    headers.insert(name.clone(), value.clone());
                }
            }
        }

        let mut request = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(HttpError::from)?;
        Ok(RawResponse::from_reqwest(response))
    }
}
