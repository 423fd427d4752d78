//! Request options and the request handed to an executor

use std::fmt;
use std::str::FromStr;

use http::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, Method};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::response::Response;

/// Media type sent in the default `Accept` and `Content-Type` headers
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Whether credentials are attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialsPolicy {
    /// Never attach credentials
    Omit,
    /// Attach credentials only for requests to the client's own origin
    #[default]
    SameOrigin,
    /// Always attach credentials
    Include,
}

impl FromStr for CredentialsPolicy {
    type Err = HttpError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "omit" => Ok(Self::Omit),
            "same-origin" => Ok(Self::SameOrigin),
            "include" => Ok(Self::Include),
            _ => Err(HttpError::Other(
                format!("Unknown credentials policy: {}", value).into(),
            )),
        }
    }
}

impl fmt::Display for CredentialsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CredentialsPolicy::Omit => "omit",
            CredentialsPolicy::SameOrigin => "same-origin",
            CredentialsPolicy::Include => "include",
        };
        f.write_str(s)
    }
}

/// Configuration of a single helper call
///
/// Serialization of `data` happens when it is set; a failure is held and
/// returned when a request carrying a body is issued, before anything is
/// sent. Requests without a body ignore it.
#[derive(Debug)]
pub struct RequestOptions {
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    credentials: Option<CredentialsPolicy>,
    error: Option<HttpError>,
}

impl RequestOptions {
    /// Options targeting `url`, with no extra headers, payload or credentials policy
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: None,
            credentials: None,
            error: None,
        }
    }

    /// Add a header, replacing a default header of the same name
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add several headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the JSON payload
    pub fn data<T: Serialize + ?Sized>(mut self, data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(body) => {
                self.body = Some(body);
                self.error = None;
            }
            Err(e) => self.error = Some(HttpError::from(e)),
        }
        self
    }

    /// Set the credentials policy
    pub fn credentials(mut self, policy: CredentialsPolicy) -> Self {
        self.credentials = Some(policy);
        self
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Split into the target URL and the request an executor issues
    ///
    /// The payload is attached only when `with_body` is set. Without it a
    /// payload that failed to serialize is ignored along with the payload.
    pub(crate) fn into_request(
        self,
        method: Method,
        with_body: bool,
    ) -> Response<(String, RequestInit)> {
        let body = if with_body {
            if let Some(err) = self.error {
                return Err(err);
            }
            self.body
        } else {
            None
        };

        let headers = merge_headers(&self.headers)?;

        Ok((
            self.url,
            RequestInit {
                method,
                headers,
                body,
                credentials: self.credentials,
            },
        ))
    }
}

impl From<&str> for RequestOptions {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for RequestOptions {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// Request as handed to a [`RequestExecutor`](crate::RequestExecutor)
#[derive(Debug, Clone)]
pub struct RequestInit {
    /// HTTP method
    pub method: Method,
    /// Merged headers
    pub headers: HeaderMap,
    /// Serialized JSON payload
    pub body: Option<Vec<u8>>,
    /// Credentials policy requested by the caller
    pub credentials: Option<CredentialsPolicy>,
}

/// JSON defaults overlaid with caller headers
///
/// Names compare case-insensitively, so a caller `content-type` replaces the
/// default `Content-Type`.
pub fn merge_headers(headers: &[(String, String)]) -> Response<HeaderMap> {
    let mut merged = HeaderMap::new();
    merged.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
    merged.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));

    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| HttpError::Header(format!("invalid header name `{}`", key)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| HttpError::Header(format!("invalid value for header `{}`", key)))?;

        tracing::trace!("Overriding header {}", name);
        merged.insert(name, value);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_caller_headers() {
        let headers = merge_headers(&[]).expect("defaults are valid");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[ACCEPT], JSON_MEDIA_TYPE);
        assert_eq!(headers[CONTENT_TYPE], JSON_MEDIA_TYPE);
    }

    #[test]
    fn test_caller_value_wins_on_collision() {
        let headers = merge_headers(&header_pairs(&[("Content-Type", "text/plain")]))
            .expect("valid headers");
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers[ACCEPT], JSON_MEDIA_TYPE);
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn test_collision_is_case_insensitive() {
        let headers =
            merge_headers(&header_pairs(&[("accept", "text/csv")])).expect("valid headers");
        assert_eq!(headers[ACCEPT], "text/csv");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_caller_headers_extend_defaults() {
        let headers = merge_headers(&header_pairs(&[("X-Request-Id", "abc")]))
            .expect("valid headers");
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["x-request-id"], "abc");
    }

    #[test]
    fn test_invalid_header_name() {
        let result = merge_headers(&header_pairs(&[("bad name", "value")]));
        assert!(matches!(result, Err(HttpError::Header(_))));
    }

    #[test]
    fn test_invalid_header_value() {
        let result = merge_headers(&header_pairs(&[("X-Test", "line\nbreak")]));
        assert!(matches!(result, Err(HttpError::Header(_))));
    }

    #[test]
    fn test_body_dropped_when_not_allowed() {
        let (url, init) = RequestOptions::new("http://localhost/api")
            .data(&serde_json::json!({"a": 1}))
            .into_request(Method::GET, false)
            .expect("valid options");
        assert_eq!(url, "http://localhost/api");
        assert_eq!(init.method, Method::GET);
        assert!(init.body.is_none());
    }

    #[test]
    fn test_body_serialized_as_json_text() {
        let (_, init) = RequestOptions::new("http://localhost/api")
            .data(&serde_json::json!({"a": 1}))
            .into_request(Method::PUT, true)
            .expect("valid options");
        assert_eq!(init.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
    }

    #[test]
    fn test_credentials_passed_through() {
        let (_, init) = RequestOptions::new("http://localhost/api")
            .credentials(CredentialsPolicy::Include)
            .into_request(Method::HEAD, false)
            .expect("valid options");
        assert_eq!(init.credentials, Some(CredentialsPolicy::Include));
    }

    #[test]
    fn test_unserializable_data_fails_on_issue() {
        use std::collections::HashMap;

        // Non-string map keys cannot be represented in JSON
        let mut data = HashMap::new();
        data.insert(vec![1u8], 1);

        let result = RequestOptions::new("http://localhost/api")
            .data(&data)
            .into_request(Method::POST, true);
        assert!(matches!(result, Err(HttpError::Serialization(_))));
    }

    #[test]
    fn test_unserializable_data_ignored_without_body() {
        use std::collections::HashMap;

        let mut data = HashMap::new();
        data.insert(vec![1u8], 1);

        let (_, init) = RequestOptions::new("http://localhost/api")
            .data(&data)
            .into_request(Method::GET, false)
            .expect("payload is not sent");
        assert!(init.body.is_none());
    }

    #[test]
    fn test_credentials_policy_strings() {
        for policy in [
            CredentialsPolicy::Omit,
            CredentialsPolicy::SameOrigin,
            CredentialsPolicy::Include,
        ] {
            let parsed: CredentialsPolicy = policy.to_string().parse().expect("round trips");
            assert_eq!(parsed, policy);

            let json = serde_json::to_string(&policy).expect("serializes");
            assert_eq!(json, format!("\"{}\"", policy));
        }

        assert!("sometimes".parse::<CredentialsPolicy>().is_err());
        assert_eq!(CredentialsPolicy::default(), CredentialsPolicy::SameOrigin);
    }
}
