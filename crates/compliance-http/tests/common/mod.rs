//! Stub request executor shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use compliance_http::async_trait::async_trait;
use compliance_http::http::{HeaderMap, HeaderValue, StatusCode};
use compliance_http::{HttpError, RawResponse, RequestExecutor, RequestInit, Response};

/// Request as seen by the stub
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub init: RequestInit,
}

enum Reply {
    Response {
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    },
    ConnectionRefused,
}

/// Executor answering every request with a canned reply and recording what it received
#[derive(Clone)]
pub struct StubExecutor {
    reply: Arc<Reply>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl std::fmt::Debug for StubExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubExecutor").finish_non_exhaustive()
    }
}

impl StubExecutor {
    pub fn respond(status: u16, headers: HeaderMap, body: &str) -> Self {
        Self::with_reply(Reply::Response {
            status: StatusCode::from_u16(status).expect("valid status code"),
            headers,
            body: body.as_bytes().to_vec(),
        })
    }

    pub fn json(status: u16, body: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        Self::respond(status, headers, body)
    }

    pub fn refuse() -> Self {
        Self::with_reply(Reply::ConnectionRefused)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Arc::new(reply),
            recorded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().expect("lock not poisoned").clone()
    }

    /// The single request received
    pub fn last(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

#[async_trait]
impl RequestExecutor for StubExecutor {
    async fn execute(&self, url: &str, init: RequestInit) -> Response<RawResponse> {
        self.recorded
            .lock()
            .expect("lock not poisoned")
            .push(Recorded {
                url: url.to_string(),
                init,
            });

        match self.reply.as_ref() {
            Reply::Response {
                status,
                headers,
                body,
            } => Ok(RawResponse::new(*status, headers.clone(), body.clone())),
            Reply::ConnectionRefused => {
                Err(HttpError::Connection("connection refused".into()))
            }
        }
    }
}
