//! Request execution seam

use async_trait::async_trait;

use crate::request::RequestInit;
use crate::response::{RawResponse, Response};

/// Issues a fully built request and returns the raw response
///
/// The helper never inspects how the request travels. Transport failures
/// returned here reach the caller unchanged; only the status of a returned
/// response is turned into an [`ApiError`](crate::ApiError).
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute `init` against `url`
    async fn execute(&self, url: &str, init: RequestInit) -> Response<RawResponse>;
}

#[async_trait]
impl<T> RequestExecutor for std::sync::Arc<T>
where
    T: RequestExecutor + ?Sized,
{
    async fn execute(&self, url: &str, init: RequestInit) -> Response<RawResponse> {
        (**self).execute(url, init).await
    }
}
