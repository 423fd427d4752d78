//! Status code to message lookup

/// Maps a response status code to a human readable message
///
/// Used only when building an [`ApiError`](crate::ApiError) for a non-success
/// response. Implemented for any `Fn(u16) -> String`.
pub trait StatusMessages: Send + Sync {
    /// Message for `status`
    fn message(&self, status: u16) -> String;
}

impl<F> StatusMessages for F
where
    F: Fn(u16) -> String + Send + Sync,
{
    fn message(&self, status: u16) -> String {
        self(status)
    }
}

/// Message used when a status has no specific entry
pub const FALLBACK_MESSAGE: &str = "An error occurred with the request";

/// Built-in status message table
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStatusMessages;

impl StatusMessages for DefaultStatusMessages {
    fn message(&self, status: u16) -> String {
        let message = match status {
            400 => "The request was malformed",
            401 => "You are not authorized to access this resource",
            403 => "Access to the requested resource is forbidden",
            404 => "Could not find the requested resource",
            409 => "The request conflicts with the current state of the resource",
            422 => "The request could not be processed",
            429 => "Too many requests, try again later",
            500 => "An error occurred with the server",
            502 | 504 => "The server could not be reached",
            503 => "The service is currently unavailable",
            _ => FALLBACK_MESSAGE,
        };

        message.to_string()
    }
}
