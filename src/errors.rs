//! Error types for the API client.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed before a usable response was decoded (network
    /// error, unreadable body, or a malformed success payload). Details are
    /// logged via `tracing`.
    #[error("request failed")]
    RequestFailed,
    /// The API returned a non-success status. Carries the original status,
    /// headers, and complete body so callers can branch on them directly;
    /// the error body is never interpreted here.
    #[error("request failed with status {status}")]
    HttpStatus {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },
}
