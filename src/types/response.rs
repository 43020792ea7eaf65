use serde::{Deserialize, Serialize};

use super::document::Document;

/// The result set returned by every endpoint.
///
/// Produced fresh per call; the caller owns it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Matching documents, in relevance order.
    pub docs: Vec<Document>,
    /// Total number of matches on the server.
    pub num_found: i64,
    /// Whether `num_found` is exact or a lower bound.
    pub num_found_exact: bool,
    /// Offset of the first returned document.
    pub start: i64,
    /// Highest relevance score in the full match set.
    pub max_score: f64,
}

/// Success envelope: the result set wrapped under a `response` key.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SuccessResponse {
    pub response: Response,
}

/// Error body the API sends on non-success statuses.
///
/// The client never parses this itself; non-2xx bodies are surfaced raw in
/// [`Error::HttpStatus`](crate::Error::HttpStatus). Callers that want the
/// structured form can decode the body into this type.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ErrorResponse {
    pub error: ApiError,
}

/// Structured error detail inside an [`ErrorResponse`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ApiError {
    pub metadata: Vec<String>,
    pub msg: String,
    pub code: i64,
}
