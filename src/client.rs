//! HTTP client for the Locatieserver search API.

use url::Url;

use crate::{
    query::{ApiType, FreeQuery, LookupQuery, Query, ReverseQuery, SearchQuery, SuggestQuery},
    types::{Response, SuccessResponse},
    Error,
};

/// HTTP client for the PDOK Locatieserver search API.
///
/// Stateless: each call builds a fresh `reqwest::Client` and performs a
/// single GET. No retries, no timeout, no caching.
pub struct Client {
    /// Base URL for the API. Defaults to the production v3_1 search path.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Locatieserver API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://api.pdok.nl/bzk/locatieserver/search/v3_1".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, api: ApiType, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/{}", &self.base_api_url, api).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<Q>(&self, api: ApiType, query: &Q) -> Result<Response, Error>
    where
        Q: Query,
    {
        let url = self.get_url(api, query)?;
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status,
                headers,
                body,
            });
        }

        let envelope = serde_json::from_str::<SuccessResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })?;

        Ok(envelope.response)
    }

    /// Sends the query to its endpoint and returns the unwrapped result set.
    pub async fn find_locations(&self, query: &SearchQuery) -> Result<Response, Error> {
        self.get(query.api_type(), query).await
    }

    /// Free-text search across all document types.
    pub async fn free(&self, query: &FreeQuery) -> Result<Response, Error> {
        self.get(ApiType::Free, query).await
    }

    /// Fetches a single document by its identifier.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<Response, Error> {
        self.get(ApiType::Lookup, query).await
    }

    /// Reverse geocoding: documents near a coordinate.
    pub async fn reverse(&self, query: &ReverseQuery) -> Result<Response, Error> {
        self.get(ApiType::Reverse, query).await
    }

    /// Autocomplete suggestions for a partial search term.
    pub async fn suggest(&self, query: &SuggestQuery) -> Result<Response, Error> {
        self.get(ApiType::Suggest, query).await
    }
}

/// Sends `query` with a default [`Client`]; the one-shot form of
/// [`Client::find_locations`].
pub async fn find_locations(query: &SearchQuery) -> Result<Response, Error> {
    Client::new().find_locations(query).await
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
