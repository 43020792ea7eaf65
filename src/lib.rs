//! Typed client for the PDOK Locatieserver search API, the Dutch national
//! address and location registry search service.
//!
//! Build a query for one of the four endpoints (free-text search, lookup by
//! id, reverse geocoding, suggest), send it with [`find_locations`] or a
//! [`Client`], and partition the returned documents with the
//! `filter_documents_by*` helpers.
//!
//! ```no_run
//! use locatieserver::{find_locations, FreeQuery, SearchQuery};
//!
//! # async fn run() -> Result<(), locatieserver::Error> {
//! let query = SearchQuery::Free(
//!     FreeQuery::default()
//!         .with_q("Museumstraat 1, Amsterdam")
//!         .with_rows(5),
//! );
//! let response = find_locations(&query).await?;
//! for doc in &response.docs {
//!     println!("{}", doc.id());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod filter;
mod query;
pub mod types;

pub use self::client::{find_locations, Client};
pub use self::errors::Error;
pub use self::filter::{
    filter_documents_by, filter_documents_by_address, filter_documents_by_city,
    filter_documents_by_municipality, filter_documents_by_street, filter_documents_by_zipcode,
};
pub use self::query::{
    ApiType, FreeQuery, LookupQuery, Query, QueryCommon, ReverseQuery, SearchQuery, SuggestQuery,
    TypeFilter,
};
