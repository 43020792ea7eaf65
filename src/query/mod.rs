mod common;
pub use self::common::{ApiType, Query, QueryCommon};

mod free;
pub use self::free::FreeQuery;

mod lookup;
pub use self::lookup::LookupQuery;

mod reverse;
pub use self::reverse::{ReverseQuery, TypeFilter};

mod suggest;
pub use self::suggest::SuggestQuery;

use url::Url;

/// A request to one of the four Locatieserver endpoints. The variant selects
/// the endpoint path and fixes which parameters exist; cross-endpoint
/// parameters cannot be expressed.
pub enum SearchQuery {
    Free(FreeQuery),
    Lookup(LookupQuery),
    Reverse(ReverseQuery),
    Suggest(SuggestQuery),
}

impl SearchQuery {
    /// The endpoint this query targets.
    pub fn api_type(&self) -> ApiType {
        match self {
            SearchQuery::Free(_) => ApiType::Free,
            SearchQuery::Lookup(_) => ApiType::Lookup,
            SearchQuery::Reverse(_) => ApiType::Reverse,
            SearchQuery::Suggest(_) => ApiType::Suggest,
        }
    }
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        match self {
            SearchQuery::Free(query) => query.get_common(),
            SearchQuery::Lookup(query) => query.get_common(),
            SearchQuery::Reverse(query) => query.get_common(),
            SearchQuery::Suggest(query) => query.get_common(),
        }
    }
    fn add_to_url(&self, url: &Url) -> Url {
        match self {
            SearchQuery::Free(query) => query.add_to_url(url),
            SearchQuery::Lookup(query) => query.add_to_url(url),
            SearchQuery::Reverse(query) => query.add_to_url(url),
            SearchQuery::Suggest(query) => query.add_to_url(url),
        }
    }
}

impl From<FreeQuery> for SearchQuery {
    fn from(query: FreeQuery) -> Self {
        SearchQuery::Free(query)
    }
}

impl From<LookupQuery> for SearchQuery {
    fn from(query: LookupQuery) -> Self {
        SearchQuery::Lookup(query)
    }
}

impl From<ReverseQuery> for SearchQuery {
    fn from(query: ReverseQuery) -> Self {
        SearchQuery::Reverse(query)
    }
}

impl From<SuggestQuery> for SearchQuery {
    fn from(query: SuggestQuery) -> Self {
        SearchQuery::Suggest(query)
    }
}
