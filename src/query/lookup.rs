use url::Url;

use super::common::{Query, QueryCommon, Truthy};

/// Query builder for the `lookup` endpoint: fetch a single document by its
/// identifier (e.g. `adr-...`, `wpl-...`).
pub struct LookupQuery {
    pub common: QueryCommon,
    /// Document identifier to look up.
    pub id: String,
}

impl LookupQuery {
    pub fn new(id: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            id: id.to_string(),
        }
    }
}

impl Query for LookupQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if self.id.is_truthy() {
            url.query_pairs_mut().append_pair("id", &self.id);
        }
        url
    }
}
