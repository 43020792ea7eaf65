use url::Url;

use super::common::{Query, QueryCommon, Truthy};

/// Query builder for the `suggest` endpoint: autocomplete suggestions for a
/// partial search term.
pub struct SuggestQuery {
    pub common: QueryCommon,
    /// Partial search term to complete.
    pub q: String,
    /// Latitude used to boost nearby results (WGS84).
    pub lat: Option<f64>,
    /// Longitude used to boost nearby results (WGS84).
    pub lon: Option<f64>,
    /// Query-field weighting expression.
    pub qf: Option<String>,
    /// Boost-query clauses.
    pub bq: Vec<String>,
    /// Result offset (0-based).
    pub start: Option<i64>,
    /// Maximum number of results to return.
    pub rows: Option<i64>,
    /// Sort expression.
    pub sort: Option<String>,
}

impl SuggestQuery {
    pub fn new(q: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            q: q.to_string(),
            lat: None,
            lon: None,
            qf: None,
            bq: Vec::new(),
            start: None,
            rows: None,
            sort: None,
        }
    }

    pub fn with_lat(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }
    pub fn with_lon(mut self, lon: f64) -> Self {
        self.lon = Some(lon);
        self
    }
    pub fn with_query_fields(mut self, qf: &str) -> Self {
        self.qf = Some(qf.to_string());
        self
    }
    pub fn with_boost_query(mut self, bq: &str) -> Self {
        self.bq.push(bq.to_string());
        self
    }
    pub fn with_boost_queries(mut self, bqs: &[String]) -> Self {
        self.bq.extend_from_slice(bqs);
        self
    }
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }
    pub fn with_rows(mut self, rows: i64) -> Self {
        self.rows = Some(rows);
        self
    }
    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }
}

impl Query for SuggestQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if self.q.is_truthy() {
            url.query_pairs_mut().append_pair("q", &self.q);
        }
        if let Some(lat) = self.lat {
            if lat.is_truthy() {
                url.query_pairs_mut().append_pair("lat", &lat.to_string());
            }
        }
        if let Some(lon) = self.lon {
            if lon.is_truthy() {
                url.query_pairs_mut().append_pair("lon", &lon.to_string());
            }
        }
        if let Some(qf) = &self.qf {
            if qf.is_truthy() {
                url.query_pairs_mut().append_pair("qf", qf);
            }
        }
        for bq in self.bq.iter() {
            if bq.is_truthy() {
                url.query_pairs_mut().append_pair("bq", bq);
            }
        }
        if let Some(start) = self.start {
            if start.is_truthy() {
                url.query_pairs_mut()
                    .append_pair("start", &start.to_string());
            }
        }
        if let Some(rows) = self.rows {
            if rows.is_truthy() {
                url.query_pairs_mut().append_pair("rows", &rows.to_string());
            }
        }
        if let Some(sort) = &self.sort {
            if sort.is_truthy() {
                url.query_pairs_mut().append_pair("sort", sort);
            }
        }
        url
    }
}
