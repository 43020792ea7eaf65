use url::Url;

use crate::types::DocumentType;

use super::common::{Query, QueryCommon, Truthy};

/// Type filter for the reverse endpoint: every document type, or an explicit
/// set.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeFilter {
    /// Match all document types (serialized as `type=*`).
    Any,
    /// Match only the listed document types.
    Types(Vec<DocumentType>),
}

/// Query builder for the `reverse` endpoint: documents near a coordinate,
/// given either in RD (`x`/`y`) or WGS84 (`lat`/`lon`).
#[derive(Default)]
pub struct ReverseQuery {
    pub common: QueryCommon,
    /// X coordinate in the RD (Rijksdriehoek) projection.
    pub x: Option<f64>,
    /// Y coordinate in the RD (Rijksdriehoek) projection.
    pub y: Option<f64>,
    /// Latitude (WGS84).
    pub lat: Option<f64>,
    /// Longitude (WGS84).
    pub lon: Option<f64>,
    /// Which document types to return. `None` uses the API default.
    pub types: Option<TypeFilter>,
    /// Search radius in meters.
    pub distance: Option<f64>,
    /// Result offset (0-based).
    pub start: Option<i64>,
    /// Maximum number of results to return.
    pub rows: Option<i64>,
}

impl Query for ReverseQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(x) = self.x {
            if x.is_truthy() {
                url.query_pairs_mut().append_pair("x", &x.to_string());
            }
        }
        if let Some(y) = self.y {
            if y.is_truthy() {
                url.query_pairs_mut().append_pair("y", &y.to_string());
            }
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
        match &self.types {
            Some(TypeFilter::Any) => {
                url.query_pairs_mut().append_pair("type", "*");
            }
            // Upstream quirk: each selected type is sent as a pair whose
            // value itself repeats `type=`, i.e. `type=type%3Dadres`.
            Some(TypeFilter::Types(types)) => {
                for doc_type in types.iter() {
                    url.query_pairs_mut()
                        .append_pair("type", &format!("type={}", doc_type));
                }
            }
            None => {}
        }
        if let Some(distance) = self.distance {
            if distance.is_truthy() {
                url.query_pairs_mut()
                    .append_pair("distance", &distance.to_string());
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
        url
    }
}

impl ReverseQuery {
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }
    pub fn with_lat(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }
    pub fn with_lon(mut self, lon: f64) -> Self {
        self.lon = Some(lon);
        self
    }
    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        match &mut self.types {
            Some(TypeFilter::Types(types)) => types.push(doc_type),
            _ => self.types = Some(TypeFilter::Types(vec![doc_type])),
        }
        self
    }
    pub fn with_types(mut self, doc_types: &[DocumentType]) -> Self {
        match &mut self.types {
            Some(TypeFilter::Types(types)) => types.extend_from_slice(doc_types),
            _ => self.types = Some(TypeFilter::Types(doc_types.to_vec())),
        }
        self
    }
    /// Matches every document type (`type=*`).
    pub fn with_any_type(mut self) -> Self {
        self.types = Some(TypeFilter::Any);
        self
    }
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
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
}
