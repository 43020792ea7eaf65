//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields,
//! [`ApiType`], and the parameter-omission predicate.

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for the field list and filter queries.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Restricts which document fields the API returns (comma-separated).
    fn with_field_list(mut self, fl: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().fl = Some(fl.to_string());
        self
    }

    /// Adds a filter-query clause, e.g. `type:adres` or `bron:BAG`.
    fn with_filter_query(mut self, fq: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().fq.push(fq.to_string());
        self
    }

    /// Adds several filter-query clauses at once.
    fn with_filter_queries(mut self, fqs: &[String]) -> Self
    where
        Self: Sized,
    {
        self.get_common().fq.extend_from_slice(fqs);
        self
    }
}

/// Which of the four remote endpoints a request targets. `Display` yields
/// the path segment appended to the base URL.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ApiType {
    /// Free-text search across all document types.
    Free,
    /// Lookup of a single document by identifier.
    Lookup,
    /// Reverse geocoding around a coordinate.
    Reverse,
    /// Autocomplete suggestions for a partial term.
    Suggest,
}

impl std::fmt::Display for ApiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ApiType::Free => "free",
                ApiType::Lookup => "lookup",
                ApiType::Reverse => "reverse",
                ApiType::Suggest => "suggest",
            }
        )
    }
}

impl FromStr for ApiType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(ApiType::Free),
            "lookup" => Ok(ApiType::Lookup),
            "reverse" => Ok(ApiType::Reverse),
            "suggest" => Ok(ApiType::Suggest),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types: the returned-field list and filter-query
/// clauses.
#[derive(Clone, Default)]
pub struct QueryCommon {
    /// Comma-separated list of document fields to return. `None` uses the API default.
    pub fl: Option<String>,
    /// Filter-query clauses, e.g. `type:adres`. Serialized as one `fq` pair per clause.
    pub fq: Vec<String>,
}

impl QueryCommon {
    /// Appends the shared parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(fl) = &self.fl {
            if fl.is_truthy() {
                url.query_pairs_mut().append_pair("fl", fl);
            }
        }
        for fq in self.fq.iter() {
            if fq.is_truthy() {
                url.query_pairs_mut().append_pair("fq", fq);
            }
        }
        url
    }
}

/// Decides whether a parameter value is serialized at all.
///
/// The upstream service's reference client drops every "falsy" value: absent
/// fields, empty strings, numeric zero, and empty lists. That also drops a
/// legitimate `rows=0` or a zero coordinate; kept bit-for-bit for wire
/// compatibility. Every omission decision goes through this trait, so lifting
/// the quirk later is a one-line change per impl.
pub(crate) trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}
