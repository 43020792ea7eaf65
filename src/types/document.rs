//! Document types returned by the search API.
//!
//! Field names follow the wire format verbatim (Dutch BAG/NWB terminology);
//! the `type` tag discriminates the five document shapes.

use serde::{Deserialize, Serialize};

/// Discriminating tag for the five document shapes.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentType {
    /// A single address (`adres`).
    #[serde(rename = "adres")]
    Address,

    /// A municipality (`gemeente`).
    #[serde(rename = "gemeente")]
    Municipality,

    /// A city or town (`woonplaats`).
    #[serde(rename = "woonplaats")]
    City,

    /// A street (`weg`).
    #[serde(rename = "weg")]
    Street,

    /// A postal code (`postcode`).
    #[serde(rename = "postcode")]
    Zipcode,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DocumentType::Address => "adres",
                DocumentType::Municipality => "gemeente",
                DocumentType::City => "woonplaats",
                DocumentType::Street => "weg",
                DocumentType::Zipcode => "postcode",
            }
        )
    }
}

impl std::str::FromStr for DocumentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adres" => Ok(DocumentType::Address),
            "gemeente" => Ok(DocumentType::Municipality),
            "woonplaats" => Ok(DocumentType::City),
            "weg" => Ok(DocumentType::Street),
            "postcode" => Ok(DocumentType::Zipcode),
            _ => Err(()),
        }
    }
}

/// One geocoded or administrative record returned by the API.
///
/// The `type` field on the wire selects the variant; it is the sole source
/// of truth for narrowing a mixed result set.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "type")]
pub enum Document {
    #[serde(rename = "adres")]
    Address(AddressDocument),

    #[serde(rename = "gemeente")]
    Municipality(MunicipalityDocument),

    #[serde(rename = "woonplaats")]
    City(CityDocument),

    #[serde(rename = "weg")]
    Street(StreetDocument),

    #[serde(rename = "postcode")]
    Zipcode(ZipcodeDocument),
}

impl Document {
    /// The discriminating tag for this document.
    pub fn doc_type(&self) -> DocumentType {
        match self {
            Document::Address(_) => DocumentType::Address,
            Document::Municipality(_) => DocumentType::Municipality,
            Document::City(_) => DocumentType::City,
            Document::Street(_) => DocumentType::Street,
            Document::Zipcode(_) => DocumentType::Zipcode,
        }
    }

    /// Unique document identifier, e.g. `adr-...` or `wpl-...`.
    pub fn id(&self) -> &str {
        match self {
            Document::Address(doc) => &doc.id,
            Document::Municipality(doc) => &doc.id,
            Document::City(doc) => &doc.id,
            Document::Street(doc) => &doc.id,
            Document::Zipcode(doc) => &doc.id,
        }
    }

    /// Relevance score, if the endpoint reports one.
    pub fn score(&self) -> Option<f64> {
        match self {
            Document::Address(doc) => doc.score,
            Document::Municipality(doc) => doc.score,
            Document::City(doc) => doc.score,
            Document::Street(doc) => doc.score,
            Document::Zipcode(doc) => doc.score,
        }
    }
}

/// A single address record (BAG nummeraanduiding).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AddressDocument {
    /// Unique document identifier.
    pub id: String,
    /// Identifier in the source registry.
    pub identificatie: String,
    /// Source registry, e.g. `BAG`.
    pub bron: String,
    /// Relevance score.
    pub score: Option<f64>,

    pub woonplaatscode: String,
    pub woonplaatsnaam: String,
    pub gemeentecode: String,
    pub gemeentenaam: String,
    pub provinciecode: String,
    pub provincienaam: String,
    pub provincieafkorting: String,
    pub waterschapsnaam: Option<String>,
    pub waterschapscode: Option<String>,
    pub wijkcode: Option<String>,
    pub wijknaam: Option<String>,
    pub buurtcode: Option<String>,
    pub buurtnaam: Option<String>,
    pub openbareruimte_id: Option<String>,
    pub openbareruimtetype: Option<String>,
    pub straatnaam: String,
    pub straatnaam_verkort: Option<String>,

    /// House number.
    pub huisnummer: i64,
    pub huisletter: Option<String>,
    pub huisnummertoevoeging: Option<String>,
    /// Full house-number text, e.g. `1 A-2`.
    pub huis_nlt: Option<String>,

    pub postcode: String,
    pub adresseerbaarobject_id: Option<String>,
    pub nummeraanduiding_id: Option<String>,

    /// Centroid as WKT `POINT`, WGS84 lat/lon.
    pub centroide_ll: String,
    /// Centroid as WKT `POINT`, RD (Rijksdriehoek) projection.
    pub centroide_rd: String,

    /// Linked-data URI for this record.
    pub rdf_seealso: String,
    /// Cadastral parcels linked to this address.
    pub gekoppeld_perceel: Option<Vec<String>>,
    /// Human-readable display name.
    pub weergavenaam: String,
}

/// A municipality record.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct MunicipalityDocument {
    pub id: String,
    pub identificatie: String,
    pub bron: String,
    pub score: Option<f64>,

    pub gemeentecode: String,
    pub gemeentenaam: String,
    pub weergavenaam: String,
    pub provinciecode: String,
    pub provincienaam: String,
    pub provincieafkorting: String,
    pub centroide_ll: String,
    pub centroide_rd: String,
}

/// A city or town record (BAG woonplaats).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct CityDocument {
    pub id: String,
    pub identificatie: String,
    pub bron: String,
    pub score: Option<f64>,

    pub woonplaatscode: String,
    pub woonplaatsnaam: String,
    pub gemeentecode: String,
    pub gemeentenaam: String,
    pub provinciecode: String,
    pub provincienaam: String,
    pub provincieafkorting: String,
    pub centroide_ll: String,
    pub centroide_rd: String,
    pub rdf_seealso: String,
    pub weergavenaam: String,
}

/// A street record (BAG openbare ruimte).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct StreetDocument {
    pub id: String,
    pub identificatie: String,
    pub bron: String,
    pub score: Option<f64>,

    pub openbareruimte_id: String,
    pub straatnaam: String,
    pub straatnaam_verkort: Option<String>,
    pub openbareruimtetype: String,
    pub woonplaatscode: String,
    pub woonplaatsnaam: String,
    pub gemeentecode: String,
    pub gemeentenaam: String,
    pub provinciecode: String,
    pub provincienaam: String,
    pub provincieafkorting: String,
    /// Identifier in the national road register, if linked.
    pub nwb_id: Option<String>,
    pub centroide_ll: String,
    pub centroide_rd: String,
    pub rdf_seealso: String,
    pub weergavenaam: String,
}

/// A postal-code record.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ZipcodeDocument {
    pub id: String,
    pub identificatie: String,
    pub bron: String,
    pub score: Option<f64>,

    pub openbareruimte_id: String,
    pub woonplaatscode: String,
    pub woonplaatsnaam: String,
    pub gemeentecode: String,
    pub gemeentenaam: String,
    pub provinciecode: String,
    pub provincienaam: String,
    pub provincieafkorting: String,
    pub postcode: String,
    pub straatnaam: String,
    pub straatnaam_verkort: Option<String>,
    pub openbareruimtetype: String,
    pub centroide_ll: String,
    pub centroide_rd: String,
    pub weergavenaam: String,
}
