//! Pure filters that partition a mixed document collection by type.

use crate::types::{
    AddressDocument, CityDocument, Document, DocumentType, MunicipalityDocument, StreetDocument,
    ZipcodeDocument,
};

/// Returns the documents whose tag equals `doc_type`, preserving relative
/// order. Total: no matches yields an empty vec, never an error.
pub fn filter_documents_by(doc_type: DocumentType, documents: &[Document]) -> Vec<&Document> {
    documents
        .iter()
        .filter(|document| document.doc_type() == doc_type)
        .collect()
}

/// Address documents only, narrowed to their concrete shape.
pub fn filter_documents_by_address(documents: &[Document]) -> Vec<&AddressDocument> {
    documents
        .iter()
        .filter_map(|document| match document {
            Document::Address(address) => Some(address),
            _ => None,
        })
        .collect()
}

/// City documents only, narrowed to their concrete shape.
pub fn filter_documents_by_city(documents: &[Document]) -> Vec<&CityDocument> {
    documents
        .iter()
        .filter_map(|document| match document {
            Document::City(city) => Some(city),
            _ => None,
        })
        .collect()
}

/// Municipality documents only, narrowed to their concrete shape.
pub fn filter_documents_by_municipality(documents: &[Document]) -> Vec<&MunicipalityDocument> {
    documents
        .iter()
        .filter_map(|document| match document {
            Document::Municipality(municipality) => Some(municipality),
            _ => None,
        })
        .collect()
}

/// Street documents only, narrowed to their concrete shape.
pub fn filter_documents_by_street(documents: &[Document]) -> Vec<&StreetDocument> {
    documents
        .iter()
        .filter_map(|document| match document {
            Document::Street(street) => Some(street),
            _ => None,
        })
        .collect()
}

/// Postal-code documents only, narrowed to their concrete shape.
pub fn filter_documents_by_zipcode(documents: &[Document]) -> Vec<&ZipcodeDocument> {
    documents
        .iter()
        .filter_map(|document| match document {
            Document::Zipcode(zipcode) => Some(zipcode),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn city(id: &str) -> Document {
        serde_json::from_value(json!({
            "type": "woonplaats",
            "id": id,
            "identificatie": "1182",
            "bron": "BAG",
            "woonplaatscode": "1182",
            "woonplaatsnaam": "Zwolle",
            "gemeentecode": "0193",
            "gemeentenaam": "Zwolle",
            "provinciecode": "PV23",
            "provincienaam": "Overijssel",
            "provincieafkorting": "OV",
            "centroide_ll": "POINT(6.11836361 52.51868565)",
            "centroide_rd": "POINT(204627.572 503696.798)",
            "rdf_seealso": "http://bag.basisregistraties.overheid.nl/bag/id/woonplaats/1182",
            "weergavenaam": "Zwolle, Zwolle, Overijssel",
            "score": 9.605669
        }))
        .unwrap()
    }

    fn address(id: &str) -> Document {
        serde_json::from_value(json!({
            "type": "adres",
            "id": id,
            "identificatie": "0363200000454013",
            "bron": "BAG",
            "woonplaatscode": "3594",
            "woonplaatsnaam": "Amsterdam",
            "gemeentecode": "0363",
            "gemeentenaam": "Amsterdam",
            "provinciecode": "PV27",
            "provincienaam": "Noord-Holland",
            "provincieafkorting": "NH",
            "straatnaam": "Museumstraat",
            "huisnummer": 1,
            "postcode": "1071XX",
            "centroide_ll": "POINT(4.88509119 52.35996454)",
            "centroide_rd": "POINT(121307.925 486522.994)",
            "rdf_seealso": "http://bag.basisregistraties.overheid.nl/bag/id/nummeraanduiding/0363200000454013",
            "weergavenaam": "Museumstraat 1, 1071XX Amsterdam"
        }))
        .unwrap()
    }

    fn municipality(id: &str) -> Document {
        serde_json::from_value(json!({
            "type": "gemeente",
            "id": id,
            "identificatie": "0193",
            "bron": "CBS",
            "gemeentecode": "0193",
            "gemeentenaam": "Zwolle",
            "weergavenaam": "Gemeente Zwolle, Overijssel",
            "provinciecode": "PV23",
            "provincienaam": "Overijssel",
            "provincieafkorting": "OV",
            "centroide_ll": "POINT(6.11836361 52.51868565)",
            "centroide_rd": "POINT(204627.572 503696.798)"
        }))
        .unwrap()
    }

    fn street(id: &str) -> Document {
        serde_json::from_value(json!({
            "type": "weg",
            "id": id,
            "identificatie": "0363300000004253",
            "bron": "BAG",
            "openbareruimte_id": "0363300000004253",
            "straatnaam": "Museumstraat",
            "openbareruimtetype": "Weg",
            "woonplaatscode": "3594",
            "woonplaatsnaam": "Amsterdam",
            "gemeentecode": "0363",
            "gemeentenaam": "Amsterdam",
            "provinciecode": "PV27",
            "provincienaam": "Noord-Holland",
            "provincieafkorting": "NH",
            "centroide_ll": "POINT(4.88509119 52.35996454)",
            "centroide_rd": "POINT(121307.925 486522.994)",
            "rdf_seealso": "http://bag.basisregistraties.overheid.nl/bag/id/openbareruimte/0363300000004253",
            "weergavenaam": "Museumstraat, Amsterdam"
        }))
        .unwrap()
    }

    fn zipcode(id: &str) -> Document {
        serde_json::from_value(json!({
            "type": "postcode",
            "id": id,
            "identificatie": "1071XX",
            "bron": "BAG",
            "openbareruimte_id": "0363300000004253",
            "woonplaatscode": "3594",
            "woonplaatsnaam": "Amsterdam",
            "gemeentecode": "0363",
            "gemeentenaam": "Amsterdam",
            "provinciecode": "PV27",
            "provincienaam": "Noord-Holland",
            "provincieafkorting": "NH",
            "postcode": "1071XX",
            "straatnaam": "Museumstraat",
            "openbareruimtetype": "Weg",
            "centroide_ll": "POINT(4.88509119 52.35996454)",
            "centroide_rd": "POINT(121307.925 486522.994)",
            "weergavenaam": "1071XX, Amsterdam"
        }))
        .unwrap()
    }

    fn mixed() -> Vec<Document> {
        vec![
            address("adr-1"),
            city("wpl-1"),
            municipality("gem-1"),
            address("adr-2"),
            street("weg-1"),
            zipcode("pc-1"),
        ]
    }

    #[test]
    fn filters_by_tag_preserving_order() {
        let docs = mixed();
        let addresses = filter_documents_by(DocumentType::Address, &docs);
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].id(), "adr-1");
        assert_eq!(addresses[1].id(), "adr-2");
    }

    #[test]
    fn no_matches_yields_empty() {
        let docs = vec![city("wpl-1")];
        assert!(filter_documents_by(DocumentType::Street, &docs).is_empty());
        assert!(filter_documents_by(DocumentType::Street, &[]).is_empty());
    }

    #[test]
    fn input_is_not_consumed() {
        let docs = mixed();
        let _ = filter_documents_by(DocumentType::City, &docs);
        assert_eq!(docs.len(), 6);
    }

    #[test]
    fn typed_wrappers_match_the_generic_filter() {
        let docs = mixed();

        let addresses = filter_documents_by_address(&docs);
        assert_eq!(
            addresses.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            filter_documents_by(DocumentType::Address, &docs)
                .iter()
                .map(|d| d.id())
                .collect::<Vec<_>>()
        );

        assert_eq!(
            filter_documents_by_city(&docs).len(),
            filter_documents_by(DocumentType::City, &docs).len()
        );
        assert_eq!(
            filter_documents_by_municipality(&docs).len(),
            filter_documents_by(DocumentType::Municipality, &docs).len()
        );
        assert_eq!(
            filter_documents_by_street(&docs).len(),
            filter_documents_by(DocumentType::Street, &docs).len()
        );
        assert_eq!(
            filter_documents_by_zipcode(&docs).len(),
            filter_documents_by(DocumentType::Zipcode, &docs).len()
        );
    }

    #[test]
    fn typed_wrappers_narrow_to_the_variant() {
        let docs = mixed();
        let streets = filter_documents_by_street(&docs);
        assert_eq!(streets.len(), 1);
        assert_eq!(streets[0].straatnaam, "Museumstraat");

        let zipcodes = filter_documents_by_zipcode(&docs);
        assert_eq!(zipcodes[0].postcode, "1071XX");
    }
}
