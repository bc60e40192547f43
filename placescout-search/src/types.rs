//! Data types for the search and enrichment pipeline.

use serde::{Deserialize, Serialize};

/// One incoming search invocation.
///
/// `city` is only valid together with `country`; the service rejects a
/// request that sets `city` alone. `page_token` is opaque and owned by the
/// upstream provider.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Free-text query, required and non-empty.
    pub query: String,
    /// Optional city used to scope results geographically.
    pub city: Option<String>,
    /// Optional country used to scope results geographically.
    pub country: Option<String>,
    /// Continuation token from a previous page, passed through verbatim.
    pub page_token: Option<String>,
}

/// Lightweight search hit from the upstream text search, not yet enriched.
///
/// Only the identifier is needed to fetch details; candidates are never
/// exposed to consumers directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Opaque upstream place identifier.
    pub place_id: String,
}

/// One page of candidates from the upstream text search.
#[derive(Debug, Clone, Default)]
pub struct CandidatePage {
    /// Candidates in upstream order; bounded by the provider (typically <=20).
    pub candidates: Vec<Candidate>,
    /// Continuation token for the next page, if the provider returned one.
    pub next_page_token: Option<String>,
}

/// Raw detail payload for one candidate, as returned by a provider.
///
/// Every field except `place_id` is optional; upstream records are
/// heterogeneous and frequently partial. Normalization decides which
/// absences are fatal for the record.
#[derive(Debug, Clone, Default)]
pub struct RawDetailRecord {
    /// Identifier the details were fetched for.
    pub place_id: String,
    /// Business name.
    pub name: Option<String>,
    /// Formatted street address.
    pub address: Option<String>,
    /// Average user rating.
    pub rating: Option<f32>,
    /// Total number of user ratings.
    pub review_count: Option<u32>,
    /// Locally formatted phone number.
    pub phone: Option<String>,
    /// Phone number in international format.
    pub international_phone: Option<String>,
    /// Business website URL.
    pub website: Option<String>,
    /// Human-readable opening hours, one line per weekday.
    pub opening_hours: Option<Vec<String>>,
    /// Price level on the upstream 0-4 scale.
    pub price_level: Option<u8>,
    /// Upstream category tags.
    pub categories: Vec<String>,
    /// Latitude, if the record has resolvable geometry.
    pub latitude: Option<f64>,
    /// Longitude, if the record has resolvable geometry.
    pub longitude: Option<f64>,
}

/// One enriched, normalized place in the output list.
///
/// Geometry, name and address are guaranteed present; a record missing any
/// of them is dropped during normalization instead of being emitted with
/// placeholders. Optional fields serialize as JSON null so consumers can
/// tell "no data" from an empty value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedPlace {
    /// Business name.
    pub name: String,
    /// Formatted street address.
    pub address: String,
    /// Average user rating, absent when upstream omits it. A rating of 0 is
    /// preserved as 0, not collapsed into absent.
    pub rating: Option<f32>,
    /// Total number of user ratings.
    #[serde(rename = "user_ratings_total")]
    pub review_count: Option<u32>,
    /// Locally formatted phone number.
    pub phone: Option<String>,
    /// Phone number in international format.
    pub international_phone: Option<String>,
    /// Business website URL.
    pub website: Option<String>,
    /// Human-readable opening hours, one line per weekday, upstream order.
    pub opening_hours: Option<Vec<String>>,
    /// Price level on the upstream 0-4 scale.
    pub price_level: Option<u8>,
    /// Upstream category tags; empty when upstream omits them.
    #[serde(rename = "types")]
    pub categories: Vec<String>,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Canonical maps lookup URL derived from the place identifier.
    pub maps_url: String,
}

/// Final response for one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    /// Normalized places in candidate order, minus dropped candidates.
    #[serde(rename = "results")]
    pub places: Vec<NormalizedPlace>,
    /// Pass-through continuation token; null when upstream omitted it.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_page_wire_keys() {
        let page = SearchPage {
            places: Vec::new(),
            next_page_token: Some("T1".to_string()),
        };

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["results"], serde_json::json!([]));
        assert_eq!(json["nextPageToken"], "T1");
    }

    #[test]
    fn test_absent_token_serializes_as_null() {
        let page = SearchPage {
            places: Vec::new(),
            next_page_token: None,
        };

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["nextPageToken"].is_null());
    }

    #[test]
    fn test_normalized_place_optional_fields_serialize_as_null() {
        let place = NormalizedPlace {
            name: "Panadería San Camilo".to_string(),
            address: "Av. Providencia 1234, Santiago".to_string(),
            rating: None,
            review_count: None,
            phone: None,
            international_phone: None,
            website: None,
            opening_hours: None,
            price_level: None,
            categories: vec!["bakery".to_string()],
            lat: -33.43,
            lng: -70.61,
            maps_url: "https://www.google.com/maps/place/?q=place_id:abc".to_string(),
        };

        let json = serde_json::to_value(&place).unwrap();
        assert!(json["rating"].is_null());
        assert!(json["user_ratings_total"].is_null());
        assert!(json["phone"].is_null());
        assert_eq!(json["types"], serde_json::json!(["bakery"]));
    }

    #[test]
    fn test_zero_rating_survives_serialization() {
        let place = NormalizedPlace {
            name: "n".to_string(),
            address: "a".to_string(),
            rating: Some(0.0),
            review_count: Some(0),
            phone: None,
            international_phone: None,
            website: None,
            opening_hours: None,
            price_level: Some(0),
            categories: Vec::new(),
            lat: 0.0,
            lng: 0.0,
            maps_url: String::new(),
        };

        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["rating"], 0.0);
        assert_eq!(json["price_level"], 0);
    }
}
