//! Google Places provider for production use.

use async_trait::async_trait;
use serde::Deserialize;

use super::PlacesProvider;
use crate::config::ProviderConfig;
use crate::errors::PlaceSearchError;
use crate::types::{Candidate, CandidatePage, RawDetailRecord};

/// Detail fields requested from the upstream API. Photos are deliberately
/// excluded; they dominate response size and the output schema has no use
/// for them.
const DETAIL_FIELDS: &str = "name,formatted_address,geometry,rating,user_ratings_total,\
formatted_phone_number,international_phone_number,website,opening_hours,price_level,types,place_id";

/// Google Places provider backed by the Text Search and Place Details APIs.
///
/// Credentials, quota and retry policy are the caller's concern; this client
/// sends one request per operation and reports failures as-is.
#[derive(Debug)]
pub struct GooglePlacesProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

/// Response from the Text Search endpoint.
#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<TextSearchHit>,
    next_page_token: Option<String>,
    status: String,
    error_message: Option<String>,
}

/// Single hit from the Text Search endpoint. Only the identifier is used;
/// everything else is re-fetched through the details lookup.
#[derive(Debug, Deserialize)]
struct TextSearchHit {
    place_id: String,
}

/// Response from the Place Details endpoint.
#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<PlaceDetail>,
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetail {
    name: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
    rating: Option<f32>,
    user_ratings_total: Option<u32>,
    formatted_phone_number: Option<String>,
    international_phone_number: Option<String>,
    website: Option<String>,
    opening_hours: Option<OpeningHours>,
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<Location>,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    weekday_text: Option<Vec<String>>,
}

impl GooglePlacesProvider {
    /// Creates a provider from the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a provider configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ProviderConfig::from_env())
    }

    /// Maps an upstream detail payload onto the provider-agnostic record.
    fn into_raw_record(place_id: &str, detail: PlaceDetail) -> RawDetailRecord {
        let (latitude, longitude) = match detail.geometry.and_then(|g| g.location) {
            Some(location) => (Some(location.lat), Some(location.lng)),
            None => (None, None),
        };

        RawDetailRecord {
            place_id: place_id.to_string(),
            name: detail.name,
            address: detail.formatted_address,
            rating: detail.rating,
            review_count: detail.user_ratings_total,
            phone: detail.formatted_phone_number,
            international_phone: detail.international_phone_number,
            website: detail.website,
            opening_hours: detail.opening_hours.and_then(|h| h.weekday_text),
            price_level: detail.price_level,
            categories: detail.types,
            latitude,
            longitude,
        }
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesProvider {
    async fn find_candidates(
        &self,
        term: &str,
        page_token: Option<&str>,
    ) -> Result<CandidatePage, PlaceSearchError> {
        let url = format!("{}/textsearch/json", self.config.base_url);

        let mut params = vec![("query", term), ("key", self.config.api_key.as_str())];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .timeout(self.config.request_timeout)
            .header(reqwest::header::USER_AGENT, self.config.user_agent)
            .send()
            .await
            .map_err(|e| PlaceSearchError::NetworkError {
                reason: format!("text search request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(PlaceSearchError::SearchFailed {
                term: term.to_string(),
                reason: format!("upstream HTTP {}", response.status()),
            });
        }

        let search_response: TextSearchResponse =
            response
                .json()
                .await
                .map_err(|e| PlaceSearchError::SearchFailed {
                    term: term.to_string(),
                    reason: format!("text search JSON parsing failed: {e}"),
                })?;

        // The API reports request-level failures inside a 200 body.
        // ZERO_RESULTS is a valid empty page, not a failure.
        if search_response.status != "OK" && search_response.status != "ZERO_RESULTS" {
            return Err(PlaceSearchError::SearchFailed {
                term: term.to_string(),
                reason: search_response
                    .error_message
                    .unwrap_or(search_response.status),
            });
        }

        Ok(CandidatePage {
            candidates: search_response
                .results
                .into_iter()
                .map(|hit| Candidate {
                    place_id: hit.place_id,
                })
                .collect(),
            next_page_token: search_response.next_page_token,
        })
    }

    async fn fetch_details(&self, place_id: &str) -> Result<RawDetailRecord, PlaceSearchError> {
        let url = format!("{}/details/json", self.config.base_url);

        let params = [
            ("place_id", place_id),
            ("fields", DETAIL_FIELDS),
            ("key", self.config.api_key.as_str()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .timeout(self.config.request_timeout)
            .header(reqwest::header::USER_AGENT, self.config.user_agent)
            .send()
            .await
            .map_err(|e| PlaceSearchError::NetworkError {
                reason: format!("details request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(PlaceSearchError::DetailFetchFailed {
                place_id: place_id.to_string(),
                reason: format!("upstream HTTP {}", response.status()),
            });
        }

        let details_response: DetailsResponse =
            response
                .json()
                .await
                .map_err(|e| PlaceSearchError::DetailFetchFailed {
                    place_id: place_id.to_string(),
                    reason: format!("details JSON parsing failed: {e}"),
                })?;

        if details_response.status != "OK" {
            return Err(PlaceSearchError::DetailFetchFailed {
                place_id: place_id.to_string(),
                reason: details_response
                    .error_message
                    .unwrap_or(details_response.status),
            });
        }

        let detail = details_response
            .result
            .ok_or_else(|| PlaceSearchError::DetailFetchFailed {
                place_id: place_id.to_string(),
                reason: "response contained no result".to_string(),
            })?;

        Ok(Self::into_raw_record(place_id, detail))
    }
}
