//! Demo provider implementation for development and testing.

use async_trait::async_trait;

use super::PlacesProvider;
use crate::errors::PlaceSearchError;
use crate::types::{Candidate, CandidatePage, RawDetailRecord};

/// Demo provider for development without an upstream API key.
///
/// Returns deterministic canned data so the full search workflow can be
/// exercised end to end with no network calls. Serves two pages to make
/// continuation-token handling visible in clients.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlacesProvider for DemoProvider {
    async fn find_candidates(
        &self,
        _term: &str,
        page_token: Option<&str>,
    ) -> Result<CandidatePage, PlaceSearchError> {
        // First page hands out a token; the second page is the last.
        let (ids, next_page_token) = match page_token {
            None => (
                vec!["demo-bakery", "demo-cafe", "demo-bare"],
                Some("demo-page-2".to_string()),
            ),
            Some(_) => (vec!["demo-restaurant"], None),
        };

        Ok(CandidatePage {
            candidates: ids
                .into_iter()
                .map(|id| Candidate {
                    place_id: id.to_string(),
                })
                .collect(),
            next_page_token,
        })
    }

    async fn fetch_details(&self, place_id: &str) -> Result<RawDetailRecord, PlaceSearchError> {
        let record = match place_id {
            "demo-bakery" => RawDetailRecord {
                place_id: place_id.to_string(),
                name: Some("Panadería San Camilo".to_string()),
                address: Some("Av. Providencia 1234, Providencia, Santiago".to_string()),
                rating: Some(4.6),
                review_count: Some(382),
                phone: Some("2 2634 1234".to_string()),
                international_phone: Some("+56 2 2634 1234".to_string()),
                website: Some("https://sancamilo.example".to_string()),
                opening_hours: Some(vec![
                    "Monday: 8:00 AM – 8:00 PM".to_string(),
                    "Tuesday: 8:00 AM – 8:00 PM".to_string(),
                    "Wednesday: 8:00 AM – 8:00 PM".to_string(),
                    "Thursday: 8:00 AM – 8:00 PM".to_string(),
                    "Friday: 8:00 AM – 9:00 PM".to_string(),
                    "Saturday: 9:00 AM – 9:00 PM".to_string(),
                    "Sunday: Closed".to_string(),
                ]),
                price_level: Some(1),
                categories: vec!["bakery".to_string(), "food".to_string()],
                latitude: Some(-33.4263),
                longitude: Some(-70.6150),
            },
            "demo-cafe" => RawDetailRecord {
                place_id: place_id.to_string(),
                name: Some("Café Las Condes".to_string()),
                address: Some("Apoquindo 4500, Las Condes, Santiago".to_string()),
                rating: Some(4.2),
                review_count: Some(120),
                phone: Some("2 2999 8877".to_string()),
                international_phone: Some("+56 2 2999 8877".to_string()),
                website: None,
                opening_hours: None,
                price_level: Some(2),
                categories: vec!["cafe".to_string(), "food".to_string()],
                latitude: Some(-33.4100),
                longitude: Some(-70.5700),
            },
            "demo-bare" => RawDetailRecord {
                // Sparse record: only the mandatory fields are present.
                place_id: place_id.to_string(),
                name: Some("Almacén Esquina".to_string()),
                address: Some("Calle Falsa 123, Santiago".to_string()),
                categories: vec!["store".to_string()],
                latitude: Some(-33.4500),
                longitude: Some(-70.6600),
                ..Default::default()
            },
            "demo-restaurant" => RawDetailRecord {
                place_id: place_id.to_string(),
                name: Some("Fuente Providencia".to_string()),
                address: Some("Manuel Montt 50, Providencia, Santiago".to_string()),
                rating: Some(4.8),
                review_count: Some(2041),
                phone: Some("2 2222 1100".to_string()),
                international_phone: Some("+56 2 2222 1100".to_string()),
                website: Some("https://fuenteprovidencia.example".to_string()),
                opening_hours: Some(vec!["Daily: 12:00 PM – 11:00 PM".to_string()]),
                price_level: Some(2),
                categories: vec!["restaurant".to_string(), "food".to_string()],
                latitude: Some(-33.4280),
                longitude: Some(-70.6190),
            },
            _ => {
                return Err(PlaceSearchError::DetailFetchFailed {
                    place_id: place_id.to_string(),
                    reason: "unknown demo place".to_string(),
                });
            }
        };

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_pages_are_deterministic() {
        let provider = DemoProvider::new();

        let first = provider.find_candidates("bakeries", None).await.unwrap();
        let again = provider.find_candidates("bakeries", None).await.unwrap();
        assert_eq!(first.candidates, again.candidates);
        assert_eq!(first.next_page_token.as_deref(), Some("demo-page-2"));

        let second = provider
            .find_candidates("bakeries", Some("demo-page-2"))
            .await
            .unwrap();
        assert_eq!(second.candidates.len(), 1);
        assert!(second.next_page_token.is_none());
    }

    #[tokio::test]
    async fn test_demo_details_cover_sparse_records() {
        let provider = DemoProvider::new();

        let bare = provider.fetch_details("demo-bare").await.unwrap();
        assert!(bare.phone.is_none());
        assert!(bare.website.is_none());
        assert!(bare.latitude.is_some());

        let unknown = provider.fetch_details("nope").await;
        assert!(matches!(
            unknown,
            Err(PlaceSearchError::DetailFetchFailed { .. })
        ));
    }
}
