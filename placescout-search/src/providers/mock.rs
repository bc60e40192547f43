//! Mock provider implementation for testing.

#[cfg(test)]
use std::collections::{HashMap, HashSet};
#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::PlacesProvider;
#[cfg(test)]
use crate::errors::PlaceSearchError;
#[cfg(test)]
use crate::types::{Candidate, CandidatePage, RawDetailRecord};

/// Mock provider for testing the aggregator's orchestration contract.
///
/// Serves a fixed candidate page, records the search term it was called
/// with, counts calls, and fails the detail lookups it was told to fail.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    candidates: Vec<String>,
    next_page_token: Option<String>,
    details: HashMap<String, RawDetailRecord>,
    failing_details: HashSet<String>,
    search_failure: Option<String>,
    last_term: Mutex<Option<String>>,
    last_page_token: Mutex<Option<String>>,
    find_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a mock serving the given candidate ids, each with a complete
    /// detail record.
    pub fn with_candidates(ids: &[&str]) -> Self {
        let mut mock = Self::default();
        for id in ids {
            mock.candidates.push((*id).to_string());
            mock.details
                .insert((*id).to_string(), Self::complete_record(id));
        }
        mock
    }

    /// Sets the continuation token returned by the search call.
    pub fn next_page_token(mut self, token: &str) -> Self {
        self.next_page_token = Some(token.to_string());
        self
    }

    /// Makes the detail lookup for `id` fail with a network-style error.
    pub fn failing_details(mut self, id: &str) -> Self {
        self.failing_details.insert(id.to_string());
        self
    }

    /// Strips geometry from the detail record for `id`.
    pub fn without_geometry(mut self, id: &str) -> Self {
        if let Some(record) = self.details.get_mut(id) {
            record.latitude = None;
            record.longitude = None;
        }
        self
    }

    /// Makes the search call itself fail.
    pub fn failing_search(mut self, reason: &str) -> Self {
        self.search_failure = Some(reason.to_string());
        self
    }

    /// Search term from the most recent `find_candidates` call.
    ///
    /// # Panics
    /// Panics if a previous test thread poisoned the recording mutex.
    pub fn last_term(&self) -> Option<String> {
        self.last_term.lock().unwrap().clone()
    }

    /// Continuation token from the most recent `find_candidates` call.
    ///
    /// # Panics
    /// Panics if a previous test thread poisoned the recording mutex.
    pub fn last_page_token(&self) -> Option<String> {
        self.last_page_token.lock().unwrap().clone()
    }

    /// Number of `find_candidates` calls made.
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_details` calls made.
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn complete_record(id: &str) -> RawDetailRecord {
        RawDetailRecord {
            place_id: id.to_string(),
            name: Some(format!("Place {id}")),
            address: Some(format!("{id} street 1")),
            rating: Some(4.0),
            review_count: Some(10),
            phone: Some("555-0100".to_string()),
            international_phone: Some("+1 555-0100".to_string()),
            website: Some(format!("https://{id}.example")),
            opening_hours: Some(vec!["Monday: 9:00 AM – 6:00 PM".to_string()]),
            price_level: Some(2),
            categories: vec!["store".to_string()],
            latitude: Some(10.0),
            longitude: Some(20.0),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PlacesProvider for MockProvider {
    async fn find_candidates(
        &self,
        term: &str,
        page_token: Option<&str>,
    ) -> Result<CandidatePage, PlaceSearchError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_term.lock().unwrap() = Some(term.to_string());
        *self.last_page_token.lock().unwrap() = page_token.map(str::to_string);

        if let Some(reason) = &self.search_failure {
            return Err(PlaceSearchError::SearchFailed {
                term: term.to_string(),
                reason: reason.clone(),
            });
        }

        Ok(CandidatePage {
            candidates: self
                .candidates
                .iter()
                .map(|id| Candidate {
                    place_id: id.clone(),
                })
                .collect(),
            next_page_token: self.next_page_token.clone(),
        })
    }

    async fn fetch_details(&self, place_id: &str) -> Result<RawDetailRecord, PlaceSearchError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_details.contains(place_id) {
            return Err(PlaceSearchError::DetailFetchFailed {
                place_id: place_id.to_string(),
                reason: "simulated network failure".to_string(),
            });
        }

        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| PlaceSearchError::DetailFetchFailed {
                place_id: place_id.to_string(),
                reason: "unknown place".to_string(),
            })
    }
}
