//! Search aggregation service.
//!
//! Orchestrates the pipeline: validate the request, compose the location
//! bias, run the single upstream text search, fan out one detail lookup per
//! candidate, and collect the normalized survivors in candidate order.

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::config::ProviderConfig;
use crate::errors::PlaceSearchError;
use crate::location::{compose_location_bias, compose_search_term};
use crate::normalize::normalize_record;
use crate::providers::{DemoProvider, GooglePlacesProvider, PlacesProvider};
use crate::types::{Candidate, NormalizedPlace, SearchPage, SearchRequest};

/// Place search service producing enriched, paginated results.
#[derive(Debug, Clone)]
pub struct PlaceSearchService {
    provider: Arc<dyn PlacesProvider>,
}

impl PlaceSearchService {
    /// Creates a service on top of the given provider.
    pub fn new(provider: Arc<dyn PlacesProvider>) -> Self {
        Self { provider }
    }

    /// Creates a service backed by the Google provider, configured from the
    /// environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(GooglePlacesProvider::new(ProviderConfig::from_env())))
    }

    /// Creates a service serving deterministic demo data, for development
    /// without an upstream API key.
    pub fn new_demo() -> Self {
        Self::new(Arc::new(DemoProvider::new()))
    }

    /// Runs one search invocation end to end.
    ///
    /// Validation happens before any network call. The upstream text search
    /// runs exactly once; a failure there is fatal for the request. Detail
    /// lookups for all candidates run concurrently and each failure only
    /// drops its own candidate, logged but never surfaced to the caller.
    /// Output order follows candidate order, not completion order.
    ///
    /// # Errors
    /// - `PlaceSearchError::InvalidQuery` - query empty or whitespace-only
    /// - `PlaceSearchError::InvalidLocation` - city set without country
    /// - `PlaceSearchError::SearchFailed` - the upstream text search failed
    /// - `PlaceSearchError::NetworkError` - text search was unreachable
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, PlaceSearchError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(PlaceSearchError::InvalidQuery {
                reason: "query must not be empty".to_string(),
            });
        }

        let bias = compose_location_bias(request.city.as_deref(), request.country.as_deref())?;
        let term = compose_search_term(query, &bias);

        let page = self
            .provider
            .find_candidates(&term, request.page_token.as_deref())
            .await?;

        // All detail lookups for the page are in flight together; join_all
        // settles them in input order, which is the candidate order the
        // output must preserve.
        let lookups = page
            .candidates
            .iter()
            .map(|candidate| self.fetch_and_normalize(candidate));
        let settled = join_all(lookups).await;

        let mut places = Vec::with_capacity(settled.len());
        for result in settled {
            match result {
                Ok(place) => places.push(place),
                Err(error) => {
                    warn!(%error, "dropping candidate from result page");
                }
            }
        }

        Ok(SearchPage {
            places,
            next_page_token: page.next_page_token,
        })
    }

    /// Fetches and normalizes one candidate. Any error here means "drop this
    /// candidate" to the caller.
    async fn fetch_and_normalize(
        &self,
        candidate: &Candidate,
    ) -> Result<NormalizedPlace, PlaceSearchError> {
        let raw = self.provider.fetch_details(&candidate.place_id).await?;
        normalize_record(raw)
    }
}
