//! Provider implementations for the upstream places capability.

use async_trait::async_trait;

use crate::errors::PlaceSearchError;
use crate::types::{CandidatePage, RawDetailRecord};

pub mod demo;
pub mod google;
pub mod mock;

pub use demo::DemoProvider;
pub use google::GooglePlacesProvider;
#[cfg(test)]
pub use mock::MockProvider;

/// Trait for upstream places providers.
///
/// Implementations expose the two upstream operations the pipeline consumes:
/// a text search returning lightweight candidates plus an optional
/// continuation token, and a per-candidate detail lookup.
#[async_trait]
pub trait PlacesProvider: Send + Sync + std::fmt::Debug {
    /// Search for candidate places matching a composed search term.
    ///
    /// The continuation token is forwarded verbatim when present; its
    /// structure is owned by the provider and never inspected here.
    ///
    /// # Errors
    /// - `PlaceSearchError::SearchFailed` - upstream rejected the search
    /// - `PlaceSearchError::NetworkError` - network connectivity issues
    async fn find_candidates(
        &self,
        term: &str,
        page_token: Option<&str>,
    ) -> Result<CandidatePage, PlaceSearchError>;

    /// Fetch the raw detail record for one candidate.
    ///
    /// # Errors
    /// - `PlaceSearchError::DetailFetchFailed` - lookup failed or the
    ///   response could not be parsed
    /// - `PlaceSearchError::NetworkError` - network connectivity issues
    async fn fetch_details(&self, place_id: &str) -> Result<RawDetailRecord, PlaceSearchError>;
}
