//! Error types for the search and enrichment pipeline.

use thiserror::Error;

/// Errors that can occur during a place search.
#[derive(Debug, Error)]
pub enum PlaceSearchError {
    /// The request query was missing or empty; rejected before any I/O.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Why the query was rejected
        reason: String,
    },

    /// The request location was malformed; rejected before any I/O.
    #[error("Invalid location: {reason}")]
    InvalidLocation {
        /// Why the location was rejected
        reason: String,
    },

    /// The single upstream text search failed; fatal for the request.
    #[error("Search failed for term '{term}': {reason}")]
    SearchFailed {
        /// The composed search term that failed
        term: String,
        /// Upstream diagnostic payload or message
        reason: String,
    },

    /// Network communication error talking to the upstream provider.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// A single detail lookup failed; contained by the aggregator.
    #[error("Detail fetch failed for place '{place_id}': {reason}")]
    DetailFetchFailed {
        /// Identifier of the candidate whose lookup failed
        place_id: String,
        /// The reason for the failure
        reason: String,
    },

    /// A detail record lacked a required field; contained by the aggregator.
    #[error("Incomplete record for place '{place_id}': {reason}")]
    IncompleteRecord {
        /// Identifier of the unusable candidate
        place_id: String,
        /// Which required data was missing
        reason: String,
    },
}

impl PlaceSearchError {
    /// Whether this error is caused by the caller's request rather than the
    /// upstream provider. Drives the client-error vs server-error split at
    /// the HTTP boundary.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery { .. } | Self::InvalidLocation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        let invalid = PlaceSearchError::InvalidQuery {
            reason: "query must not be empty".to_string(),
        };
        assert!(invalid.is_validation());

        let upstream = PlaceSearchError::SearchFailed {
            term: "bakeries".to_string(),
            reason: "HTTP 503".to_string(),
        };
        assert!(!upstream.is_validation());

        let detail = PlaceSearchError::DetailFetchFailed {
            place_id: "p1".to_string(),
            reason: "timeout".to_string(),
        };
        assert!(!detail.is_validation());
    }

    #[test]
    fn test_error_messages_name_the_subject() {
        let err = PlaceSearchError::IncompleteRecord {
            place_id: "abc123".to_string(),
            reason: "missing geometry".to_string(),
        };
        assert!(err.to_string().contains("abc123"));
        assert!(err.to_string().contains("missing geometry"));
    }
}
