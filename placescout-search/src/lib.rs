//! PlaceScout Search - Business search and enrichment

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides a search-and-enrichment pipeline over an upstream places
//! provider: one text search per request, one concurrent detail lookup per
//! candidate, normalized into a stable export-friendly schema.

pub mod config;
pub mod errors;
pub mod location;
pub mod normalize;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use config::ProviderConfig;
pub use errors::PlaceSearchError;
pub use service::PlaceSearchService;
pub use types::{Candidate, CandidatePage, NormalizedPlace, RawDetailRecord, SearchPage, SearchRequest};

/// Convenience type alias for Results with PlaceSearchError.
pub type Result<T> = std::result::Result<T, PlaceSearchError>;
