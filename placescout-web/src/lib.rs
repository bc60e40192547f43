//! PlaceScout Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Thin HTTP boundary over the search pipeline. Decodes and trims query
//! parameters, invokes the aggregator, and maps pipeline errors onto
//! client-error and server-error responses.

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, run_server};
