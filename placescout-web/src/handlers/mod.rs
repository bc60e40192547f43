//! HTTP request handlers.

pub mod api;

// Re-export handler functions
pub use api::{SearchParams, api_search};
