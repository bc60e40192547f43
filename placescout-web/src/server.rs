//! HTTP server wiring for the PlaceScout API.
//!
//! One read-only endpoint over the search pipeline, with permissive CORS so
//! browser frontends on other origins can consume it directly.

use axum::Router;
use axum::routing::get;
use placescout_search::PlaceSearchService;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handlers::api_search;

/// Shared state handed to every request handler.
///
/// The service is cheap to clone; all entities inside a search call are
/// request-scoped, so handlers share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// The search-and-enrichment pipeline.
    pub search_service: PlaceSearchService,
}

/// Builds the application router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(api_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API until the process is stopped.
///
/// # Errors
/// Returns an error when the address cannot be bound or the server loop
/// fails.
pub async fn run_server(
    host: &str,
    port: u16,
    search_service: PlaceSearchService,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(AppState { search_service });

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("PlaceScout API listening on http://{addr}/search");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds_with_demo_state() {
        let state = AppState {
            search_service: PlaceSearchService::new_demo(),
        };

        // Route registration panics on malformed paths; building the router
        // is the smoke test.
        let _router = build_router(state);
    }
}
