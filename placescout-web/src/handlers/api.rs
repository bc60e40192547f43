//! API handler for place search.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use placescout_search::{PlaceSearchError, SearchPage, SearchRequest};
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;

/// Query parameters accepted by `GET /search`.
///
/// All parameters arrive string-typed; the handler trims them and treats
/// blank values as absent before the pipeline sees the request.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    pub query: Option<String>,
    /// Optional city scope; only valid together with `country`.
    pub city: Option<String>,
    /// Optional country scope.
    pub country: Option<String>,
    /// Opaque continuation token from a previous response.
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

/// `GET /search` - run one search-and-enrichment pipeline invocation.
///
/// Validation failures map to 400, upstream search failures to 502 with the
/// upstream diagnostic attached. Per-candidate detail failures never reach
/// this layer; they only shrink the result list.
///
/// # Errors
/// Returns a JSON `{"error": ...}` body with the mapped status code.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, (StatusCode, Json<serde_json::Value>)> {
    let request = build_request(params);

    match state.search_service.search(&request).await {
        Ok(page) => Ok(Json(page)),
        Err(error) => Err(error_response(&error)),
    }
}

/// Trims boundary input and converts blank parameters to absent ones.
fn build_request(params: SearchParams) -> SearchRequest {
    let non_blank = |value: Option<String>| {
        value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    SearchRequest {
        query: non_blank(params.query).unwrap_or_default(),
        city: non_blank(params.city),
        country: non_blank(params.country),
        page_token: non_blank(params.page_token),
    }
}

/// Maps a pipeline error onto an HTTP status and JSON error body.
fn error_response(error: &PlaceSearchError) -> (StatusCode, Json<serde_json::Value>) {
    let status = if error.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    };

    (status, Json(json!({ "error": error.to_string() })))
}

#[cfg(test)]
mod tests {
    use placescout_search::PlaceSearchService;

    use super::*;

    fn params(query: Option<&str>) -> SearchParams {
        SearchParams {
            query: query.map(str::to_string),
            city: None,
            country: None,
            page_token: None,
        }
    }

    fn demo_state() -> AppState {
        AppState {
            search_service: PlaceSearchService::new_demo(),
        }
    }

    #[test]
    fn test_build_request_trims_and_drops_blanks() {
        let request = build_request(SearchParams {
            query: Some("  bakeries  ".to_string()),
            city: Some("   ".to_string()),
            country: Some(" Chile ".to_string()),
            page_token: Some(String::new()),
        });

        assert_eq!(request.query, "bakeries");
        assert_eq!(request.city, None);
        assert_eq!(request.country.as_deref(), Some("Chile"));
        assert_eq!(request.page_token, None);
    }

    #[test]
    fn test_error_status_mapping() {
        let validation = PlaceSearchError::InvalidQuery {
            reason: "query must not be empty".to_string(),
        };
        let (status, _) = error_response(&validation);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let upstream = PlaceSearchError::SearchFailed {
            term: "bakeries".to_string(),
            reason: "REQUEST_DENIED".to_string(),
        };
        let (status, body) = error_response(&upstream);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.0["error"].as_str().unwrap().contains("REQUEST_DENIED"));
    }

    #[tokio::test]
    async fn test_api_search_missing_query_is_client_error() {
        let result = api_search(State(demo_state()), Query(params(None))).await;

        let (status, body) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0["error"].is_string());
    }

    #[tokio::test]
    async fn test_api_search_city_without_country_is_client_error() {
        let mut search_params = params(Some("bakeries"));
        search_params.city = Some("Santiago".to_string());

        let result = api_search(State(demo_state()), Query(search_params)).await;

        let (status, _) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_search_success_shape() {
        let result = api_search(State(demo_state()), Query(params(Some("bakeries")))).await;

        let Json(page) = result.unwrap();
        assert!(!page.places.is_empty());
        assert_eq!(page.next_page_token.as_deref(), Some("demo-page-2"));

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["results"].is_array());
        assert_eq!(json["nextPageToken"], "demo-page-2");
    }
}
