//! CLI command implementations

use clap::Subcommand;
use placescout_search::{NormalizedPlace, PlaceSearchService, SearchRequest};
use placescout_web::run_server;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Use demo data instead of the upstream provider
        #[arg(long)]
        demo: bool,
    },
    /// Run one search and print the enriched results
    Search {
        /// Free-text query, e.g. "panaderías"
        query: String,
        /// City to scope results to (requires --country)
        #[arg(long)]
        city: Option<String>,
        /// Country to scope results to
        #[arg(long)]
        country: Option<String>,
        /// Continuation token from a previous page
        #[arg(long)]
        page_token: Option<String>,
        /// Use demo data instead of the upstream provider
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error when the server fails to start or the search fails.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port, demo } => serve(host, port, demo).await,
        Commands::Search {
            query,
            city,
            country,
            page_token,
            demo,
        } => search_once(query, city, country, page_token, demo).await,
    }
}

fn build_service(demo: bool) -> PlaceSearchService {
    if demo {
        PlaceSearchService::new_demo()
    } else {
        PlaceSearchService::from_env()
    }
}

/// Start the API server
async fn serve(host: String, port: u16, demo: bool) -> anyhow::Result<()> {
    println!("Starting PlaceScout API server...");
    println!("URL: http://{host}:{port}/search");
    if demo {
        println!("Mode: Demo (canned data, no upstream calls)");
    } else {
        println!("Mode: Production (requires PLACES_API_KEY)");
    }
    println!("{:-<50}", "");
    println!("Press Ctrl+C to stop the server");

    run_server(&host, port, build_service(demo))
        .await
        .map_err(|e| anyhow::anyhow!("server failed: {e}"))
}

/// Run one pipeline invocation and print the result page
async fn search_once(
    query: String,
    city: Option<String>,
    country: Option<String>,
    page_token: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let service = build_service(demo);
    let request = SearchRequest {
        query,
        city,
        country,
        page_token,
    };

    let page = service.search(&request).await?;

    if page.places.is_empty() {
        println!("No places found.");
    } else {
        for place in &page.places {
            print_place(place);
        }
        println!("{} place(s).", page.places.len());
    }

    if let Some(token) = page.next_page_token {
        println!("More results available. Next page token: {token}");
    }

    Ok(())
}

fn print_place(place: &NormalizedPlace) {
    println!("{:-<60}", "");
    println!("{}", place.name);
    println!("  Address: {}", place.address);
    match (place.rating, place.review_count) {
        (Some(rating), Some(count)) => println!("  Rating: {rating} ({count} reviews)"),
        (Some(rating), None) => println!("  Rating: {rating}"),
        _ => println!("  Rating: -"),
    }
    println!("  Phone: {}", place.phone.as_deref().unwrap_or("-"));
    println!("  Website: {}", place.website.as_deref().unwrap_or("-"));
    println!("  Location: {}, {}", place.lat, place.lng);
    println!("  Map: {}", place.maps_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_once_with_demo_data() {
        let result = search_once("bakeries".to_string(), None, None, None, true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_once_rejects_city_without_country() {
        let result = search_once(
            "bakeries".to_string(),
            Some("Santiago".to_string()),
            None,
            None,
            true,
        )
        .await;
        assert!(result.is_err());
    }
}
