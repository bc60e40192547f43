//! Location bias and search term composition.
//!
//! Turns optional city/country inputs into the single location suffix the
//! upstream text search understands. Pure functions, no side effects.

use crate::errors::PlaceSearchError;

/// Composes the location bias from optional city and country.
///
/// Whitespace-only inputs count as unset. Returns `""` when neither is set,
/// `"{country}"` when only the country is set, and `"{city}, {country}"`
/// when both are.
///
/// # Errors
/// - `PlaceSearchError::InvalidLocation` - city was set without a country
pub fn compose_location_bias(
    city: Option<&str>,
    country: Option<&str>,
) -> Result<String, PlaceSearchError> {
    let city = city.map(str::trim).filter(|s| !s.is_empty());
    let country = country.map(str::trim).filter(|s| !s.is_empty());

    match (city, country) {
        (Some(_), None) => Err(PlaceSearchError::InvalidLocation {
            reason: "city requires a country".to_string(),
        }),
        (Some(city), Some(country)) => Ok(format!("{city}, {country}")),
        (None, Some(country)) => Ok(country.to_string()),
        (None, None) => Ok(String::new()),
    }
}

/// Appends a non-empty location bias to the query as `"{query} in {bias}"`.
///
/// An empty bias leaves the query unchanged.
pub fn compose_search_term(query: &str, location_bias: &str) -> String {
    if location_bias.is_empty() {
        query.to_string()
    } else {
        format!("{query} in {location_bias}")
    }
}
