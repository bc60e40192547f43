//! Detail record normalization.
//!
//! Maps one raw upstream detail record into a `NormalizedPlace`, or signals
//! that the record is unusable. Pure functions; the aggregator decides what
//! to do with unusable records.

use crate::errors::PlaceSearchError;
use crate::types::{NormalizedPlace, RawDetailRecord};

/// Canonical maps lookup URL for a place identifier.
///
/// Deterministic: the same identifier always yields the same URL, so the
/// link can be reconstructed from the identifier alone.
pub fn maps_url(place_id: &str) -> String {
    format!(
        "https://www.google.com/maps/place/?q=place_id:{}",
        urlencoding::encode(place_id)
    )
}

/// Normalizes one raw detail record into the stable output schema.
///
/// Geometry, name and address are mandatory; everything else passes through
/// as-is when present and stays `None` when upstream omitted it. Zero-valued
/// ratings and price levels are preserved, never treated as absent.
///
/// # Errors
/// - `PlaceSearchError::IncompleteRecord` - record lacks geometry, name or
///   address
pub fn normalize_record(raw: RawDetailRecord) -> Result<NormalizedPlace, PlaceSearchError> {
    let incomplete = |reason: &str| PlaceSearchError::IncompleteRecord {
        place_id: raw.place_id.clone(),
        reason: reason.to_string(),
    };

    let lat = raw.latitude.ok_or_else(|| incomplete("missing geometry"))?;
    let lng = raw.longitude.ok_or_else(|| incomplete("missing geometry"))?;
    let name = raw
        .name
        .clone()
        .ok_or_else(|| incomplete("missing name"))?;
    let address = raw
        .address
        .clone()
        .ok_or_else(|| incomplete("missing address"))?;

    Ok(NormalizedPlace {
        name,
        address,
        rating: raw.rating,
        review_count: raw.review_count,
        phone: raw.phone,
        international_phone: raw.international_phone,
        website: raw.website,
        opening_hours: raw.opening_hours,
        price_level: raw.price_level,
        categories: raw.categories,
        lat,
        lng,
        maps_url: maps_url(&raw.place_id),
    })
}
