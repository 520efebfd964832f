use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{api::ErrorDto, listing::AreaVenuesDto, venue::VenueDetailDto},
    server::{
        error::ApiError,
        model::app::AppState,
        service::{listing::ListingService, venue::VenueService},
    },
};

pub static VENUE_TAG: &str = "venue";

/// Get all venues grouped by city & state
#[utoipa::path(
    get,
    path = "/api/venues",
    tag = VENUE_TAG,
    responses(
        (status = 200, description = "Venues grouped by area with upcoming show counts", body = Vec<AreaVenuesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venues(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let listing_service = ListingService::new(&state.db);

    let areas = listing_service
        .get_venues_by_area(Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(areas)))
}

/// Get a venue's details with past & upcoming shows
#[utoipa::path(
    get,
    path = "/api/venues/{venue_id}",
    tag = VENUE_TAG,
    params(
        ("venue_id" = i32, Path, description = "ID of the venue")
    ),
    responses(
        (status = 200, description = "Venue details", body = VenueDetailDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let venue_service = VenueService::new(&state.db);

    let venue = venue_service
        .get_detail(venue_id, Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(venue)))
}
