use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{api::ErrorDto, artist::ArtistDetailDto, listing::ListingSummaryDto},
    server::{
        error::ApiError,
        model::app::AppState,
        service::{artist::ArtistService, listing::ListingService},
    },
};

pub static ARTIST_TAG: &str = "artist";

/// Get all artists with their upcoming show counts
#[utoipa::path(
    get,
    path = "/api/artists",
    tag = ARTIST_TAG,
    responses(
        (status = 200, description = "Artist summaries ordered by name", body = Vec<ListingSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artists(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let listing_service = ListingService::new(&state.db);

    let artists = listing_service.get_artists(Utc::now().naive_utc()).await?;

    Ok((StatusCode::OK, Json(artists)))
}

/// Get an artist's details with past & upcoming shows
#[utoipa::path(
    get,
    path = "/api/artists/{artist_id}",
    tag = ARTIST_TAG,
    params(
        ("artist_id" = i32, Path, description = "ID of the artist")
    ),
    responses(
        (status = 200, description = "Artist details", body = ArtistDetailDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let artist_service = ArtistService::new(&state.db);

    let artist = artist_service
        .get_detail(artist_id, Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(artist)))
}
