use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, show::ShowDto},
    server::{error::ApiError, model::app::AppState, service::show::ShowService},
};

pub static SHOW_TAG: &str = "show";

/// Get every show with its venue & artist
#[utoipa::path(
    get,
    path = "/api/shows",
    tag = SHOW_TAG,
    responses(
        (status = 200, description = "All shows ordered by ID", body = Vec<ShowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shows(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let show_service = ShowService::new(&state.db);

    let shows = show_service.get_all().await?;

    Ok((StatusCode::OK, Json(shows)))
}
