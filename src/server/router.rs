//! HTTP routing and OpenAPI documentation configuration.
//!
//! HTML pages are registered on a plain axum router. The read-only JSON API is registered
//! through utoipa so its OpenAPI document is collected alongside it, and Swagger UI serves
//! that document at `/api/docs`.

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with pages, API endpoints and Swagger UI.
///
/// Unmatched paths fall back to the 404 page.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    pages().merge(api()).fallback(controller::not_found)
}

fn pages() -> Router<AppState> {
    use controller::{artist, home, show, venue};

    Router::new()
        .route("/", get(home::index))
        .route("/venues", get(venue::list_venues))
        .route("/venues/search", post(venue::search_venues))
        .route(
            "/venues/create",
            get(venue::create_venue_form).post(venue::create_venue_submission),
        )
        .route(
            "/venues/{venue_id}",
            get(venue::get_venue).delete(venue::delete_venue),
        )
        .route("/venues/{venue_id}/delete", post(venue::delete_venue))
        .route(
            "/venues/{venue_id}/edit",
            get(venue::edit_venue_form).post(venue::edit_venue_submission),
        )
        .route("/artists", get(artist::list_artists))
        .route("/artists/search", post(artist::search_artists))
        .route(
            "/artists/create",
            get(artist::create_artist_form).post(artist::create_artist_submission),
        )
        .route(
            "/artists/{artist_id}",
            get(artist::get_artist).delete(artist::delete_artist),
        )
        .route("/artists/{artist_id}/delete", post(artist::delete_artist))
        .route(
            "/artists/{artist_id}/edit",
            get(artist::edit_artist_form).post(artist::edit_artist_submission),
        )
        .route("/shows", get(show::list_shows))
        .route(
            "/shows/create",
            get(show::create_show_form).post(show::create_show_submission),
        )
}

fn api() -> Router<AppState> {
    use controller::api::{artist, show, venue};

    #[derive(OpenApi)]
    #[openapi(info(title = "Fyyur", description = "Fyyur API"), tags(
        (name = venue::VENUE_TAG, description = "Venue API routes"),
        (name = artist::ARTIST_TAG, description = "Artist API routes"),
        (name = show::SHOW_TAG, description = "Show API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(venue::get_venues))
        .routes(routes!(venue::get_venue))
        .routes(routes!(artist::get_artists))
        .routes(routes!(artist::get_artist))
        .routes(routes!(show::get_shows))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
