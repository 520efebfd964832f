use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    model::{
        flash::FlashMessage,
        form::{FormErrors, VenueForm},
    },
    server::{
        controller::{deletion_flash, extract::IdPath, SearchParams},
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::{listing::ListingService, venue::VenueService, CommitOutcome},
    },
    view::{
        pages::{
            search::SearchResultsPage,
            venue::{VenueDetailPage, VenueFormPage, VenuesPage},
        },
        render_page,
    },
};

/// Venues grouped by city & state
pub async fn list_venues(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let areas = listing_service
        .get_venues_by_area(Utc::now().naive_utc())
        .await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! { VenuesPage { areas, flashes } }))
}

/// Case-insensitive search on venue names
pub async fn search_venues(
    State(state): State<AppState>,
    session: Session,
    Form(params): Form<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let results = listing_service
        .search_venues(params.search_term.trim(), Utc::now().naive_utc())
        .await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! {
        SearchResultsPage { results, base_path: "/venues", flashes }
    }))
}

/// Venue details with past & upcoming shows
///
/// # Responses
/// - 200 (OK): The venue page
/// - 404 (Not Found): No venue exists with the provided ID
pub async fn get_venue(
    State(state): State<AppState>,
    session: Session,
    IdPath(venue_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let venue_service = VenueService::new(&state.db);

    let venue = venue_service
        .get_detail(venue_id, Utc::now().naive_utc())
        .await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! { VenueDetailPage { venue, flashes } }))
}

pub async fn create_venue_form(session: Session) -> Result<impl IntoResponse, Error> {
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! {
        VenueFormPage {
            venue_id: None,
            form: VenueForm::default(),
            errors: FormErrors::default(),
            flashes,
        }
    }))
}

/// Validate & store a new venue, then redirect home with the outcome flashed
///
/// # Responses
/// - 303 (See Other): The venue was listed, or storing it failed
/// - 422 (Unprocessable Entity): The form is re-rendered with field errors
pub async fn create_venue_submission(
    State(state): State<AppState>,
    session: Session,
    axum_extra::extract::Form(form): axum_extra::extract::Form<VenueForm>,
) -> Result<Response, Error> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(invalid_form(None, form, errors)),
    };

    let venue_service = VenueService::new(&state.db);

    let flash = match venue_service.create(&input).await? {
        CommitOutcome::Committed(venue) => {
            FlashMessage::success(format!("Venue {} was successfully listed!", venue.name))
        }
        _ => FlashMessage::error(format!(
            "Error occurred! Venue {} was not listed.",
            input.name
        )),
    };
    SessionFlash::push(&session, flash).await?;

    Ok(Redirect::to("/").into_response())
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    session: Session,
    IdPath(venue_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let venue_service = VenueService::new(&state.db);

    let form = venue_service.get_form(venue_id).await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! {
        VenueFormPage {
            venue_id: Some(venue_id),
            form,
            errors: FormErrors::default(),
            flashes,
        }
    }))
}

/// Validate & apply a venue update, then redirect to the venue page
///
/// # Responses
/// - 303 (See Other): The venue was updated, or storing the update failed
/// - 404 (Not Found): No venue exists with the provided ID
/// - 422 (Unprocessable Entity): The form is re-rendered with field errors
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    session: Session,
    IdPath(venue_id): IdPath,
    axum_extra::extract::Form(form): axum_extra::extract::Form<VenueForm>,
) -> Result<Response, Error> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(invalid_form(Some(venue_id), form, errors)),
    };

    let venue_service = VenueService::new(&state.db);

    let flash = match venue_service.update(venue_id, &input).await? {
        CommitOutcome::Committed(venue) => {
            FlashMessage::success(format!("Venue {} was successfully updated!", venue.name))
        }
        _ => FlashMessage::error(format!(
            "Error occurred! Venue {} was not updated.",
            input.name
        )),
    };
    SessionFlash::push(&session, flash).await?;

    Ok(Redirect::to(&format!("/venues/{}", venue_id)).into_response())
}

/// Delete a venue & its shows, then redirect home
///
/// Served for both `DELETE /venues/{id}` and the HTML form's `POST /venues/{id}/delete`.
pub async fn delete_venue(
    State(state): State<AppState>,
    session: Session,
    IdPath(venue_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let venue_service = VenueService::new(&state.db);

    let (name, outcome) = venue_service.delete(venue_id).await?;
    SessionFlash::push(&session, deletion_flash("Venue", &name, &outcome)).await?;

    Ok(Redirect::to("/"))
}

fn invalid_form(venue_id: Option<i32>, form: VenueForm, errors: FormErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render_page(rsx! {
            VenueFormPage { venue_id, form, errors, flashes: Vec::new() }
        }),
    )
        .into_response()
}
