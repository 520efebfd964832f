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
        form::{ArtistForm, FormErrors},
    },
    server::{
        controller::{deletion_flash, extract::IdPath, SearchParams},
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::{artist::ArtistService, listing::ListingService, CommitOutcome},
    },
    view::{
        pages::{
            artist::{ArtistDetailPage, ArtistFormPage, ArtistsPage},
            search::SearchResultsPage,
        },
        render_page,
    },
};

/// Every artist by name
pub async fn list_artists(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let artists = listing_service.get_artists(Utc::now().naive_utc()).await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! { ArtistsPage { artists, flashes } }))
}

/// Case-insensitive search on artist names
pub async fn search_artists(
    State(state): State<AppState>,
    session: Session,
    Form(params): Form<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let results = listing_service
        .search_artists(params.search_term.trim(), Utc::now().naive_utc())
        .await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! {
        SearchResultsPage { results, base_path: "/artists", flashes }
    }))
}

/// Artist details with past & upcoming shows
///
/// # Responses
/// - 200 (OK): The artist page
/// - 404 (Not Found): No artist exists with the provided ID
pub async fn get_artist(
    State(state): State<AppState>,
    session: Session,
    IdPath(artist_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let artist_service = ArtistService::new(&state.db);

    let artist = artist_service
        .get_detail(artist_id, Utc::now().naive_utc())
        .await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! { ArtistDetailPage { artist, flashes } }))
}

pub async fn create_artist_form(session: Session) -> Result<impl IntoResponse, Error> {
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! {
        ArtistFormPage {
            artist_id: None,
            form: ArtistForm::default(),
            errors: FormErrors::default(),
            flashes,
        }
    }))
}

/// Validate & store a new artist, then redirect home with the outcome flashed
///
/// # Responses
/// - 303 (See Other): The artist was listed, or storing it failed
/// - 422 (Unprocessable Entity): The form is re-rendered with field errors
pub async fn create_artist_submission(
    State(state): State<AppState>,
    session: Session,
    axum_extra::extract::Form(form): axum_extra::extract::Form<ArtistForm>,
) -> Result<Response, Error> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(invalid_form(None, form, errors)),
    };

    let artist_service = ArtistService::new(&state.db);

    let flash = match artist_service.create(&input).await? {
        CommitOutcome::Committed(artist) => {
            FlashMessage::success(format!("Artist {} was successfully listed!", artist.name))
        }
        _ => FlashMessage::error(format!(
            "Error occurred! Artist {} was not listed.",
            input.name
        )),
    };
    SessionFlash::push(&session, flash).await?;

    Ok(Redirect::to("/").into_response())
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    session: Session,
    IdPath(artist_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let artist_service = ArtistService::new(&state.db);

    let form = artist_service.get_form(artist_id).await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! {
        ArtistFormPage {
            artist_id: Some(artist_id),
            form,
            errors: FormErrors::default(),
            flashes,
        }
    }))
}

/// Validate & apply an artist update, then redirect to the artist page
///
/// # Responses
/// - 303 (See Other): The artist was updated, or storing the update failed
/// - 404 (Not Found): No artist exists with the provided ID
/// - 422 (Unprocessable Entity): The form is re-rendered with field errors
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    session: Session,
    IdPath(artist_id): IdPath,
    axum_extra::extract::Form(form): axum_extra::extract::Form<ArtistForm>,
) -> Result<Response, Error> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(invalid_form(Some(artist_id), form, errors)),
    };

    let artist_service = ArtistService::new(&state.db);

    let flash = match artist_service.update(artist_id, &input).await? {
        CommitOutcome::Committed(artist) => {
            FlashMessage::success(format!("Artist {} was successfully updated!", artist.name))
        }
        _ => FlashMessage::error(format!(
            "Error occurred! Artist {} was not updated.",
            input.name
        )),
    };
    SessionFlash::push(&session, flash).await?;

    Ok(Redirect::to(&format!("/artists/{}", artist_id)).into_response())
}

/// Delete an artist & their shows, then redirect home
///
/// Served for both `DELETE /artists/{id}` and the HTML form's `POST /artists/{id}/delete`.
pub async fn delete_artist(
    State(state): State<AppState>,
    session: Session,
    IdPath(artist_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let artist_service = ArtistService::new(&state.db);

    let (name, outcome) = artist_service.delete(artist_id).await?;
    SessionFlash::push(&session, deletion_flash("Artist", &name, &outcome)).await?;

    Ok(Redirect::to("/"))
}

fn invalid_form(artist_id: Option<i32>, form: ArtistForm, errors: FormErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render_page(rsx! {
            ArtistFormPage { artist_id, form, errors, flashes: Vec::new() }
        }),
    )
        .into_response()
}
