use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    model::{
        flash::FlashMessage,
        form::{FormErrors, ShowForm},
    },
    server::{
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::{show::ShowService, CommitOutcome},
    },
    view::{
        pages::show::{ShowFormPage, ShowsPage},
        render_page,
    },
};

/// Every show with its venue & artist
pub async fn list_shows(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let show_service = ShowService::new(&state.db);

    let shows = show_service.get_all().await?;
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! { ShowsPage { shows, flashes } }))
}

pub async fn create_show_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let flashes = SessionFlash::take(&session).await?;

    render_form(&state, ShowForm::default(), FormErrors::default(), flashes).await
}

/// Validate & store a new show, then redirect home with the outcome flashed
///
/// # Responses
/// - 303 (See Other): The show was listed, or storing it failed
/// - 422 (Unprocessable Entity): The form is re-rendered with field errors, including
///   references to an artist or venue that does not exist
pub async fn create_show_submission(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ShowForm>,
) -> Result<Response, Error> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return render_form(&state, form, errors, Vec::new()).await,
    };

    let show_service = ShowService::new(&state.db);

    let flash = match show_service.create(&input).await? {
        CommitOutcome::Committed(_) => FlashMessage::success("Show was successfully listed!"),
        CommitOutcome::Rejected(errors) => {
            return render_form(&state, form, errors, Vec::new()).await
        }
        CommitOutcome::RolledBack => FlashMessage::error("Error occurred! Show was not listed."),
    };
    SessionFlash::push(&session, flash).await?;

    Ok(Redirect::to("/").into_response())
}

async fn render_form(
    state: &AppState,
    form: ShowForm,
    errors: FormErrors,
    flashes: Vec<FlashMessage>,
) -> Result<Response, Error> {
    let show_service = ShowService::new(&state.db);

    let choices = show_service.get_choices().await?;
    let status = if errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((
        status,
        render_page(rsx! {
            ShowFormPage {
                form,
                errors,
                artists: choices.artists,
                venues: choices.venues,
                flashes,
            }
        }),
    )
        .into_response())
}
