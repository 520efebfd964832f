use axum::response::IntoResponse;
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    server::{error::Error, model::session::flash::SessionFlash},
    view::{pages::home::HomePage, render_page},
};

/// Home page
pub async fn index(session: Session) -> Result<impl IntoResponse, Error> {
    let flashes = SessionFlash::take(&session).await?;

    Ok(render_page(rsx! { HomePage { flashes } }))
}
