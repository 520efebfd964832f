//! HTTP handlers.
//!
//! Page handlers render HTML with dioxus-ssr and surface mutation results as flash
//! messages on the page they redirect to. Handlers under [`api`] serve the read-only JSON
//! API documented with utoipa.

pub mod api;
pub mod artist;
pub mod extract;
pub mod home;
pub mod show;
pub mod venue;

use axum::response::IntoResponse;
use serde::Deserialize;

use crate::{
    model::flash::FlashMessage,
    server::{error::not_found_page, service::CommitOutcome},
};

/// Body of the venue & artist search forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub search_term: String,
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    not_found_page()
}

/// Flash reporting the deletion of the venue or artist named `name`.
pub(crate) fn deletion_flash(
    resource: &str,
    name: &str,
    outcome: &CommitOutcome<()>,
) -> FlashMessage {
    match outcome {
        CommitOutcome::Committed(()) => {
            FlashMessage::success(format!("{} {} was successfully deleted.", resource, name))
        }
        _ => FlashMessage::error(format!(
            "Error occurred! {} {} was not deleted.",
            resource, name
        )),
    }
}
