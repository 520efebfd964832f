//! Error types for the Fyyur server.
//!
//! [`Error`] is the single error type returned by services and page controllers. Its
//! `IntoResponse` implementation renders the HTML 404 and 500 pages; the JSON API wraps
//! it in [`ApiError`] to answer with an [`ErrorDto`] body instead.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::config::ConfigError,
    view::{
        pages::error::{NotFoundPage, ServerErrorPage},
        render_page,
    },
};

/// Main error type for the Fyyur server.
///
/// Uses `thiserror`'s `#[from]` conversions so `?` lifts database, session and
/// configuration errors into it.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A venue, artist or show with the requested ID does not exist.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// Internal error indicating a bug in Fyyur's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Renders the 404 page for missing records and the 500 page for everything else.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFound { .. } => {
                tracing::debug!("{}", self);

                not_found_page().into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// 404 response used both for missing records and unmatched routes.
pub fn not_found_page() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render_page(rsx! { NotFoundPage {} }))
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error but only shows the client a generic error page.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            render_page(rsx! { ServerErrorPage {} }),
        )
            .into_response()
    }
}

/// Error returned by the JSON API controllers.
///
/// # Returns
/// - 404 Not Found - For missing venues or artists
/// - 500 Internal Server Error - For all other errors (with error logging)
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err @ Error::NotFound { .. } => {
                tracing::debug!("{}", err);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
