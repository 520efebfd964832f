use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::server::error::not_found_page;

/// Numeric record ID taken from the route's single path parameter.
///
/// An ID that does not parse as an integer can't name a record, so it is answered with
/// the 404 page instead of axum's plain-text rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!("Rejected path {}: {}", parts.uri.path(), rejection);

                Err(not_found_page().into_response())
            }
        }
    }
}
