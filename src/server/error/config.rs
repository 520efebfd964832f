use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors reading Fyyur's environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but can't be parsed, e.g. a malformed `BIND_ADDRESS`.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl ConfigError {
    /// Wraps the parse error of variable `var`.
    pub fn invalid(var: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
