//! Submitted HTML forms and their validation.
//!
//! Each form keeps the raw submitted strings so an invalid submission can be
//! re-rendered with the user's input intact. `validate` turns a form into the typed
//! input consumed by the services, or a list of field-level errors.

mod artist;
mod show;
mod venue;

pub use artist::{ArtistForm, ArtistInput};
pub use show::{ShowForm, ShowInput};
pub use venue::{VenueForm, VenueInput};

use url::Url;

use crate::model::{genre::Genre, state::UsState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level validation failures for a single submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`, in submission order.
    pub fn for_field(&self, field: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message.clone())
            .collect()
    }

    /// Returns `Ok(value)` when no errors were recorded.
    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Interprets a checkbox or yes/no select value.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some("y" | "on" | "true" | "True" | "1"))
}

pub(crate) fn required_length(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> String {
    let value = value.trim();
    let len = value.chars().count();

    if len == 0 {
        errors.push(field, "This field is required.");
    } else if len < min || len > max {
        errors.push(
            field,
            format!("Field must be between {} and {} characters long.", min, max),
        );
    }

    value.to_string()
}

pub(crate) fn optional_length(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let len = value.chars().count();
    match max {
        Some(max) if len < min || len > max => errors.push(
            field,
            format!("Field must be between {} and {} characters long.", min, max),
        ),
        None if len < min => errors.push(
            field,
            format!("Field must be at least {} characters long.", min),
        ),
        _ => {}
    }

    Some(value.to_string())
}

pub(crate) fn check_url(errors: &mut FormErrors, field: &'static str, value: &str) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(field, "Invalid URL."),
    }
}

pub(crate) fn required_url(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
    max: usize,
) -> String {
    let value = required_length(errors, field, value, 10, max);
    if !value.is_empty() {
        check_url(errors, field, &value);
    }
    value
}

pub(crate) fn optional_url(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
    max: usize,
) -> Option<String> {
    let value = optional_length(errors, field, value, 10, Some(max))?;
    check_url(errors, field, &value);
    Some(value)
}

pub(crate) fn us_state(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, "This field is required.");
    } else if value.parse::<UsState>().is_err() {
        errors.push(field, "Not a valid choice.");
    }
    value.to_string()
}

pub(crate) fn genres(errors: &mut FormErrors, field: &'static str, values: &[String]) -> Vec<String> {
    if values.is_empty() {
        errors.push(field, "Select at least one genre.");
    }

    for value in values {
        if value.parse::<Genre>().is_err() {
            errors.push(field, format!("'{}' is not a valid choice.", value));
        }
    }

    values.to_vec()
}
