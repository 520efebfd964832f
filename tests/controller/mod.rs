//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with `State`, `Session`, `IdPath` and `Form` extractors
//! built from a [`TestContext`], then the response status, headers, body and the
//! database are checked.

mod api;
mod artist;
mod home;
mod show;
mod venue;

use axum::response::Response;
use fyyur::model::form::{ArtistForm, VenueForm};
use fyyur_test_utils::prelude::*;

/// Read a response body into a string
async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Redirect target of a response
fn location(response: &Response) -> &str {
    response
        .headers()
        .get(axum::http::header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

/// A venue submission that passes validation
fn venue_form(name: &str) -> VenueForm {
    VenueForm {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        image_link: "https://images.example.com/venue.jpg".to_string(),
        facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
        website: String::new(),
        seeking_talent: Some("y".to_string()),
        seeking_description: "We are on the lookout for a local artist".to_string(),
    }
}

/// An artist submission that passes validation
fn artist_form(name: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        image_link: "https://images.example.com/artist.jpg".to_string(),
        facebook_link: String::new(),
        website: String::new(),
        seeking_venue: None,
        seeking_description: String::new(),
    }
}
