//! Data models shared between the HTTP controllers and the rendered views.
//!
//! DTOs in this module are serializable for the JSON API and implement `Clone` +
//! `PartialEq` so they can be passed as component props when rendering pages.

pub mod api;
pub mod artist;
pub mod flash;
pub mod form;
pub mod genre;
pub mod listing;
pub mod show;
pub mod state;
pub mod venue;
