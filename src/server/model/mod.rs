//! Server-side application state and session data.

pub mod app;
pub mod session;
