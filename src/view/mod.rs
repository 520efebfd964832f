//! Server-rendered HTML pages.
//!
//! Pages are dioxus components rendered to a string with `dioxus-ssr`; no client-side
//! runtime is shipped. Forms post back to the server and interactions are plain links.

pub mod components;
pub mod pages;

use axum::response::Html;
use chrono::NaiveDateTime;
use dioxus::prelude::*;

/// Render a page element into a complete HTML document.
pub fn render_page(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}

/// Format a show's start time the way listings display it, e.g. `Tue 05, 21, 2019 9:30PM`.
pub fn format_show_time(start_time: &NaiveDateTime) -> String {
    start_time.format("%a %m, %d, %Y %-I:%M%p").to_string()
}
