use dioxus::prelude::*;

use crate::{
    model::{flash::FlashMessage, listing::SearchResultsDto},
    view::components::{Layout, SearchForm, SummaryList},
};

/// Search results for venues (`base_path = "/venues"`) or artists (`"/artists"`).
#[component]
pub fn SearchResultsPage(
    results: SearchResultsDto,
    base_path: &'static str,
    flashes: Vec<FlashMessage>,
) -> Element {
    let action = if base_path == "/venues" {
        "/venues/search"
    } else {
        "/artists/search"
    };

    rsx! {
        Layout {
            title: "Search",
            flashes,
            SearchForm { action, placeholder: "Find again" }
            h1 {
                class: "text-2xl font-semibold mb-4",
                "Number of search results for \"{results.search_term}\": {results.count}"
            }
            SummaryList { entries: results.data, base_path }
        }
    }
}
