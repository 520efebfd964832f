use dioxus::prelude::*;

use crate::model::listing::ListingSummaryDto;

/// Linked names with their upcoming show count.
#[component]
pub fn SummaryList(entries: Vec<ListingSummaryDto>, base_path: &'static str) -> Element {
    rsx! {
        ul {
            class: "list bg-base-200 rounded-box",
            for entry in entries {
                li {
                    class: "list-row",
                    a {
                        class: "link link-hover",
                        href: "{base_path}/{entry.id}",
                        div { class: "font-semibold", "{entry.name}" }
                    }
                    div {
                        class: "text-sm opacity-70",
                        "{entry.num_upcoming_shows} upcoming shows"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SearchForm(action: &'static str, placeholder: &'static str) -> Element {
    rsx! {
        form {
            class: "join mb-4",
            method: "post",
            action,
            input {
                class: "input input-bordered join-item",
                r#type: "search",
                name: "search_term",
                placeholder,
            }
            button { class: "btn join-item", r#type: "submit", "Search" }
        }
    }
}
