use dioxus::prelude::*;

use crate::{model::show::ShowListingDto, view::format_show_time};

/// Shows listed from one side, linking to the other party.
#[component]
pub fn ShowList(
    #[props(into)] heading: String,
    shows: Vec<ShowListingDto>,
    counterpart_path: &'static str,
) -> Element {
    rsx! {
        section {
            class: "mt-6",
            h2 { class: "text-xl font-semibold mb-2", "{heading}" }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                for show in shows {
                    div {
                        class: "card bg-base-200 shadow-sm",
                        figure {
                            img {
                                src: "{show.counterpart_image_link}",
                                alt: "{show.counterpart_name}",
                            }
                        }
                        div {
                            class: "card-body",
                            a {
                                class: "card-title link link-hover",
                                href: "{counterpart_path}/{show.counterpart_id}",
                                "{show.counterpart_name}"
                            }
                            p { class: "text-sm", {format_show_time(&show.start_time)} }
                        }
                    }
                }
            }
        }
    }
}
