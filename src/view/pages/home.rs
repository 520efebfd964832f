use dioxus::prelude::*;

use crate::{model::flash::FlashMessage, view::components::Layout};

#[component]
pub fn HomePage(flashes: Vec<FlashMessage>) -> Element {
    rsx! {
        Layout {
            title: "Home",
            flashes,
            div {
                class: "hero min-h-[50vh]",
                div {
                    class: "hero-content text-center",
                    div {
                        class: "max-w-md",
                        h1 { class: "text-5xl font-bold", "Fyyur" }
                        p { class: "py-6", "Find venues, artists and the shows connecting them." }
                        div {
                            class: "flex flex-wrap gap-2 justify-center",
                            a { class: "btn btn-primary", href: "/venues", "Find a venue" }
                            a { class: "btn btn-primary", href: "/artists", "Find an artist" }
                            a { class: "btn btn-outline", href: "/shows/create", "Post a show" }
                        }
                    }
                }
            }
        }
    }
}
