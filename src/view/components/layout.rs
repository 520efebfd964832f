use dioxus::prelude::*;

use crate::model::flash::{FlashLevel, FlashMessage};

/// Page shell with the document head, navbar, and queued flash messages.
#[component]
pub fn Layout(#[props(into)] title: String, flashes: Vec<FlashMessage>, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Fyyur | {title}" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/daisyui@5",
            }
            script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        }
        body {
            class: "min-h-screen bg-base-100",
            Navbar {}
            main {
                class: "container mx-auto p-4",
                FlashList { flashes }
                {children}
            }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                a { class: "text-xl font-semibold", href: "/", "Fyyur" }
            }
            div {
                class: "navbar-center gap-4",
                a { class: "link link-hover", href: "/venues", "Venues" }
                a { class: "link link-hover", href: "/artists", "Artists" }
                a { class: "link link-hover", href: "/shows", "Shows" }
            }
            div {
                class: "navbar-end gap-2",
                a { class: "btn btn-sm btn-outline", href: "/venues/create", "Post a venue" }
                a { class: "btn btn-sm btn-outline", href: "/artists/create", "Post an artist" }
                a { class: "btn btn-sm btn-primary", href: "/shows/create", "Post a show" }
            }
        }
    }
}

#[component]
pub fn FlashList(flashes: Vec<FlashMessage>) -> Element {
    if flashes.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex flex-col gap-2 mb-4",
            for flash in flashes {
                div {
                    class: match flash.level {
                        FlashLevel::Success => "alert alert-success",
                        FlashLevel::Error => "alert alert-error",
                    },
                    role: "alert",
                    "{flash.message}"
                }
            }
        }
    }
}
