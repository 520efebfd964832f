use dioxus::prelude::*;

use crate::view::components::Layout;

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        Layout {
            title: "Not Found",
            flashes: Vec::new(),
            div {
                class: "text-center py-16",
                h1 { class: "text-4xl font-bold", "404" }
                p { class: "py-4", "The page you are looking for does not exist." }
                a { class: "btn btn-primary", href: "/", "Back home" }
            }
        }
    }
}

#[component]
pub fn ServerErrorPage() -> Element {
    rsx! {
        Layout {
            title: "Server Error",
            flashes: Vec::new(),
            div {
                class: "text-center py-16",
                h1 { class: "text-4xl font-bold", "500" }
                p { class: "py-4", "Something went wrong on our end, please try again later." }
                a { class: "btn btn-primary", href: "/", "Back home" }
            }
        }
    }
}
