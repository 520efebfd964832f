use dioxus::prelude::*;

use crate::{
    model::{
        flash::FlashMessage,
        form::{FormErrors, ShowForm},
        show::{ChoiceDto, ShowDto},
    },
    view::{
        components::{FieldErrors, Layout, TextField},
        format_show_time,
    },
};

#[component]
pub fn ShowsPage(shows: Vec<ShowDto>, flashes: Vec<FlashMessage>) -> Element {
    rsx! {
        Layout {
            title: "Shows",
            flashes,
            h1 { class: "text-2xl font-semibold mb-4", "Shows" }
            if shows.is_empty() {
                p { "No shows have been listed yet." }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                for show in shows {
                    div {
                        class: "card bg-base-200 shadow-sm",
                        figure {
                            img { src: "{show.artist_image_link}", alt: "{show.artist_name}" }
                        }
                        div {
                            class: "card-body",
                            p { class: "text-sm", {format_show_time(&show.start_time)} }
                            a {
                                class: "card-title link link-hover",
                                href: "/artists/{show.artist_id}",
                                "{show.artist_name}"
                            }
                            p {
                                "playing at "
                                a { class: "link", href: "/venues/{show.venue_id}", "{show.venue_name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ShowFormPage(
    form: ShowForm,
    errors: FormErrors,
    artists: Vec<ChoiceDto>,
    venues: Vec<ChoiceDto>,
    flashes: Vec<FlashMessage>,
) -> Element {
    rsx! {
        Layout {
            title: "New Show",
            flashes,
            h1 { class: "text-2xl font-semibold mb-4", "List a new show" }
            form {
                class: "flex flex-col gap-3 max-w-xl",
                method: "post",
                action: "/shows/create",
                ChoiceSelect {
                    label: "Artist",
                    name: "artist_id",
                    choices: artists,
                    selected: form.artist_id,
                    errors: errors.clone(),
                }
                ChoiceSelect {
                    label: "Venue",
                    name: "venue_id",
                    choices: venues,
                    selected: form.venue_id,
                    errors: errors.clone(),
                }
                TextField {
                    label: "Start Time",
                    name: "start_time",
                    value: form.start_time,
                    errors,
                    placeholder: "YYYY-MM-DD HH:MM",
                }
                button { class: "btn btn-primary", r#type: "submit", "Create show" }
            }
        }
    }
}

#[component]
fn ChoiceSelect(
    label: &'static str,
    name: &'static str,
    choices: Vec<ChoiceDto>,
    selected: String,
    errors: FormErrors,
) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            span { class: "label-text", "{label}" }
            select {
                class: "select select-bordered w-full",
                name,
                id: name,
                option { value: "", disabled: true, selected: selected.is_empty(), "Select {label}" }
                for choice in choices {
                    option {
                        value: "{choice.id}",
                        selected: selected.trim() == choice.id.to_string(),
                        "{choice.name}"
                    }
                }
            }
            FieldErrors { errors, field: name }
        }
    }
}
