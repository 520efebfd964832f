use dioxus::prelude::*;

use crate::model::{form::FormErrors, genre::Genre, state::UsState};

/// Messages recorded against a single form field.
#[component]
pub fn FieldErrors(errors: FormErrors, field: &'static str) -> Element {
    rsx! {
        for message in errors.for_field(field) {
            p { class: "text-error text-sm", "{message}" }
        }
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    #[props(into)] value: String,
    errors: FormErrors,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered w-full",
                r#type: input_type,
                name,
                id: name,
                value,
                placeholder,
            }
            FieldErrors { errors, field: name }
        }
    }
}

#[component]
pub fn StateSelect(selected: String, errors: FormErrors) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            span { class: "label-text", "State" }
            select {
                class: "select select-bordered w-full",
                name: "state",
                id: "state",
                for state in UsState::all() {
                    option {
                        value: state.as_str(),
                        selected: selected == state.as_str(),
                        "{state}"
                    }
                }
            }
            FieldErrors { errors, field: "state" }
        }
    }
}

#[component]
pub fn GenreSelect(selected: Vec<String>, errors: FormErrors) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            span { class: "label-text", "Genres" }
            select {
                class: "select select-bordered w-full h-48",
                name: "genres",
                id: "genres",
                multiple: true,
                for genre in Genre::ALL {
                    option {
                        value: genre.as_str(),
                        selected: selected.iter().any(|g| g == genre.as_str()),
                        "{genre}"
                    }
                }
            }
            FieldErrors { errors, field: "genres" }
        }
    }
}

#[component]
pub fn CheckboxField(label: &'static str, name: &'static str, checked: bool) -> Element {
    rsx! {
        label {
            class: "label cursor-pointer justify-start gap-2",
            input {
                class: "checkbox",
                r#type: "checkbox",
                name,
                id: name,
                value: "y",
                checked,
            }
            span { class: "label-text", "{label}" }
        }
    }
}
