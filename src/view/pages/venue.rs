use dioxus::prelude::*;

use crate::{
    model::{
        flash::FlashMessage,
        form::{FormErrors, VenueForm},
        listing::AreaVenuesDto,
        venue::VenueDetailDto,
    },
    view::components::{
        CheckboxField, GenreSelect, Layout, SearchForm, ShowList, StateSelect, SummaryList,
        TextField,
    },
};

#[component]
pub fn VenuesPage(areas: Vec<AreaVenuesDto>, flashes: Vec<FlashMessage>) -> Element {
    rsx! {
        Layout {
            title: "Venues",
            flashes,
            SearchForm { action: "/venues/search", placeholder: "Find a venue" }
            if areas.is_empty() {
                p { "No venues have been listed yet." }
            }
            for area in areas {
                section {
                    class: "mb-6",
                    h2 { class: "text-xl font-semibold mb-2", "{area.city}, {area.state}" }
                    SummaryList { entries: area.venues, base_path: "/venues" }
                }
            }
        }
    }
}

#[component]
pub fn VenueDetailPage(venue: VenueDetailDto, flashes: Vec<FlashMessage>) -> Element {
    let location = format!("{}, {}", venue.city, venue.state);

    rsx! {
        Layout {
            title: venue.name.clone(),
            flashes,
            div {
                class: "flex flex-col md:flex-row gap-6",
                div {
                    class: "flex-1",
                    p { class: "text-sm opacity-70", "ID: {venue.id}" }
                    h1 { class: "text-3xl font-bold", "{venue.name}" }
                    div {
                        class: "flex flex-wrap gap-2 my-2",
                        for genre in venue.genres.iter() {
                            span { class: "badge badge-outline", "{genre}" }
                        }
                    }
                    if let Some(address) = venue.address.as_ref() {
                        p { "{address}" }
                    }
                    p { "{location}" }
                    if let Some(phone) = venue.phone.as_ref() {
                        p { "{phone}" }
                    }
                    if let Some(website) = venue.website.as_ref() {
                        p { a { class: "link", href: "{website}", "{website}" } }
                    }
                    if let Some(facebook_link) = venue.facebook_link.as_ref() {
                        p { a { class: "link", href: "{facebook_link}", "{facebook_link}" } }
                    }
                    if venue.seeking_talent {
                        div {
                            class: "alert mt-4",
                            p { "Currently seeking talent" }
                            if let Some(description) = venue.seeking_description.as_ref() {
                                p { "{description}" }
                            }
                        }
                    } else {
                        p { class: "mt-4 opacity-70", "Not currently seeking talent" }
                    }
                    div {
                        class: "flex gap-2 mt-4",
                        a { class: "btn btn-outline", href: "/venues/{venue.id}/edit", "Edit" }
                        form {
                            method: "post",
                            action: "/venues/{venue.id}/delete",
                            button { class: "btn btn-error", r#type: "submit", "Delete" }
                        }
                    }
                }
                div {
                    class: "flex-1",
                    img { class: "rounded-box", src: "{venue.image_link}", alt: "{venue.name}" }
                }
            }
            ShowList {
                heading: format!("{} Upcoming Shows", venue.upcoming_shows_count),
                shows: venue.upcoming_shows,
                counterpart_path: "/artists",
            }
            ShowList {
                heading: format!("{} Past Shows", venue.past_shows_count),
                shows: venue.past_shows,
                counterpart_path: "/artists",
            }
        }
    }
}

/// New & edit venue form.
///
/// `venue_id` is `None` when listing a new venue.
#[component]
pub fn VenueFormPage(
    venue_id: Option<i32>,
    form: VenueForm,
    errors: FormErrors,
    flashes: Vec<FlashMessage>,
) -> Element {
    let (heading, action) = match venue_id {
        Some(id) => (format!("Edit venue {}", form.name), format!("/venues/{}/edit", id)),
        None => ("List a new venue".to_string(), "/venues/create".to_string()),
    };

    rsx! {
        Layout {
            title: heading.clone(),
            flashes,
            h1 { class: "text-2xl font-semibold mb-4", "{heading}" }
            form {
                class: "flex flex-col gap-3 max-w-xl",
                method: "post",
                action,
                TextField { label: "Name", name: "name", value: form.name, errors: errors.clone() }
                TextField { label: "City", name: "city", value: form.city, errors: errors.clone() }
                StateSelect { selected: form.state, errors: errors.clone() }
                TextField { label: "Address", name: "address", value: form.address, errors: errors.clone() }
                TextField {
                    label: "Phone",
                    name: "phone",
                    value: form.phone,
                    errors: errors.clone(),
                    input_type: "tel",
                    placeholder: "xxx-xxx-xxxx",
                }
                GenreSelect { selected: form.genres, errors: errors.clone() }
                TextField {
                    label: "Image Link",
                    name: "image_link",
                    value: form.image_link,
                    errors: errors.clone(),
                    input_type: "url",
                    placeholder: "https://",
                }
                TextField {
                    label: "Facebook Link",
                    name: "facebook_link",
                    value: form.facebook_link,
                    errors: errors.clone(),
                    input_type: "url",
                    placeholder: "https://",
                }
                TextField {
                    label: "Website",
                    name: "website",
                    value: form.website,
                    errors: errors.clone(),
                    input_type: "url",
                    placeholder: "https://",
                }
                CheckboxField {
                    label: "Looking for talent",
                    name: "seeking_talent",
                    checked: form.seeking_talent.is_some(),
                }
                TextField {
                    label: "Seeking Description",
                    name: "seeking_description",
                    value: form.seeking_description,
                    errors,
                }
                button { class: "btn btn-primary", r#type: "submit", "Save venue" }
            }
        }
    }
}
