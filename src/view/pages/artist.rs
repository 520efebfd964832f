use dioxus::prelude::*;

use crate::{
    model::{
        artist::ArtistDetailDto,
        flash::FlashMessage,
        form::{ArtistForm, FormErrors},
        listing::ListingSummaryDto,
    },
    view::components::{
        CheckboxField, GenreSelect, Layout, SearchForm, ShowList, StateSelect, SummaryList,
        TextField,
    },
};

#[component]
pub fn ArtistsPage(artists: Vec<ListingSummaryDto>, flashes: Vec<FlashMessage>) -> Element {
    rsx! {
        Layout {
            title: "Artists",
            flashes,
            SearchForm { action: "/artists/search", placeholder: "Find an artist" }
            if artists.is_empty() {
                p { "No artists have been listed yet." }
            } else {
                SummaryList { entries: artists, base_path: "/artists" }
            }
        }
    }
}

#[component]
pub fn ArtistDetailPage(artist: ArtistDetailDto, flashes: Vec<FlashMessage>) -> Element {
    rsx! {
        Layout {
            title: artist.name.clone(),
            flashes,
            div {
                class: "flex flex-col md:flex-row gap-6",
                div {
                    class: "flex-1",
                    p { class: "text-sm opacity-70", "ID: {artist.id}" }
                    h1 { class: "text-3xl font-bold", "{artist.name}" }
                    div {
                        class: "flex flex-wrap gap-2 my-2",
                        for genre in artist.genres.iter() {
                            span { class: "badge badge-outline", "{genre}" }
                        }
                    }
                    p { "{artist.city}, {artist.state}" }
                    if let Some(phone) = artist.phone.as_ref() {
                        p { "{phone}" }
                    }
                    if let Some(website) = artist.website.as_ref() {
                        p { a { class: "link", href: "{website}", "{website}" } }
                    }
                    if let Some(facebook_link) = artist.facebook_link.as_ref() {
                        p { a { class: "link", href: "{facebook_link}", "{facebook_link}" } }
                    }
                    if artist.seeking_venue {
                        div {
                            class: "alert mt-4",
                            p { "Currently seeking performance venues" }
                            if let Some(description) = artist.seeking_description.as_ref() {
                                p { "{description}" }
                            }
                        }
                    } else {
                        p { class: "mt-4 opacity-70", "Not currently seeking performance venues" }
                    }
                    div {
                        class: "flex gap-2 mt-4",
                        a { class: "btn btn-outline", href: "/artists/{artist.id}/edit", "Edit" }
                        form {
                            method: "post",
                            action: "/artists/{artist.id}/delete",
                            button { class: "btn btn-error", r#type: "submit", "Delete" }
                        }
                    }
                }
                div {
                    class: "flex-1",
                    img { class: "rounded-box", src: "{artist.image_link}", alt: "{artist.name}" }
                }
            }
            ShowList {
                heading: format!("{} Upcoming Shows", artist.upcoming_shows_count),
                shows: artist.upcoming_shows,
                counterpart_path: "/venues",
            }
            ShowList {
                heading: format!("{} Past Shows", artist.past_shows_count),
                shows: artist.past_shows,
                counterpart_path: "/venues",
            }
        }
    }
}

/// New & edit artist form, `artist_id` is `None` for a new artist.
#[component]
pub fn ArtistFormPage(
    artist_id: Option<i32>,
    form: ArtistForm,
    errors: FormErrors,
    flashes: Vec<FlashMessage>,
) -> Element {
    let (heading, action) = match artist_id {
        Some(id) => (format!("Edit artist {}", form.name), format!("/artists/{}/edit", id)),
        None => ("List a new artist".to_string(), "/artists/create".to_string()),
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
                    label: "Looking for venues",
                    name: "seeking_venue",
                    checked: form.seeking_venue.is_some(),
                }
                TextField {
                    label: "Seeking Description",
                    name: "seeking_description",
                    value: form.seeking_description,
                    errors,
                }
                button { class: "btn btn-primary", r#type: "submit", "Save artist" }
            }
        }
    }
}
