use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A show as seen from its venue or artist.
///
/// The `counterpart_*` fields describe the other side of the show: the artist when
/// listed on a venue page, the venue when listed on an artist page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShowListingDto {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    pub start_time: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShowDto {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// An (id, name) pair offered as a choice in the show form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDto {
    pub id: i32,
    pub name: String,
}
