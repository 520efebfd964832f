use serde::{Deserialize, Serialize};

use crate::model::show::ShowListingDto;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtistDetailDto {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<ShowListingDto>,
    pub upcoming_shows: Vec<ShowListingDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
