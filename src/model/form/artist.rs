use serde::{Deserialize, Serialize};

use super::{
    genres, optional_length, optional_url, parse_flag, required_length, required_url, us_state,
    FormErrors,
};

/// Raw artist form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistInput, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required_length(&mut errors, "name", &self.name, 1, 120);
        let city = required_length(&mut errors, "city", &self.city, 2, 120);
        let state = us_state(&mut errors, "state", &self.state);
        let phone = optional_length(&mut errors, "phone", &self.phone, 10, Some(20));
        let genres = genres(&mut errors, "genres", &self.genres);
        let image_link = required_url(&mut errors, "image_link", &self.image_link, 500);
        let facebook_link = optional_url(&mut errors, "facebook_link", &self.facebook_link, 120);
        let website = optional_url(&mut errors, "website", &self.website, 120);
        let seeking_description = optional_length(
            &mut errors,
            "seeking_description",
            &self.seeking_description,
            10,
            None,
        );

        errors.into_result(|| ArtistInput {
            name,
            city,
            state,
            phone,
            genres,
            image_link,
            facebook_link,
            website,
            seeking_venue: parse_flag(self.seeking_venue.as_deref()),
            seeking_description,
        })
    }
}

impl From<ArtistInput> for ArtistForm {
    fn from(input: ArtistInput) -> Self {
        Self {
            name: input.name,
            city: input.city,
            state: input.state,
            phone: input.phone.unwrap_or_default(),
            genres: input.genres,
            image_link: input.image_link,
            facebook_link: input.facebook_link.unwrap_or_default(),
            website: input.website.unwrap_or_default(),
            seeking_venue: input.seeking_venue.then(|| "y".to_string()),
            seeking_description: input.seeking_description.unwrap_or_default(),
        }
    }
}
