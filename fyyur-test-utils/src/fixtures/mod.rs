//! Database fixtures inserted while a test runs.
//!
//! Each helper inserts a record with fixed test values apart from the fields a test
//! usually cares about (names, area, show time), and returns the stored model.

use chrono::NaiveDateTime;
use entity::genres::Genres;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn fyyur<'a>(&'a self) -> FyyurFixtures<'a> {
        FyyurFixtures { context: self }
    }
}

pub struct FyyurFixtures<'a> {
    pub context: &'a TestContext,
}

impl<'a> FyyurFixtures<'a> {
    /// Insert an area with the provided city and state.
    pub async fn insert_mock_area(
        &self,
        city: &str,
        state: &str,
    ) -> Result<entity::area::Model, TestError> {
        let area = entity::area::ActiveModel {
            city: ActiveValue::Set(city.to_string()),
            state: ActiveValue::Set(state.to_string()),
            ..Default::default()
        };

        Ok(area.insert(&self.context.db).await?)
    }

    /// Insert a venue in the provided area.
    ///
    /// # Arguments
    /// - `name` - Venue name, the field searches and listings act on
    /// - `area_id` - ID of an existing area record
    pub async fn insert_mock_venue(
        &self,
        name: &str,
        area_id: i32,
    ) -> Result<entity::venue::Model, TestError> {
        let venue = entity::venue::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            area_id: ActiveValue::Set(area_id),
            genres: ActiveValue::Set(Genres(vec!["Jazz".to_string()])),
            address: ActiveValue::Set(Some("1015 Folsom Street".to_string())),
            phone: ActiveValue::Set(Some("123-123-1234".to_string())),
            website: ActiveValue::Set(None),
            facebook_link: ActiveValue::Set(None),
            image_link: ActiveValue::Set("https://images.example.com/venue.jpg".to_string()),
            seeking_talent: ActiveValue::Set(false),
            seeking_description: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(venue.insert(&self.context.db).await?)
    }

    /// Insert an artist in the provided area.
    pub async fn insert_mock_artist(
        &self,
        name: &str,
        area_id: i32,
    ) -> Result<entity::artist::Model, TestError> {
        let artist = entity::artist::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            area_id: ActiveValue::Set(area_id),
            genres: ActiveValue::Set(Genres(vec!["Rock n Roll".to_string()])),
            phone: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            facebook_link: ActiveValue::Set(None),
            image_link: ActiveValue::Set("https://images.example.com/artist.jpg".to_string()),
            seeking_venue: ActiveValue::Set(false),
            seeking_description: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(artist.insert(&self.context.db).await?)
    }

    /// Insert a show linking an existing artist and venue.
    pub async fn insert_mock_show(
        &self,
        artist_id: i32,
        venue_id: i32,
        start_time: NaiveDateTime,
    ) -> Result<entity::show::Model, TestError> {
        let show = entity::show::ActiveModel {
            artist_id: ActiveValue::Set(artist_id),
            venue_id: ActiveValue::Set(venue_id),
            start_time: ActiveValue::Set(start_time),
            ..Default::default()
        };

        Ok(show.insert(&self.context.db).await?)
    }
}
