use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use entity::genres::Genres;

use crate::{model::form::ArtistInput, server::data::name_contains};

pub struct ArtistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArtistRepository<'a, C> {
    /// Creates a new instance of [`ArtistRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        area_id: i32,
        input: &ArtistInput,
    ) -> Result<entity::artist::Model, DbErr> {
        let artist = entity::artist::ActiveModel {
            name: ActiveValue::Set(input.name.clone()),
            area_id: ActiveValue::Set(area_id),
            genres: ActiveValue::Set(Genres(input.genres.clone())),
            phone: ActiveValue::Set(input.phone.clone()),
            website: ActiveValue::Set(input.website.clone()),
            facebook_link: ActiveValue::Set(input.facebook_link.clone()),
            image_link: ActiveValue::Set(input.image_link.clone()),
            seeking_venue: ActiveValue::Set(input.seeking_venue),
            seeking_description: ActiveValue::Set(input.seeking_description.clone()),
            ..Default::default()
        };

        artist.insert(self.db).await
    }

    pub async fn get(
        &self,
        artist_id: i32,
    ) -> Result<Option<(entity::artist::Model, Option<entity::area::Model>)>, DbErr> {
        entity::prelude::Artist::find_by_id(artist_id)
            .find_also_related(entity::prelude::Area)
            .one(self.db)
            .await
    }

    /// Gets every artist ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::artist::Model>, DbErr> {
        entity::prelude::Artist::find()
            .order_by_asc(entity::artist::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_names(&self) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Artist::find()
            .select_only()
            .column(entity::artist::Column::Id)
            .column(entity::artist::Column::Name)
            .order_by_asc(entity::artist::Column::Name)
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Finds artists whose name contains `term`, ignoring case
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<entity::artist::Model>, DbErr> {
        entity::prelude::Artist::find()
            .filter(name_contains(
                (entity::artist::Entity, entity::artist::Column::Name),
                term,
            ))
            .order_by_asc(entity::artist::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        artist_id: i32,
        area_id: i32,
        input: &ArtistInput,
    ) -> Result<Option<entity::artist::Model>, DbErr> {
        let artist = match entity::prelude::Artist::find_by_id(artist_id)
            .one(self.db)
            .await?
        {
            Some(artist) => artist,
            None => return Ok(None),
        };

        let mut artist_am = artist.into_active_model();
        artist_am.name = ActiveValue::Set(input.name.clone());
        artist_am.area_id = ActiveValue::Set(area_id);
        artist_am.genres = ActiveValue::Set(Genres(input.genres.clone()));
        artist_am.phone = ActiveValue::Set(input.phone.clone());
        artist_am.website = ActiveValue::Set(input.website.clone());
        artist_am.facebook_link = ActiveValue::Set(input.facebook_link.clone());
        artist_am.image_link = ActiveValue::Set(input.image_link.clone());
        artist_am.seeking_venue = ActiveValue::Set(input.seeking_venue);
        artist_am.seeking_description = ActiveValue::Set(input.seeking_description.clone());

        let artist = artist_am.update(self.db).await?;

        Ok(Some(artist))
    }

    /// Deletes an artist
    ///
    /// Check [`DeleteResult::rows_affected`] to confirm the artist existed.
    pub async fn delete(&self, artist_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Artist::delete_by_id(artist_id)
            .exec(self.db)
            .await
    }
}
