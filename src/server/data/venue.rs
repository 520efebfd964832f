use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use entity::genres::Genres;

use crate::{model::form::VenueInput, server::data::name_contains};

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    /// Creates a new instance of [`VenueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new venue in the provided area
    pub async fn create(
        &self,
        area_id: i32,
        input: &VenueInput,
    ) -> Result<entity::venue::Model, DbErr> {
        let venue = entity::venue::ActiveModel {
            name: ActiveValue::Set(input.name.clone()),
            area_id: ActiveValue::Set(area_id),
            genres: ActiveValue::Set(Genres(input.genres.clone())),
            address: ActiveValue::Set(Some(input.address.clone())),
            phone: ActiveValue::Set(input.phone.clone()),
            website: ActiveValue::Set(input.website.clone()),
            facebook_link: ActiveValue::Set(input.facebook_link.clone()),
            image_link: ActiveValue::Set(input.image_link.clone()),
            seeking_talent: ActiveValue::Set(input.seeking_talent),
            seeking_description: ActiveValue::Set(input.seeking_description.clone()),
            ..Default::default()
        };

        venue.insert(self.db).await
    }

    /// Gets a venue along with its area
    pub async fn get(
        &self,
        venue_id: i32,
    ) -> Result<Option<(entity::venue::Model, Option<entity::area::Model>)>, DbErr> {
        entity::prelude::Venue::find_by_id(venue_id)
            .find_also_related(entity::prelude::Area)
            .one(self.db)
            .await
    }

    /// Gets every venue ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::venue::Model>, DbErr> {
        entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the ID & name of every venue ordered by name
    pub async fn get_names(&self) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Venue::find()
            .select_only()
            .column(entity::venue::Column::Id)
            .column(entity::venue::Column::Name)
            .order_by_asc(entity::venue::Column::Name)
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Finds venues whose name contains `term`, ignoring case
    ///
    /// An empty term matches every venue. Results are ordered by name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<entity::venue::Model>, DbErr> {
        entity::prelude::Venue::find()
            .filter(name_contains(
                (entity::venue::Entity, entity::venue::Column::Name),
                term,
            ))
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces every editable field of a venue
    ///
    /// # Returns
    /// - `Some(Model)` with the updated venue
    /// - `None` if the venue does not exist
    pub async fn update(
        &self,
        venue_id: i32,
        area_id: i32,
        input: &VenueInput,
    ) -> Result<Option<entity::venue::Model>, DbErr> {
        let venue = match entity::prelude::Venue::find_by_id(venue_id)
            .one(self.db)
            .await?
        {
            Some(venue) => venue,
            None => return Ok(None),
        };

        let mut venue_am = venue.into_active_model();
        venue_am.name = ActiveValue::Set(input.name.clone());
        venue_am.area_id = ActiveValue::Set(area_id);
        venue_am.genres = ActiveValue::Set(Genres(input.genres.clone()));
        venue_am.address = ActiveValue::Set(Some(input.address.clone()));
        venue_am.phone = ActiveValue::Set(input.phone.clone());
        venue_am.website = ActiveValue::Set(input.website.clone());
        venue_am.facebook_link = ActiveValue::Set(input.facebook_link.clone());
        venue_am.image_link = ActiveValue::Set(input.image_link.clone());
        venue_am.seeking_talent = ActiveValue::Set(input.seeking_talent);
        venue_am.seeking_description = ActiveValue::Set(input.seeking_description.clone());

        let venue = venue_am.update(self.db).await?;

        Ok(Some(venue))
    }

    /// Deletes a venue
    ///
    /// Returns OK regardless of the venue existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, venue_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Venue::delete_by_id(venue_id)
            .exec(self.db)
            .await
    }
}
