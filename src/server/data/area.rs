use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct AreaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AreaRepository<'a, C> {
    /// Creates a new instance of [`AreaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new area
    pub async fn create(&self, city: &str, state: &str) -> Result<entity::area::Model, DbErr> {
        let area = entity::area::ActiveModel {
            city: ActiveValue::Set(city.to_string()),
            state: ActiveValue::Set(state.to_string()),
            ..Default::default()
        };

        area.insert(self.db).await
    }

    /// Finds the area exactly matching `city` and `state`
    ///
    /// Matching is case-sensitive. Should duplicates exist, the lowest ID is returned.
    pub async fn find_by_city_and_state(
        &self,
        city: &str,
        state: &str,
    ) -> Result<Option<entity::area::Model>, DbErr> {
        entity::prelude::Area::find()
            .filter(entity::area::Column::City.eq(city))
            .filter(entity::area::Column::State.eq(state))
            .order_by_asc(entity::area::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets every area holding at least one venue, with those venues
    ///
    /// Areas are ordered by state then city, venues within an area by name.
    pub async fn get_all_with_venues(
        &self,
    ) -> Result<Vec<(entity::area::Model, Vec<entity::venue::Model>)>, DbErr> {
        let areas = entity::prelude::Area::find()
            .find_with_related(entity::prelude::Venue)
            .order_by_asc(entity::area::Column::State)
            .order_by_asc(entity::area::Column::City)
            .order_by_asc(entity::area::Column::Id)
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(areas
            .into_iter()
            .filter(|(_, venues)| !venues.is_empty())
            .collect())
    }
}
