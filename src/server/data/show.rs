use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// A show joined with its venue & artist:
/// (show id, venue id, venue name, artist id, artist name, artist image link, start time)
pub type ShowRow = (i32, i32, String, i32, String, String, NaiveDateTime);

/// The other party of a show along with its start time:
/// (counterpart id, counterpart name, counterpart image link, start time)
pub type CounterpartRow = (i32, String, String, NaiveDateTime);

pub struct ShowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShowRepository<'a, C> {
    /// Creates a new instance of [`ShowRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new show
    ///
    /// Fails with a foreign key error if the artist or venue does not exist.
    pub async fn create(
        &self,
        artist_id: i32,
        venue_id: i32,
        start_time: NaiveDateTime,
    ) -> Result<entity::show::Model, DbErr> {
        let show = entity::show::ActiveModel {
            artist_id: ActiveValue::Set(artist_id),
            venue_id: ActiveValue::Set(venue_id),
            start_time: ActiveValue::Set(start_time),
            ..Default::default()
        };

        show.insert(self.db).await
    }

    /// Gets every show with its venue and artist, ordered by show ID
    pub async fn get_all(&self) -> Result<Vec<ShowRow>, DbErr> {
        entity::prelude::Show::find()
            .select_only()
            .column(entity::show::Column::Id)
            .column(entity::show::Column::VenueId)
            .column(entity::venue::Column::Name)
            .column(entity::show::Column::ArtistId)
            .column(entity::artist::Column::Name)
            .column(entity::artist::Column::ImageLink)
            .column(entity::show::Column::StartTime)
            .join(JoinType::InnerJoin, entity::show::Relation::Venue.def())
            .join(JoinType::InnerJoin, entity::show::Relation::Artist.def())
            .order_by_asc(entity::show::Column::Id)
            .into_tuple::<ShowRow>()
            .all(self.db)
            .await
    }

    /// Gets the artists playing at a venue, ordered by start time
    pub async fn get_artists_by_venue_id(
        &self,
        venue_id: i32,
    ) -> Result<Vec<CounterpartRow>, DbErr> {
        entity::prelude::Show::find()
            .select_only()
            .column(entity::artist::Column::Id)
            .column(entity::artist::Column::Name)
            .column(entity::artist::Column::ImageLink)
            .column(entity::show::Column::StartTime)
            .join(JoinType::InnerJoin, entity::show::Relation::Artist.def())
            .filter(entity::show::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::show::Column::StartTime)
            .order_by_asc(entity::show::Column::Id)
            .into_tuple::<CounterpartRow>()
            .all(self.db)
            .await
    }

    /// Gets the venues an artist plays at, ordered by start time
    pub async fn get_venues_by_artist_id(
        &self,
        artist_id: i32,
    ) -> Result<Vec<CounterpartRow>, DbErr> {
        entity::prelude::Show::find()
            .select_only()
            .column(entity::venue::Column::Id)
            .column(entity::venue::Column::Name)
            .column(entity::venue::Column::ImageLink)
            .column(entity::show::Column::StartTime)
            .join(JoinType::InnerJoin, entity::show::Relation::Venue.def())
            .filter(entity::show::Column::ArtistId.eq(artist_id))
            .order_by_asc(entity::show::Column::StartTime)
            .order_by_asc(entity::show::Column::Id)
            .into_tuple::<CounterpartRow>()
            .all(self.db)
            .await
    }

    /// Counts shows starting after `now` for each of the provided venues
    ///
    /// Venues without upcoming shows are absent from the result.
    pub async fn count_upcoming_by_venue_ids(
        &self,
        venue_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Show::find()
            .select_only()
            .column(entity::show::Column::VenueId)
            .expr_as(
                Expr::col((entity::show::Entity, entity::show::Column::Id)).count(),
                "upcoming",
            )
            .filter(entity::show::Column::VenueId.is_in(venue_ids.iter().copied()))
            .filter(entity::show::Column::StartTime.gt(now))
            .group_by(entity::show::Column::VenueId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Counts shows starting after `now` for each of the provided artists
    pub async fn count_upcoming_by_artist_ids(
        &self,
        artist_ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Show::find()
            .select_only()
            .column(entity::show::Column::ArtistId)
            .expr_as(
                Expr::col((entity::show::Entity, entity::show::Column::Id)).count(),
                "upcoming",
            )
            .filter(entity::show::Column::ArtistId.is_in(artist_ids.iter().copied()))
            .filter(entity::show::Column::StartTime.gt(now))
            .group_by(entity::show::Column::ArtistId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Deletes every show held at a venue
    pub async fn delete_by_venue_id(&self, venue_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Show::delete_many()
            .filter(entity::show::Column::VenueId.eq(venue_id))
            .exec(self.db)
            .await
    }

    /// Deletes every show an artist plays
    pub async fn delete_by_artist_id(&self, artist_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Show::delete_many()
            .filter(entity::show::Column::ArtistId.eq(artist_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime, Utc};
    use fyyur_test_utils::prelude::*;

    /// Venue "The Musical Hop" and artist "Guns N Petals" in San Francisco
    async fn setup() -> Result<(TestContext, i32, i32), TestError> {
        let test = test_setup_with_fyyur_tables!()?;
        let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
        let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
        let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;

        Ok((test, venue.id, artist.id))
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    mod create {
        use super::*;
        use crate::server::data::show::ShowRepository;

        /// Expect Error when the artist does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_artist() -> Result<(), TestError> {
            let (test, venue_id, artist_id) = setup().await?;

            let show_repo = ShowRepository::new(&test.db);
            let result = show_repo.create(artist_id + 1, venue_id, now()).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_all {
        use super::*;
        use crate::server::data::show::ShowRepository;

        /// Expect shows ordered by ID with venue & artist names joined
        #[tokio::test]
        async fn joins_venue_and_artist() -> Result<(), TestError> {
            let (test, venue_id, artist_id) = setup().await?;
            let later = now() + Duration::days(2);
            let earlier = now() - Duration::days(2);
            let first = test.fyyur().insert_mock_show(artist_id, venue_id, later).await?;
            let second = test.fyyur().insert_mock_show(artist_id, venue_id, earlier).await?;

            let show_repo = ShowRepository::new(&test.db);
            let shows = show_repo.get_all().await?;

            let ids: Vec<i32> = shows.iter().map(|s| s.0).collect();
            assert_eq!(ids, vec![first.id, second.id]);
            assert_eq!(shows[0].2, "The Musical Hop");
            assert_eq!(shows[0].4, "Guns N Petals");

            Ok(())
        }
    }

    mod count_upcoming {
        use super::*;
        use crate::server::data::show::ShowRepository;

        /// Expect only shows after `now` to be counted
        #[tokio::test]
        async fn counts_only_future_shows() -> Result<(), TestError> {
            let (test, venue_id, artist_id) = setup().await?;
            let now = now();
            test.fyyur()
                .insert_mock_show(artist_id, venue_id, now - Duration::hours(1))
                .await?;
            test.fyyur()
                .insert_mock_show(artist_id, venue_id, now + Duration::hours(1))
                .await?;
            test.fyyur()
                .insert_mock_show(artist_id, venue_id, now + Duration::days(30))
                .await?;

            let show_repo = ShowRepository::new(&test.db);

            let by_venue = show_repo
                .count_upcoming_by_venue_ids(&[venue_id], now)
                .await?;
            assert_eq!(by_venue, vec![(venue_id, 2)]);

            let by_artist = show_repo
                .count_upcoming_by_artist_ids(&[artist_id], now)
                .await?;
            assert_eq!(by_artist, vec![(artist_id, 2)]);

            Ok(())
        }

        /// Expect hosts without upcoming shows to be absent
        #[tokio::test]
        async fn omits_hosts_without_upcoming_shows() -> Result<(), TestError> {
            let (test, venue_id, _) = setup().await?;

            let show_repo = ShowRepository::new(&test.db);
            let counts = show_repo
                .count_upcoming_by_venue_ids(&[venue_id], now())
                .await?;

            assert!(counts.is_empty());

            Ok(())
        }
    }

    mod delete_by_venue_id {
        use super::*;
        use crate::server::data::show::ShowRepository;

        /// Expect every show at the venue to be removed
        #[tokio::test]
        async fn deletes_all_shows_for_venue() -> Result<(), TestError> {
            let (test, venue_id, artist_id) = setup().await?;
            for days in [1, 2, 3] {
                test.fyyur()
                    .insert_mock_show(artist_id, venue_id, now() + Duration::days(days))
                    .await?;
            }

            let show_repo = ShowRepository::new(&test.db);
            let result = show_repo.delete_by_venue_id(venue_id).await?;

            assert_eq!(result.rows_affected, 3);
            assert!(show_repo.get_artists_by_venue_id(venue_id).await?.is_empty());

            Ok(())
        }
    }
}
