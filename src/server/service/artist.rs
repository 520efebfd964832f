use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        artist::ArtistDetailDto,
        form::{ArtistForm, ArtistInput},
    },
    server::{
        data::{artist::ArtistRepository, show::ShowRepository},
        error::Error,
        service::{
            area::AreaService,
            show::{ShowHost, ShowService},
            CommitOutcome,
        },
    },
};

pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistService<'a> {
    /// Creates a new instance of [`ArtistService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an artist with their shows split into past & upcoming
    pub async fn get_detail(
        &self,
        artist_id: i32,
        now: NaiveDateTime,
    ) -> Result<ArtistDetailDto, Error> {
        let (artist, area) = self.get_with_area(artist_id).await?;

        let shows = ShowService::new(self.db)
            .partition(ShowHost::Artist(artist.id), now)
            .await?;

        Ok(ArtistDetailDto {
            id: artist.id,
            name: artist.name,
            genres: artist.genres.0,
            city: area.city,
            state: area.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: shows.past.len(),
            upcoming_shows_count: shows.upcoming.len(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        })
    }

    pub async fn get_form(&self, artist_id: i32) -> Result<ArtistForm, Error> {
        let (artist, area) = self.get_with_area(artist_id).await?;

        Ok(ArtistForm::from(ArtistInput {
            name: artist.name,
            city: area.city,
            state: area.state,
            phone: artist.phone,
            genres: artist.genres.0,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }))
    }

    /// Create an artist, resolving their area first
    pub async fn create(
        &self,
        input: &ArtistInput,
    ) -> Result<CommitOutcome<entity::artist::Model>, Error> {
        let Some(area_id) = AreaService::new(self.db)
            .resolve(&input.city, &input.state)
            .await?
        else {
            return Ok(CommitOutcome::RolledBack);
        };

        let txn = self.db.begin().await?;

        let artist = match ArtistRepository::new(&txn).create(area_id, input).await {
            Ok(artist) => artist,
            Err(e) => {
                tracing::warn!(name = %input.name, "Failed to create artist: {}", e);

                return Ok(CommitOutcome::RolledBack);
            }
        };

        if let Err(e) = txn.commit().await {
            tracing::warn!(name = %input.name, "Failed to commit new artist: {}", e);

            return Ok(CommitOutcome::RolledBack);
        }

        Ok(CommitOutcome::Committed(artist))
    }

    /// Replace an artist's fields
    ///
    /// Returns [`Error::NotFound`] for an unknown artist before any area is resolved.
    pub async fn update(
        &self,
        artist_id: i32,
        input: &ArtistInput,
    ) -> Result<CommitOutcome<entity::artist::Model>, Error> {
        self.get_with_area(artist_id).await?;

        let Some(area_id) = AreaService::new(self.db)
            .resolve(&input.city, &input.state)
            .await?
        else {
            return Ok(CommitOutcome::RolledBack);
        };

        let txn = self.db.begin().await?;

        let artist = match ArtistRepository::new(&txn)
            .update(artist_id, area_id, input)
            .await
        {
            Ok(Some(artist)) => artist,
            Ok(None) => return Err(not_found(artist_id)),
            Err(e) => {
                tracing::warn!(artist_id, "Failed to update artist: {}", e);

                return Ok(CommitOutcome::RolledBack);
            }
        };

        if let Err(e) = txn.commit().await {
            tracing::warn!(artist_id, "Failed to commit artist update: {}", e);

            return Ok(CommitOutcome::RolledBack);
        }

        Ok(CommitOutcome::Committed(artist))
    }

    /// Delete an artist along with all of their shows in one transaction
    ///
    /// Returns the artist's name with the outcome so failures can be reported by name.
    pub async fn delete(&self, artist_id: i32) -> Result<(String, CommitOutcome<()>), Error> {
        let (artist, _) = self.get_with_area(artist_id).await?;

        let txn = self.db.begin().await?;

        let deleted = async {
            let shows = ShowRepository::new(&txn)
                .delete_by_artist_id(artist_id)
                .await?;
            let removed = ArtistRepository::new(&txn).delete(artist_id).await?;

            Ok::<_, sea_orm::DbErr>((shows.rows_affected, removed.rows_affected))
        }
        .await;

        match deleted {
            Ok((_, 0)) => Err(not_found(artist_id)),
            Ok((shows_deleted, _)) => {
                if let Err(e) = txn.commit().await {
                    tracing::warn!(artist_id, "Failed to commit artist deletion: {}", e);

                    return Ok((artist.name, CommitOutcome::RolledBack));
                }

                tracing::debug!(artist_id, shows_deleted, "Deleted artist");

                Ok((artist.name, CommitOutcome::Committed(())))
            }
            Err(e) => {
                tracing::warn!(artist_id, "Failed to delete artist: {}", e);

                Ok((artist.name, CommitOutcome::RolledBack))
            }
        }
    }

    async fn get_with_area(
        &self,
        artist_id: i32,
    ) -> Result<(entity::artist::Model, entity::area::Model), Error> {
        match ArtistRepository::new(self.db).get(artist_id).await? {
            Some((artist, Some(area))) => Ok((artist, area)),
            Some((artist, None)) => Err(Error::InternalError(format!(
                "Artist {} references missing area {}",
                artist.id, artist.area_id
            ))),
            None => Err(not_found(artist_id)),
        }
    }
}

fn not_found(artist_id: i32) -> Error {
    Error::NotFound {
        resource: "Artist",
        id: artist_id,
    }
}
