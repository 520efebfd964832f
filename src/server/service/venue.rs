use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        form::{VenueForm, VenueInput},
        venue::VenueDetailDto,
    },
    server::{
        data::{show::ShowRepository, venue::VenueRepository},
        error::Error,
        service::{
            area::AreaService,
            show::{ShowHost, ShowService},
            CommitOutcome,
        },
    },
};

pub struct VenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    /// Creates a new instance of [`VenueService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a venue with its shows split into past & upcoming
    ///
    /// # Returns
    /// - [`VenueDetailDto`]: The venue's details
    /// - [`Error::NotFound`]: No venue exists with the provided ID
    pub async fn get_detail(
        &self,
        venue_id: i32,
        now: NaiveDateTime,
    ) -> Result<VenueDetailDto, Error> {
        let (venue, area) = self.get_with_area(venue_id).await?;

        let shows = ShowService::new(self.db)
            .partition(ShowHost::Venue(venue.id), now)
            .await?;

        Ok(VenueDetailDto {
            id: venue.id,
            name: venue.name,
            genres: venue.genres.0,
            address: venue.address,
            city: area.city,
            state: area.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: shows.past.len(),
            upcoming_shows_count: shows.upcoming.len(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        })
    }

    /// Build the edit form pre-populated from the stored venue and its area
    pub async fn get_form(&self, venue_id: i32) -> Result<VenueForm, Error> {
        let (venue, area) = self.get_with_area(venue_id).await?;

        Ok(VenueForm::from(VenueInput {
            name: venue.name,
            city: area.city,
            state: area.state,
            address: venue.address.unwrap_or_default(),
            phone: venue.phone,
            genres: venue.genres.0,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website: venue.website,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }))
    }

    /// Create a venue, resolving its area first
    ///
    /// # Returns
    /// - [`CommitOutcome::Committed`]: The venue was created
    /// - [`CommitOutcome::RolledBack`]: The area could not be resolved, or the insert or
    ///   commit failed
    pub async fn create(
        &self,
        input: &VenueInput,
    ) -> Result<CommitOutcome<entity::venue::Model>, Error> {
        let Some(area_id) = AreaService::new(self.db)
            .resolve(&input.city, &input.state)
            .await?
        else {
            return Ok(CommitOutcome::RolledBack);
        };

        let txn = self.db.begin().await?;

        let venue = match VenueRepository::new(&txn).create(area_id, input).await {
            Ok(venue) => venue,
            Err(e) => {
                tracing::warn!(name = %input.name, "Failed to create venue: {}", e);

                return Ok(CommitOutcome::RolledBack);
            }
        };

        if let Err(e) = txn.commit().await {
            tracing::warn!(name = %input.name, "Failed to commit new venue: {}", e);

            return Ok(CommitOutcome::RolledBack);
        }

        Ok(CommitOutcome::Committed(venue))
    }

    /// Replace a venue's fields, moving it to the submitted area
    ///
    /// # Returns
    /// - [`CommitOutcome::Committed`]: The venue was updated
    /// - [`CommitOutcome::RolledBack`]: The area could not be resolved, or the update or
    ///   commit failed
    /// - [`Error::NotFound`]: No venue exists with the provided ID
    pub async fn update(
        &self,
        venue_id: i32,
        input: &VenueInput,
    ) -> Result<CommitOutcome<entity::venue::Model>, Error> {
        // Check existence first so a missing venue never creates an area
        self.get_with_area(venue_id).await?;

        let Some(area_id) = AreaService::new(self.db)
            .resolve(&input.city, &input.state)
            .await?
        else {
            return Ok(CommitOutcome::RolledBack);
        };

        let txn = self.db.begin().await?;

        let venue = match VenueRepository::new(&txn)
            .update(venue_id, area_id, input)
            .await
        {
            Ok(Some(venue)) => venue,
            Ok(None) => return Err(not_found(venue_id)),
            Err(e) => {
                tracing::warn!(venue_id, "Failed to update venue: {}", e);

                return Ok(CommitOutcome::RolledBack);
            }
        };

        if let Err(e) = txn.commit().await {
            tracing::warn!(venue_id, "Failed to commit venue update: {}", e);

            return Ok(CommitOutcome::RolledBack);
        }

        Ok(CommitOutcome::Committed(venue))
    }

    /// Delete a venue along with all of its shows in one transaction
    ///
    /// The venue's area is kept.
    ///
    /// # Returns
    /// The venue's name is returned with the outcome either way.
    /// - [`CommitOutcome::Committed`]: The venue & its shows were deleted
    /// - [`CommitOutcome::RolledBack`]: A delete or the commit failed, nothing was removed
    /// - [`Error::NotFound`]: No venue exists with the provided ID
    pub async fn delete(&self, venue_id: i32) -> Result<(String, CommitOutcome<()>), Error> {
        let (venue, _) = self.get_with_area(venue_id).await?;

        let txn = self.db.begin().await?;

        let deleted = async {
            let shows = ShowRepository::new(&txn).delete_by_venue_id(venue_id).await?;
            let removed = VenueRepository::new(&txn).delete(venue_id).await?;

            Ok::<_, sea_orm::DbErr>((shows.rows_affected, removed.rows_affected))
        }
        .await;

        match deleted {
            Ok((_, 0)) => Err(not_found(venue_id)),
            Ok((shows_deleted, _)) => {
                if let Err(e) = txn.commit().await {
                    tracing::warn!(venue_id, "Failed to commit venue deletion: {}", e);

                    return Ok((venue.name, CommitOutcome::RolledBack));
                }

                tracing::debug!(venue_id, shows_deleted, "Deleted venue");

                Ok((venue.name, CommitOutcome::Committed(())))
            }
            Err(e) => {
                tracing::warn!(venue_id, "Failed to delete venue: {}", e);

                Ok((venue.name, CommitOutcome::RolledBack))
            }
        }
    }

    async fn get_with_area(
        &self,
        venue_id: i32,
    ) -> Result<(entity::venue::Model, entity::area::Model), Error> {
        match VenueRepository::new(self.db).get(venue_id).await? {
            Some((venue, Some(area))) => Ok((venue, area)),
            Some((venue, None)) => Err(Error::InternalError(format!(
                "Venue {} references missing area {}",
                venue.id, venue.area_id
            ))),
            None => Err(not_found(venue_id)),
        }
    }
}

fn not_found(venue_id: i32) -> Error {
    Error::NotFound {
        resource: "Venue",
        id: venue_id,
    }
}
