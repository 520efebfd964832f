use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        form::{FormErrors, ShowInput},
        show::{ChoiceDto, ShowDto, ShowListingDto},
    },
    server::{
        data::{
            artist::ArtistRepository,
            show::{CounterpartRow, ShowRepository},
            venue::VenueRepository,
        },
        error::Error,
        service::CommitOutcome,
    },
};

/// The record whose shows are being listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowHost {
    Venue(i32),
    Artist(i32),
}

/// A host's shows split around a single instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionedShows {
    pub past: Vec<ShowListingDto>,
    pub upcoming: Vec<ShowListingDto>,
}

/// Artist & venue choices offered by the new show form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowChoices {
    pub artists: Vec<ChoiceDto>,
    pub venues: Vec<ChoiceDto>,
}

pub struct ShowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowService<'a> {
    /// Creates a new instance of [`ShowService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Split a venue's or artist's shows into past & upcoming
    ///
    /// Shows starting at or before `now` are past, shows starting after it are upcoming.
    /// Each entry describes the other party of the show: the artist for a venue, the
    /// venue for an artist. Both lists are ordered by start time.
    ///
    /// # Arguments
    /// - `host` ([`ShowHost`]): The venue or artist to list shows for
    /// - `now` (`NaiveDateTime`): The current instant in UTC
    pub async fn partition(
        &self,
        host: ShowHost,
        now: NaiveDateTime,
    ) -> Result<PartitionedShows, Error> {
        let show_repository = ShowRepository::new(self.db);

        let rows = match host {
            ShowHost::Venue(venue_id) => show_repository.get_artists_by_venue_id(venue_id).await?,
            ShowHost::Artist(artist_id) => {
                show_repository.get_venues_by_artist_id(artist_id).await?
            }
        };

        Ok(partition_rows(rows, now))
    }

    /// Gets every show with its venue & artist, ordered by show ID
    pub async fn get_all(&self) -> Result<Vec<ShowDto>, Error> {
        let show_repository = ShowRepository::new(self.db);

        let shows = show_repository
            .get_all()
            .await?
            .into_iter()
            .map(
                |(id, venue_id, venue_name, artist_id, artist_name, artist_image_link, start_time)| {
                    ShowDto {
                        id,
                        venue_id,
                        venue_name,
                        artist_id,
                        artist_name,
                        artist_image_link,
                        start_time,
                    }
                },
            )
            .collect();

        Ok(shows)
    }

    pub async fn get_choices(&self) -> Result<ShowChoices, Error> {
        let to_choices = |rows: Vec<(i32, String)>| {
            rows.into_iter()
                .map(|(id, name)| ChoiceDto { id, name })
                .collect()
        };

        Ok(ShowChoices {
            artists: to_choices(ArtistRepository::new(self.db).get_names().await?),
            venues: to_choices(VenueRepository::new(self.db).get_names().await?),
        })
    }

    /// Create a show for an existing artist & venue
    ///
    /// # Returns
    /// - [`CommitOutcome::Committed`]: The show was created
    /// - [`CommitOutcome::Rejected`]: The artist or venue does not exist
    /// - [`CommitOutcome::RolledBack`]: The insert or commit failed
    /// - [`Error`]: An error if checking the artist or venue failed
    pub async fn create(
        &self,
        input: &ShowInput,
    ) -> Result<CommitOutcome<entity::show::Model>, Error> {
        let mut errors = FormErrors::default();

        if ArtistRepository::new(self.db)
            .get(input.artist_id)
            .await?
            .is_none()
        {
            errors.push("artist_id", "Artist does not exist.");
        }
        if VenueRepository::new(self.db)
            .get(input.venue_id)
            .await?
            .is_none()
        {
            errors.push("venue_id", "Venue does not exist.");
        }
        if !errors.is_empty() {
            return Ok(CommitOutcome::Rejected(errors));
        }

        let txn = self.db.begin().await?;

        let show = match ShowRepository::new(&txn)
            .create(input.artist_id, input.venue_id, input.start_time)
            .await
        {
            Ok(show) => show,
            Err(e) => {
                tracing::warn!("Failed to create show: {}", e);

                return Ok(CommitOutcome::RolledBack);
            }
        };

        if let Err(e) = txn.commit().await {
            tracing::warn!("Failed to commit new show: {}", e);

            return Ok(CommitOutcome::RolledBack);
        }

        Ok(CommitOutcome::Committed(show))
    }
}

fn partition_rows(rows: Vec<CounterpartRow>, now: NaiveDateTime) -> PartitionedShows {
    let (past, upcoming): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .map(|(id, name, image_link, start_time)| ShowListingDto {
            counterpart_id: id,
            counterpart_name: name,
            counterpart_image_link: image_link,
            start_time,
        })
        .partition(|show| show.start_time <= now);

    PartitionedShows { past, upcoming }
}
