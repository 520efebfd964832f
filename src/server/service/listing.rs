use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::listing::{AreaVenuesDto, ListingSummaryDto, SearchResultsDto},
    server::{
        data::{
            area::AreaRepository, artist::ArtistRepository, show::ShowRepository,
            venue::VenueRepository,
        },
        error::Error,
    },
};

/// Builds the summaries shown by list pages & search results.
///
/// Upcoming show counts use the same `start_time > now` rule as
/// [`ShowService::partition`](crate::server::service::show::ShowService::partition).
pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarize venues, keeping their order
    pub async fn summarize_venues(
        &self,
        venues: Vec<entity::venue::Model>,
        now: NaiveDateTime,
    ) -> Result<Vec<ListingSummaryDto>, Error> {
        let ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
        let counts = ShowRepository::new(self.db)
            .count_upcoming_by_venue_ids(&ids, now)
            .await?;

        Ok(summarize(
            venues.into_iter().map(|v| (v.id, v.name)),
            counts,
        ))
    }

    /// Summarize artists, keeping their order
    pub async fn summarize_artists(
        &self,
        artists: Vec<entity::artist::Model>,
        now: NaiveDateTime,
    ) -> Result<Vec<ListingSummaryDto>, Error> {
        let ids: Vec<i32> = artists.iter().map(|a| a.id).collect();
        let counts = ShowRepository::new(self.db)
            .count_upcoming_by_artist_ids(&ids, now)
            .await?;

        Ok(summarize(
            artists.into_iter().map(|a| (a.id, a.name)),
            counts,
        ))
    }

    /// Venues grouped by area
    ///
    /// Areas are ordered by state then city and venues by name. Areas without venues
    /// are left out.
    pub async fn get_venues_by_area(&self, now: NaiveDateTime) -> Result<Vec<AreaVenuesDto>, Error> {
        let areas = AreaRepository::new(self.db).get_all_with_venues().await?;

        let mut grouped = Vec::with_capacity(areas.len());
        for (area, venues) in areas {
            grouped.push(AreaVenuesDto {
                city: area.city,
                state: area.state,
                venues: self.summarize_venues(venues, now).await?,
            });
        }

        Ok(grouped)
    }

    /// Every artist ordered by name
    pub async fn get_artists(&self, now: NaiveDateTime) -> Result<Vec<ListingSummaryDto>, Error> {
        let artists = ArtistRepository::new(self.db).get_all().await?;

        self.summarize_artists(artists, now).await
    }

    /// Case-insensitive substring search over venue names
    pub async fn search_venues(
        &self,
        term: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResultsDto, Error> {
        let venues = VenueRepository::new(self.db).search_by_name(term).await?;
        let data = self.summarize_venues(venues, now).await?;

        Ok(SearchResultsDto {
            search_term: term.to_string(),
            count: data.len(),
            data,
        })
    }

    /// Case-insensitive substring search over artist names
    pub async fn search_artists(
        &self,
        term: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResultsDto, Error> {
        let artists = ArtistRepository::new(self.db).search_by_name(term).await?;
        let data = self.summarize_artists(artists, now).await?;

        Ok(SearchResultsDto {
            search_term: term.to_string(),
            count: data.len(),
            data,
        })
    }
}

fn summarize(
    records: impl Iterator<Item = (i32, String)>,
    counts: Vec<(i32, i64)>,
) -> Vec<ListingSummaryDto> {
    let counts: HashMap<i32, i64> = counts.into_iter().collect();

    records
        .map(|(id, name)| ListingSummaryDto {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0).max(0) as u64,
        })
        .collect()
}
