use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use fyyur::{
    model::{api::ErrorDto, listing::AreaVenuesDto, venue::VenueDetailDto},
    server::controller::api::venue::{get_venue, get_venues},
};

use super::*;

/// Expect venues grouped by area with their upcoming show counts
#[tokio::test]
async fn get_venues_groups_by_area() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let now = Utc::now().naive_utc();
    let sf = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let ny = test.fyyur().insert_mock_area("New York", "NY").await?;
    let hop = test.fyyur().insert_mock_venue("The Musical Hop", sf.id).await?;
    test.fyyur().insert_mock_venue("The Dueling Pianos Bar", ny.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", sf.id).await?;
    test.fyyur()
        .insert_mock_show(artist.id, hop.id, now + Duration::days(1))
        .await?;
    test.fyyur()
        .insert_mock_show(artist.id, hop.id, now - Duration::days(1))
        .await?;

    let response = get_venues(State(test.to_app_state()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let areas: Vec<AreaVenuesDto> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(areas.len(), 2);
    let sf_area = areas.iter().find(|a| a.city == "San Francisco").unwrap();
    assert_eq!(sf_area.venues.len(), 1);
    assert_eq!(sf_area.venues[0].name, "The Musical Hop");
    assert_eq!(sf_area.venues[0].num_upcoming_shows, 1);

    Ok(())
}

/// Expect a venue's shows split into past & upcoming
#[tokio::test]
async fn get_venue_partitions_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let now = Utc::now().naive_utc();
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    for days in [-2, 2, 3] {
        test.fyyur()
            .insert_mock_show(artist.id, venue.id, now + Duration::days(days))
            .await?;
    }

    let response = get_venue(State(test.to_app_state()), Path(venue.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let detail: VenueDetailDto = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 2);
    assert_eq!(detail.past_shows[0].counterpart_name, "Guns N Petals");

    Ok(())
}

/// Expect a JSON 404 for an unknown venue
#[tokio::test]
async fn get_venue_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = get_venue(State(test.to_app_state()), Path(42))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(error.error, "Venue with ID 42 not found");

    Ok(())
}
