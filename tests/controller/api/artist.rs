use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use fyyur::{
    model::{artist::ArtistDetailDto, listing::ListingSummaryDto},
    server::controller::api::artist::{get_artist, get_artists},
};

use super::*;

/// Expect artists ordered by name with upcoming show counts
#[tokio::test]
async fn get_artists_summarizes_upcoming_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let now = Utc::now().naive_utc();
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let matt = test.fyyur().insert_mock_artist("Matt Quevedo", area.id).await?;
    test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur()
        .insert_mock_show(matt.id, venue.id, now + Duration::days(4))
        .await?;

    let response = get_artists(State(test.to_app_state()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let artists: Vec<ListingSummaryDto> =
        serde_json::from_str(&body_text(response).await).unwrap();
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo"]);
    assert_eq!(artists[0].num_upcoming_shows, 0);
    assert_eq!(artists[1].num_upcoming_shows, 1);

    Ok(())
}

/// Expect an artist's shows split into past & upcoming
#[tokio::test]
async fn get_artist_partitions_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let now = Utc::now().naive_utc();
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur()
        .insert_mock_show(artist.id, venue.id, now + Duration::days(1))
        .await?;

    let response = get_artist(State(test.to_app_state()), Path(artist.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let detail: ArtistDetailDto = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(detail.past_shows_count, 0);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.upcoming_shows[0].counterpart_id, venue.id);

    Ok(())
}

/// Expect a 404 for an unknown artist
#[tokio::test]
async fn get_artist_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = get_artist(State(test.to_app_state()), Path(7))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
