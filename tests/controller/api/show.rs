use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use fyyur::{model::show::ShowDto, server::controller::api::show::get_shows};

use super::*;

/// Expect every show with its venue & artist names
#[tokio::test]
async fn get_shows_joins_names() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let now = Utc::now().naive_utc();
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    let show = test
        .fyyur()
        .insert_mock_show(artist.id, venue.id, now + Duration::days(1))
        .await?;

    let response = get_shows(State(test.to_app_state())).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let shows: Vec<ShowDto> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].id, show.id);
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_name, "Guns N Petals");

    Ok(())
}

/// Expect an empty list without any shows
#[tokio::test]
async fn get_shows_empty() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = get_shows(State(test.to_app_state())).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let shows: Vec<ShowDto> = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(shows.is_empty());

    Ok(())
}
