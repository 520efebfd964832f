use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use chrono::NaiveDate;
use fyyur::{
    model::form::ShowForm,
    server::{controller::show::*, model::session::flash::SessionFlash},
};
use sea_orm::EntityTrait;

use super::*;

fn show_form(artist_id: i32, venue_id: i32, start_time: &str) -> ShowForm {
    ShowForm {
        artist_id: artist_id.to_string(),
        venue_id: venue_id.to_string(),
        start_time: start_time.to_string(),
    }
}

/// Expect every show with its artist & venue names
#[tokio::test]
async fn list_shows_renders_names() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    let start_time = NaiveDate::from_ymd_opt(2019, 5, 21)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap();
    test.fyyur()
        .insert_mock_show(artist.id, venue.id, start_time)
        .await?;

    let response = list_shows(State(test.to_app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("Tue 05, 21, 2019 9:30PM"));

    Ok(())
}

/// Expect the create form to offer existing artists & venues
#[tokio::test]
async fn create_show_form_lists_choices() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;

    let response = create_show_form(State(test.to_app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));

    Ok(())
}

/// Expect a valid submission to be stored with the parsed start time
#[tokio::test]
async fn create_show_submission_lists_show() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;

    let response = create_show_submission(
        State(test.to_app_state()),
        test.session.clone(),
        Form(show_form(artist.id, venue.id, "2035-04-01 20:00")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let shows = entity::prelude::Show::find().all(&test.db).await?;
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, artist.id);
    assert_eq!(shows[0].venue_id, venue.id);
    assert_eq!(
        shows[0].start_time,
        NaiveDate::from_ymd_opt(2035, 4, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    );

    let flashes = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(flashes[0].message, "Show was successfully listed!");

    Ok(())
}

/// Expect a reference to a missing artist to re-render the form
#[tokio::test]
async fn create_show_submission_rejects_unknown_artist() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;

    let response = create_show_submission(
        State(test.to_app_state()),
        test.session.clone(),
        Form(show_form(99, venue.id, "2035-04-01 20:00")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Artist does not exist."));
    assert!(entity::prelude::Show::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect an unparseable start time to re-render the form
#[tokio::test]
async fn create_show_submission_rejects_invalid_start_time() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;

    let response = create_show_submission(
        State(test.to_app_state()),
        test.session.clone(),
        Form(show_form(artist.id, venue.id, "next tuesday")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Not a valid datetime value."));
    assert!(entity::prelude::Show::find().all(&test.db).await?.is_empty());

    Ok(())
}
