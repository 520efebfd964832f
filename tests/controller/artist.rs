use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use chrono::{Duration, Utc};
use fyyur::server::{
    controller::{artist::*, extract::IdPath, SearchParams},
    model::session::flash::SessionFlash,
};
use sea_orm::EntityTrait;

use super::*;

/// Expect every artist on the list page
#[tokio::test]
async fn list_artists_renders_names() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur().insert_mock_artist("Matt Quevedo", area.id).await?;

    let response = list_artists(State(test.to_app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("Matt Quevedo"));

    Ok(())
}

/// Expect only artists whose name contains the term, ignoring case
#[tokio::test]
async fn search_matches_partial_names() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur().insert_mock_artist("Matt Quevedo", area.id).await?;
    test.fyyur().insert_mock_artist("The Wild Sax Band", area.id).await?;

    let response = search_artists(
        State(test.to_app_state()),
        test.session.clone(),
        Form(SearchParams {
            search_term: "BAND".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Wild Sax Band"));
    assert!(!body.contains("Matt Quevedo"));
    assert!(!body.contains("Guns N Petals"));

    Ok(())
}

/// Expect the artist page to list past shows at the venue
#[tokio::test]
async fn get_artist_renders_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur()
        .insert_mock_show(artist.id, venue.id, Utc::now().naive_utc() - Duration::days(3))
        .await?;

    let response = get_artist(State(test.to_app_state()), test.session.clone(), IdPath(artist.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Musical Hop"));

    Ok(())
}

/// Expect the 404 page for an unknown artist
#[tokio::test]
async fn get_artist_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = get_artist(State(test.to_app_state()), test.session.clone(), IdPath(42))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a valid submission to be stored, flashed and redirected home
#[tokio::test]
async fn create_artist_submission_lists_artist() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = create_artist_submission(
        State(test.to_app_state()),
        test.session.clone(),
        axum_extra::extract::Form(artist_form("Guns N Petals")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let artists = entity::prelude::Artist::find().all(&test.db).await?;
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Guns N Petals");
    assert!(!artists[0].seeking_venue);

    let flashes = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(
        flashes[0].message,
        "Artist Guns N Petals was successfully listed!"
    );

    Ok(())
}

/// Expect unknown genres to be rejected with a 422
#[tokio::test]
async fn create_artist_submission_rejects_unknown_genre() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let mut form = artist_form("Guns N Petals");
    form.genres = vec!["Polka".to_string()];

    let response = create_artist_submission(
        State(test.to_app_state()),
        test.session.clone(),
        axum_extra::extract::Form(form),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(entity::prelude::Artist::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect an update to be stored and redirect to the artist page
#[tokio::test]
async fn edit_artist_submission_updates_artist() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    let mut form = artist_form("Guns N Roses");
    form.seeking_venue = Some("y".to_string());
    form.seeking_description = "Looking for shows in the Bay Area".to_string();

    let response = edit_artist_submission(
        State(test.to_app_state()),
        test.session.clone(),
        IdPath(artist.id),
        axum_extra::extract::Form(form),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/artists/{}", artist.id));

    let updated = entity::prelude::Artist::find_by_id(artist.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(updated.name, "Guns N Roses");
    assert!(updated.seeking_venue);

    Ok(())
}

/// Expect the artist & their shows to be deleted
#[tokio::test]
async fn delete_artist_removes_artist_and_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur()
        .insert_mock_show(artist.id, venue.id, Utc::now().naive_utc() + Duration::days(3))
        .await?;

    let response = delete_artist(State(test.to_app_state()), test.session.clone(), IdPath(artist.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(entity::prelude::Artist::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::Show::find().all(&test.db).await?.is_empty());
    assert_eq!(entity::prelude::Venue::find().all(&test.db).await?.len(), 1);

    Ok(())
}
