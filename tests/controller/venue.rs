use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use chrono::{Duration, Utc};
use fyyur::{
    model::flash::FlashLevel,
    server::{
        controller::{extract::IdPath, venue::*, SearchParams},
        model::session::flash::SessionFlash,
    },
};
use sea_orm::EntityTrait;

use super::*;

/// Expect venues to be listed under their area
#[tokio::test]
async fn list_venues_renders_areas() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;

    let response = list_venues(State(test.to_app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("San Francisco"));
    assert!(body.contains("The Musical Hop"));

    Ok(())
}

/// Expect only venues whose name contains the term, ignoring case
#[tokio::test]
async fn search_matches_partial_names() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    test.fyyur().insert_mock_venue("Park Square", area.id).await?;

    let response = search_venues(
        State(test.to_app_state()),
        test.session.clone(),
        Form(SearchParams {
            search_term: "hop".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("Park Square"));

    Ok(())
}

/// Expect the detail page to list the venue's upcoming shows
#[tokio::test]
async fn get_venue_renders_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur()
        .insert_mock_show(artist.id, venue.id, Utc::now().naive_utc() + Duration::days(3))
        .await?;

    let response = get_venue(State(test.to_app_state()), test.session.clone(), IdPath(venue.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));

    Ok(())
}

/// Expect the 404 page for an unknown venue
#[tokio::test]
async fn get_venue_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = get_venue(State(test.to_app_state()), test.session.clone(), IdPath(42))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a valid submission to be stored, flashed and redirected home
#[tokio::test]
async fn create_venue_submission_lists_venue() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = create_venue_submission(
        State(test.to_app_state()),
        test.session.clone(),
        axum_extra::extract::Form(venue_form("The Musical Hop")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let venues = entity::prelude::Venue::find().all(&test.db).await?;
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].name, "The Musical Hop");
    assert!(venues[0].seeking_talent);

    let flashes = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(flashes.len(), 1);
    assert_eq!(flashes[0].level, FlashLevel::Success);
    assert_eq!(
        flashes[0].message,
        "Venue The Musical Hop was successfully listed!"
    );

    Ok(())
}

/// Expect two venues in the same city & state to share one area
#[tokio::test]
async fn create_venue_submission_reuses_area() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    for name in ["The Musical Hop", "Park Square"] {
        create_venue_submission(
            State(test.to_app_state()),
            test.session.clone(),
            axum_extra::extract::Form(venue_form(name)),
        )
        .await
        .unwrap();
    }

    let areas = entity::prelude::Area::find().all(&test.db).await?;
    assert_eq!(areas.len(), 1);
    let venues = entity::prelude::Venue::find().all(&test.db).await?;
    assert_eq!(venues.len(), 2);
    assert!(venues.iter().all(|v| v.area_id == areas[0].id));

    Ok(())
}

/// Expect an invalid submission to re-render the form without storing anything
#[tokio::test]
async fn create_venue_submission_rejects_invalid_form() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let mut form = venue_form("The Musical Hop");
    form.state = "ZZ".to_string();
    form.image_link = "not a url".to_string();

    let response = create_venue_submission(
        State(test.to_app_state()),
        test.session.clone(),
        axum_extra::extract::Form(form),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Not a valid choice."));
    assert!(entity::prelude::Venue::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::Area::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect the edit form to be prefilled with the stored venue
#[tokio::test]
async fn edit_venue_form_prefills_values() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;

    let response = edit_venue_form(State(test.to_app_state()), test.session.clone(), IdPath(venue.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("San Francisco"));

    Ok(())
}

/// Expect an update to be stored and redirect to the venue page
#[tokio::test]
async fn edit_venue_submission_updates_venue() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let mut form = venue_form("The Dueling Pianos Bar");
    form.city = "New York".to_string();
    form.state = "NY".to_string();

    let response = edit_venue_submission(
        State(test.to_app_state()),
        test.session.clone(),
        IdPath(venue.id),
        axum_extra::extract::Form(form),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/venues/{}", venue.id));

    let (updated, updated_area) = entity::prelude::Venue::find_by_id(venue.id)
        .find_also_related(entity::prelude::Area)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(updated.name, "The Dueling Pianos Bar");
    let updated_area = updated_area.unwrap();
    assert_eq!(updated_area.city, "New York");
    assert_eq!(updated_area.state, "NY");

    let flashes = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(
        flashes[0].message,
        "Venue The Dueling Pianos Bar was successfully updated!"
    );

    Ok(())
}

/// Expect the 404 page when updating an unknown venue
#[tokio::test]
async fn edit_venue_submission_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = edit_venue_submission(
        State(test.to_app_state()),
        test.session.clone(),
        IdPath(42),
        axum_extra::extract::Form(venue_form("The Musical Hop")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the venue & its shows to be deleted
#[tokio::test]
async fn delete_venue_removes_venue_and_shows() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    let area = test.fyyur().insert_mock_area("San Francisco", "CA").await?;
    let venue = test.fyyur().insert_mock_venue("The Musical Hop", area.id).await?;
    let artist = test.fyyur().insert_mock_artist("Guns N Petals", area.id).await?;
    test.fyyur()
        .insert_mock_show(artist.id, venue.id, Utc::now().naive_utc() + Duration::days(3))
        .await?;

    let response = delete_venue(State(test.to_app_state()), test.session.clone(), IdPath(venue.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(entity::prelude::Venue::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::Show::find().all(&test.db).await?.is_empty());

    let flashes = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(
        flashes[0].message,
        "Venue The Musical Hop was successfully deleted."
    );

    Ok(())
}

/// Expect the 404 page when deleting an unknown venue
#[tokio::test]
async fn delete_venue_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;

    let response = delete_venue(State(test.to_app_state()), test.session.clone(), IdPath(42))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
