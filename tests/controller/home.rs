use axum::{http::StatusCode, response::IntoResponse};
use fyyur::{
    model::flash::FlashMessage,
    server::{controller::home::index, model::session::flash::SessionFlash},
};

use super::*;

/// Expect the home page to show pending flash messages once
#[tokio::test]
async fn renders_and_drains_flash_messages() -> Result<(), TestError> {
    let test = test_setup_with_fyyur_tables!()?;
    SessionFlash::push(&test.session, FlashMessage::success("Show was successfully listed!"))
        .await
        .unwrap();

    let response = index(test.session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Show was successfully listed!"));
    assert!(SessionFlash::take(&test.session).await.unwrap().is_empty());

    Ok(())
}
