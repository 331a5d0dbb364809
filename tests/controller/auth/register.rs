use axum::{extract::State, http::StatusCode, Form};
use halltek::server::{
    controller::auth::{register_submit, RegisterForm},
    data::user::UserRepository,
    model::app::AppState,
};
use halltek_test_utils::prelude::*;

use crate::util::{body_text, flash_messages, location};

fn form(username: &str, email: &str, password: &str) -> Form<RegisterForm> {
    Form(RegisterForm {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect redirect to login and a stored user after registering
async fn redirects_to_login_after_registering() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = register_submit(
        State(state),
        test.session.clone(),
        form("carol", "Carol@Example.com", "secret1"),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));
    assert_eq!(
        flash_messages(&test.session).await,
        vec!["Registration successful! Please log in."]
    );

    let user = UserRepository::new(&test.db)
        .find_by_email("carol@example.com")
        .await?;
    assert!(user.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 400 and the reason on the re-rendered form for a taken username
async fn returns_bad_request_for_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "alice@example.com", TEST_PASSWORD)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = register_submit(
        State(state),
        test.session.clone(),
        form("alice", "other@example.com", "secret1"),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("Username already exists. Please choose another."));

    Ok(())
}

#[tokio::test]
/// Expect 400 for a password below the minimum length
async fn returns_bad_request_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = register_submit(
        State(state),
        test.session.clone(),
        form("carol", "carol@example.com", "12345"),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("Password must be at least 6 characters long."));

    Ok(())
}
