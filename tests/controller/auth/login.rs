use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use halltek::server::{
    controller::auth::{login_page, login_submit, LoginForm, NextParams},
    error::GENERIC_FAILURE_MESSAGE,
    model::{app::AppState, session::user::SessionUser},
};
use halltek_test_utils::prelude::*;

use crate::util::{admin_state, body_text, flash_messages, location};

fn form(username: &str, password: &str, next: Option<&str>) -> Form<LoginForm> {
    Form(LoginForm {
        username: username.to_string(),
        password: password.to_string(),
        next: next.map(str::to_string),
    })
}

#[tokio::test]
/// Expect redirect to the home page and the user in session after a successful login
async fn redirects_home_after_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "alice@example.com", TEST_PASSWORD)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = login_submit(
        State(state),
        test.session.clone(),
        form("alice", TEST_PASSWORD, None),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));

    let user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
    assert!(!user.is_admin);
    assert_eq!(flash_messages(&test.session).await, vec!["Login successful!"]);

    Ok(())
}

#[tokio::test]
/// Expect a local next target to be honoured and a foreign one to be ignored
async fn follows_only_safe_next_targets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "alice@example.com", TEST_PASSWORD)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = login_submit(
        State(state.clone()),
        test.session.clone(),
        form("alice@example.com", TEST_PASSWORD, Some("/rewards")),
    )
    .await
    .unwrap();
    assert_eq!(location(&resp), Some("/rewards"));

    let resp = login_submit(
        State(state),
        test.session.clone(),
        form("alice", TEST_PASSWORD, Some("//evil.example/phish")),
    )
    .await
    .unwrap();
    assert_eq!(location(&resp), Some("/"));

    Ok(())
}

#[tokio::test]
/// Expect the configured admin to land on the product admin page without a user table
async fn admin_lands_on_admin_page() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = admin_state(&test);

    let resp = login_submit(
        State(state),
        test.session.clone(),
        form(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD, None),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/products"));

    let user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert!(user.is_admin);
    assert_eq!(user.email, TEST_ADMIN_EMAIL);
    assert_eq!(
        flash_messages(&test.session).await,
        vec!["Welcome back, admin!"]
    );

    Ok(())
}

#[tokio::test]
/// Expect 401 with the form re-rendered and no user in session for a wrong password
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "alice@example.com", TEST_PASSWORD)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = login_submit(
        State(state),
        test.session.clone(),
        form("alice", "wrong-password", Some("/rewards")),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    let body = body_text(resp).await;
    assert!(body.contains("Invalid username/email or password"));
    assert!(body.contains(r#"name="next" value="/rewards""#));

    Ok(())
}

#[tokio::test]
/// Expect 400 when username or password is missing
async fn returns_bad_request_for_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = login_submit(State(state), test.session.clone(), form("alice", "", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("Username and password are required."));

    Ok(())
}

#[tokio::test]
/// Expect 500 with the generic message when the user lookup fails
async fn returns_internal_error_when_database_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let resp = login_submit(
        State(state),
        test.session.clone(),
        form("alice", TEST_PASSWORD, None),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(resp).await.contains(GENERIC_FAILURE_MESSAGE));

    Ok(())
}

#[tokio::test]
/// Expect the login page to keep a safe next target and drop an unsafe one
async fn login_page_keeps_safe_next() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = login_page(
        test.session.clone(),
        Query(NextParams {
            next: Some("/admin/products".to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp)
        .await
        .contains(r#"value="/admin/products""#));

    let resp = login_page(
        test.session.clone(),
        Query(NextParams {
            next: Some("https://evil.example".to_string()),
        }),
    )
    .await
    .unwrap();
    assert!(!body_text(resp).await.contains("evil.example"));

    Ok(())
}
