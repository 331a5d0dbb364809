use axum::{extract::State, http::StatusCode, Form};
use halltek::server::{
    controller::auth::{forgot_submit, ForgotForm},
    model::app::AppState,
    service::auth::AuthService,
};
use halltek_test_utils::prelude::*;

use crate::util::{body_text, flash_messages, location};

fn form(username: &str, new_password: &str) -> Form<ForgotForm> {
    Form(ForgotForm {
        username: username.to_string(),
        new_password: new_password.to_string(),
    })
}

#[tokio::test]
/// Expect redirect to login and a working new password after a reset
async fn redirects_to_login_after_reset() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "alice@example.com", TEST_PASSWORD)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = forgot_submit(
        State(state),
        test.session.clone(),
        form("alice", "brand-new"),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));
    assert_eq!(
        flash_messages(&test.session).await,
        vec!["Password reset successful! Please log in with your new password."]
    );

    let auth_service = AuthService::new(&test.db, None);
    assert!(auth_service.login("alice", "brand-new").await.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 404 for an unknown username or email
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = forgot_submit(
        State(state),
        test.session.clone(),
        form("nobody@example.com", "brand-new"),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp)
        .await
        .contains("Username or email not found."));

    Ok(())
}

#[tokio::test]
/// Expect 400 when a field is missing
async fn returns_bad_request_for_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = forgot_submit(State(state), test.session.clone(), form("alice", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
