//! Helpers shared by the integration tests.

use axum::{
    body::to_bytes,
    http::header,
    response::{IntoResponse, Response},
};
use halltek::server::{
    config::AdminCredentials,
    model::{
        app::AppState,
        session::{flash::Flash, user::SessionUser},
    },
};
use halltek_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

/// App state with the test admin credentials configured
pub fn admin_state(test: &TestContext) -> AppState {
    let mut state: AppState = test.to_app_state();
    state.admin = Some(AdminCredentials {
        username: TEST_ADMIN_USERNAME.to_string(),
        password: TEST_ADMIN_PASSWORD.to_string(),
        email: TEST_ADMIN_EMAIL.to_string(),
    });

    state
}

/// Puts a user straight into the session
pub async fn login_as(session: &Session, username: &str, is_admin: bool) -> SessionUser {
    let user = SessionUser {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        is_admin,
    };

    SessionUser::insert(session, &user).await.unwrap();

    user
}

/// Messages of the pending flashes, consuming them
pub async fn flash_messages(session: &Session) -> Vec<String> {
    Flash::take(session)
        .await
        .unwrap()
        .into_iter()
        .map(|flash| flash.message)
        .collect()
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub async fn body_text(resp: impl IntoResponse) -> String {
    let bytes = to_bytes(resp.into_response().into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json<T: DeserializeOwned>(resp: impl IntoResponse) -> T {
    let bytes = to_bytes(resp.into_response().into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
