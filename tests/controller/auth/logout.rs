use axum::{http::StatusCode, response::IntoResponse};
use halltek::server::{controller::auth::logout, model::session::user::SessionUser};
use halltek_test_utils::prelude::*;

use crate::util::{flash_messages, location, login_as};

#[tokio::test]
/// Expect redirect home with the user removed from session
async fn clears_user_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, "alice", false).await;

    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());
    assert_eq!(
        flash_messages(&test.session).await,
        vec!["You have been logged out successfully."]
    );

    Ok(())
}

#[tokio::test]
/// Expect redirect home even when nobody is logged in
///
/// The session is only cleared when it holds a user, an empty session is left alone.
async fn redirects_without_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));

    Ok(())
}
