use axum::response::IntoResponse;
use halltek::{model::session::SessionDto, server::controller::session::get_session};
use halltek_test_utils::prelude::*;

use crate::util::{body_json, login_as};

#[tokio::test]
/// Expect an unauthenticated state for an empty session
async fn reports_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_session(test.session.clone()).await.unwrap();
    let dto: SessionDto = body_json(resp.into_response()).await;

    assert_eq!(dto, SessionDto::anonymous());

    Ok(())
}

#[tokio::test]
/// Expect the logged in user's details
async fn reports_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, "admin", true).await;

    let resp = get_session(test.session.clone()).await.unwrap();
    let dto: SessionDto = body_json(resp).await;

    assert!(dto.authenticated);
    assert_eq!(dto.username.as_deref(), Some("admin"));
    assert_eq!(dto.email.as_deref(), Some("admin@example.com"));
    assert!(dto.is_admin);

    Ok(())
}
