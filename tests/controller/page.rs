use axum::{extract::State, http::StatusCode, response::IntoResponse};
use halltek::server::{
    controller::page::{admin_products, dashboard, home, products, rewards},
    model::{
        app::AppState,
        session::flash::{Flash, FlashCategory},
    },
};
use halltek_test_utils::prelude::*;

use crate::util::{body_text, flash_messages, location, login_as};

#[tokio::test]
/// Expect the home page to show and consume pending flashes
async fn home_renders_pending_flashes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Flash::push(&test.session, FlashCategory::Info, "Hello there")
        .await
        .unwrap();

    let resp = home(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Hello there"));
    assert!(flash_messages(&test.session).await.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect the catalogue to list stored products
async fn products_lists_catalogue() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_product("Sticker pack", 2.0)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = products(State(state), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Sticker pack"));

    Ok(())
}

#[tokio::test]
/// Expect the catalogue page to render with an error message when products cannot load
async fn products_survives_database_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let resp = products(State(state), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp)
        .await
        .contains("Unable to load products right now. Please try again later."));

    Ok(())
}

#[tokio::test]
/// Expect anonymous visitors to be sent to login with the rewards page as next target
async fn rewards_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = rewards(test.session.clone()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login?next=/rewards"));

    login_as(&test.session, "alice", false).await;
    let resp = rewards(test.session.clone()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect anonymous visitors to be sent to login with a warning
async fn dashboard_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = dashboard(test.session.clone()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));
    assert_eq!(
        flash_messages(&test.session).await,
        vec!["Please log in to access the dashboard."]
    );

    Ok(())
}

#[tokio::test]
/// Expect the dashboard to greet the logged in user
async fn dashboard_greets_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, "alice", false).await;

    let resp = dashboard(test.session.clone()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Welcome back, alice!"));

    Ok(())
}

#[tokio::test]
/// Expect anonymous visitors to be sent to login and regular users back home
async fn admin_products_requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = admin_products(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login?next=/admin/products"));

    login_as(&test.session, "alice", false).await;
    let resp = admin_products(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    assert_eq!(location(&resp), Some("/"));
    assert_eq!(
        flash_messages(&test.session).await,
        vec!["Admin access required."]
    );

    login_as(&test.session, "admin", true).await;
    let resp = admin_products(State(state), test.session.clone())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
