use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use halltek::{
    model::{
        api::{ErrorDto, MessageDto},
        product::ProductDto,
    },
    server::{
        controller::product::{delete_product, get_product, list_products},
        model::app::AppState,
    },
};
use halltek_test_utils::prelude::*;

use crate::util::{body_json, login_as};

#[tokio::test]
/// Expect all products, newest first
async fn lists_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_product("Mug", 3.0)
        .with_product("Shirt", 15.0)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = list_products(State(state)).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<ProductDto> = body_json(resp).await;
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Shirt", "Mug"]);

    Ok(())
}

#[tokio::test]
/// Expect the product for a valid ID
async fn gets_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product = test.product().insert_product("Mug", 3.0).await?;
    let state: AppState = test.to_app_state();

    let resp = get_product(State(state), Path(product.id.to_string()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let dto: ProductDto = body_json(resp).await;
    assert_eq!(dto.id, product.id);
    assert_eq!(dto.name, "Mug");

    Ok(())
}

#[tokio::test]
/// Expect 400 for a non-numeric ID and 404 for an unknown one
async fn rejects_invalid_and_unknown_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let state: AppState = test.to_app_state();

    let err = get_product(State(state.clone()), Path("abc".to_string()))
        .await
        .err()
        .unwrap();
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.message, "Invalid product id");

    let err = get_product(State(state), Path("999".to_string()))
        .await
        .err()
        .unwrap();
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.message, "Product not found");

    Ok(())
}

#[tokio::test]
/// Expect 401 for anonymous and 403 for regular users on delete
async fn delete_requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product = test.product().insert_product("Mug", 3.0).await?;
    let state: AppState = test.to_app_state();

    let err = delete_product(
        State(state.clone()),
        test.session.clone(),
        Path(product.id.to_string()),
    )
    .await
    .err()
    .unwrap();
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    login_as(&test.session, "alice", false).await;
    let err = delete_product(
        State(state),
        test.session.clone(),
        Path(product.id.to_string()),
    )
    .await
    .err()
    .unwrap();
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect the success message and the product gone after an admin delete
async fn admin_deletes_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product = test.product().insert_product("Mug", 3.0).await?;
    let state: AppState = test.to_app_state();
    login_as(&test.session, "admin", true).await;

    let resp = delete_product(
        State(state.clone()),
        test.session.clone(),
        Path(product.id.to_string()),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Product deleted successfully");

    let err = get_product(State(state), Path(product.id.to_string()))
        .await
        .err()
        .unwrap();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
