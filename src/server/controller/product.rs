use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{ProductDto, ProductFormSchema},
    },
    server::{
        controller::util::{get_user::require_admin, multipart::read_product_form},
        error::{upload::UploadError, Error},
        model::app::AppState,
        service::product::{parse_product_id, ProductService},
    },
};

pub static PRODUCT_TAG: &str = "product";

/// List all products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.uploads);

    let products = product_service.list().await?;

    Ok(Json(products))
}

/// Get a single product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, description = "Product ID is not a number", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let product_id = parse_product_id(&id)?;
    let product_service = ProductService::new(&state.db, &state.uploads);

    let product = product_service.get(product_id).await?;

    Ok(Json(product))
}

/// Create a product, admin only
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body(content = ProductFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid form fields or file type", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Logged in user is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let multipart = multipart.map_err(UploadError::from)?;
    let submission = read_product_form(multipart).await?;
    let product_service = ProductService::new(&state.db, &state.uploads);

    let product = product_service.create(submission).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product, admin only
///
/// Fields that are not sent keep their current value.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = String, Path, description = "Product ID")),
    request_body(content = ProductFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product ID, form fields or file type", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Logged in user is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let product_id = parse_product_id(&id)?;
    let multipart = multipart.map_err(UploadError::from)?;
    let submission = read_product_form(multipart).await?;
    let product_service = ProductService::new(&state.db, &state.uploads);

    let product = product_service.update(product_id, submission).await?;

    Ok(Json(product))
}

/// Delete a product and its uploaded files, admin only
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 400, description = "Product ID is not a number", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Logged in user is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let product_id = parse_product_id(&id)?;
    let product_service = ProductService::new(&state.db, &state.uploads);

    product_service.delete(product_id).await?;

    Ok(Json(MessageDto {
        message: "Product deleted successfully".to_string(),
    }))
}
