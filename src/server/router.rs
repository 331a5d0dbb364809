//! HTTP routing and OpenAPI documentation configuration.
//!
//! The JSON API is registered through utoipa so its OpenAPI document stays in step with the
//! handlers, Swagger UI serves it at `/api/docs`. The HTML pages are plain axum routes.

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, storage::UPLOAD_URL_PREFIX};

/// Builds the application's HTTP router with all pages, API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /`, `/about`, `/products`, `/rewards`, `/dashboard`, `/admin/products` - Pages
/// - `GET|POST /login`, `/register`, `/forgot` - Account forms
/// - `GET /logout` - Logout current user
/// - `GET|POST /api/products` - List or create products
/// - `GET|PUT|DELETE /api/products/{id}` - Read, update or delete a product
/// - `GET /api/session` - Authentication state of the current session
///
/// The session layer and state are applied by the caller.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Halltek", description = "Halltek storefront API"), tags(
        (name = controller::product::PRODUCT_TAG, description = "Product catalogue API routes"),
        (name = controller::session::SESSION_TAG, description = "Session state API routes"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::product::list_products,
            controller::product::create_product
        ))
        .routes(routes!(
            controller::product::get_product,
            controller::product::update_product,
            controller::product::delete_product
        ))
        .routes(routes!(controller::session::get_session))
        .split_for_parts();

    let page_routes = Router::new()
        .route("/", get(controller::page::home))
        .route("/about", get(controller::page::about))
        .route("/products", get(controller::page::products))
        .route("/rewards", get(controller::page::rewards))
        .route("/dashboard", get(controller::page::dashboard))
        .route("/admin/products", get(controller::page::admin_products))
        .route(
            "/login",
            get(controller::auth::login_page).post(controller::auth::login_submit),
        )
        .route(
            "/register",
            get(controller::auth::register_page).post(controller::auth::register_submit),
        )
        .route(
            "/forgot",
            get(controller::auth::forgot_page).post(controller::auth::forgot_submit),
        )
        .route("/logout", get(controller::auth::logout));

    page_routes
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Binds [`routes`] to `state` and serves the upload directory under [`UPLOAD_URL_PREFIX`].
///
/// The session layer is still applied by the caller.
pub fn app(state: AppState) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    routes()
        .with_state(state)
        .nest_service(UPLOAD_URL_PREFIX, uploads)
}
