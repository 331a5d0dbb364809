//! Public and members-only pages.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::{
        app::AppState,
        session::{
            flash::{Flash, FlashCategory},
            user::SessionUser,
        },
    },
    service::product::ProductService,
    view::{self, escape},
};

pub async fn home(session: Session) -> Result<impl IntoResponse, Error> {
    view::render(
        &session,
        "Welcome to Halltek",
        r#"<p>Custom prints, mugs and apparel. <a href="/products">Browse the catalogue</a>.</p>"#,
    )
    .await
}

pub async fn about(session: Session) -> Result<impl IntoResponse, Error> {
    view::render(
        &session,
        "About us",
        "<p>Halltek designs and prints custom merchandise.</p>",
    )
    .await
}

/// Product catalogue
///
/// A failing product query still renders the page, with a flashed error instead of products.
pub async fn products(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.uploads);

    let products = match product_service.list().await {
        Ok(products) => products,
        Err(err) => {
            tracing::error!("Failed to load products: {}", err);

            Flash::push(
                &session,
                FlashCategory::Danger,
                "Unable to load products right now. Please try again later.",
            )
            .await?;

            Vec::new()
        }
    };

    view::render(&session, "Products", &view::product_list(&products)).await
}

pub async fn rewards(session: Session) -> Result<Response, Error> {
    let Some(user) = SessionUser::get(&session).await? else {
        Flash::push(
            &session,
            FlashCategory::Warning,
            "Please log in to view your rewards.",
        )
        .await?;

        return Ok(Redirect::to("/login?next=/rewards").into_response());
    };

    let body = format!(
        "<p>Thanks for shopping with us, {}. Your reward points will appear here.</p>",
        escape(&user.username)
    );

    Ok(view::render(&session, "Rewards", &body).await?.into_response())
}

pub async fn dashboard(session: Session) -> Result<Response, Error> {
    let Some(user) = SessionUser::get(&session).await? else {
        Flash::push(
            &session,
            FlashCategory::Warning,
            "Please log in to access the dashboard.",
        )
        .await?;

        return Ok(Redirect::to("/login").into_response());
    };

    let body = format!(
        "<p>Welcome back, {}!</p><p>Signed in as {}.</p>",
        escape(&user.username),
        escape(&user.email)
    );

    Ok(view::render(&session, "Dashboard", &body).await?.into_response())
}

/// Product management page for administrators
///
/// The page itself lists the catalogue, changes go through the JSON API.
pub async fn admin_products(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let Some(user) = SessionUser::get(&session).await? else {
        return Ok(Redirect::to("/login?next=/admin/products").into_response());
    };

    if !user.is_admin {
        Flash::push(&session, FlashCategory::Danger, "Admin access required.").await?;

        return Ok(Redirect::to("/").into_response());
    }

    let product_service = ProductService::new(&state.db, &state.uploads);

    let products = match product_service.list().await {
        Ok(products) => products,
        Err(err) => {
            tracing::error!("Failed to load products for admin page: {}", err);

            Flash::push(
                &session,
                FlashCategory::Danger,
                "Unable to load products right now. Please try again later.",
            )
            .await?;

            Vec::new()
        }
    };

    let body = format!(
        r#"<p>Create, edit and delete products through <code>/api/products</code>. <a href="/api/docs">API documentation</a></p>{}"#,
        view::product_list(&products)
    );

    Ok(view::render(&session, "Manage products", &body)
        .await?
        .into_response())
}
