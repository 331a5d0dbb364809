//! Login, registration, password reset and logout pages.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::redirect::safe_redirect_target,
    error::{Error, GENERIC_FAILURE_MESSAGE},
    model::{
        app::AppState,
        session::{
            flash::{Flash, FlashCategory},
            user::SessionUser,
        },
    },
    service::auth::AuthService,
    view,
};

#[derive(Deserialize)]
pub struct NextParams {
    pub next: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ForgotForm {
    /// Username or email
    pub username: String,
    pub new_password: String,
}

/// Flashes a failed form submission and returns the status to render the form with.
///
/// Authentication errors carry their own message, anything else is logged and replaced by
/// the generic failure message.
async fn flash_failure(session: &Session, err: Error) -> Result<StatusCode, Error> {
    let (status, message) = match err {
        Error::AuthError(err) => (err.status(), err.to_string()),
        err => {
            tracing::error!("{}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_MESSAGE.to_string(),
            )
        }
    };

    Flash::push(session, FlashCategory::Danger, message).await?;

    Ok(status)
}

pub async fn login_page(
    session: Session,
    Query(params): Query<NextParams>,
) -> Result<impl IntoResponse, Error> {
    let next = safe_redirect_target(params.next.as_deref());

    view::render(&session, "Login", &view::login_form(next)).await
}

/// Logs a user in and redirects to the requested page
///
/// On success the session ID is rotated before the user is stored. The redirect target is
/// the submitted `next` path when it is a local path, otherwise the home page or the product
/// admin page for administrators.
///
/// # Returns
/// - 303 See Other: Logged in, redirect to target
/// - 400 Bad Request: Username or password missing, form re-rendered
/// - 401 Unauthorized: Invalid credentials, form re-rendered
/// - 500 Internal Server Error: User lookup failed, form re-rendered
pub async fn login_submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db, state.admin.as_ref());

    let user = match auth_service.login(&form.username, &form.password).await {
        Ok(user) => user,
        Err(err) => {
            let status = flash_failure(&session, err).await?;
            let next = safe_redirect_target(form.next.as_deref());
            let page = view::render(&session, "Login", &view::login_form(next)).await?;

            return Ok((status, page).into_response());
        }
    };

    session.cycle_id().await?;
    SessionUser::insert(&session, &user).await?;

    let (message, default_target) = if user.is_admin {
        ("Welcome back, admin!", "/admin/products")
    } else {
        ("Login successful!", "/")
    };

    Flash::push(&session, FlashCategory::Success, message).await?;

    let target = safe_redirect_target(form.next.as_deref()).unwrap_or(default_target);

    Ok(Redirect::to(target).into_response())
}

pub async fn register_page(session: Session) -> Result<impl IntoResponse, Error> {
    view::render(&session, "Register", &view::register_form()).await
}

/// Creates an account and sends the user to the login page
///
/// # Returns
/// - 303 See Other: Registered, redirect to `/login`
/// - 400 Bad Request: Missing field, short password or taken username/email, form re-rendered
/// - 500 Internal Server Error: Database failure, form re-rendered
pub async fn register_submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db, state.admin.as_ref());

    if let Err(err) = auth_service
        .register(&form.username, &form.email, &form.password)
        .await
    {
        let status = flash_failure(&session, err).await?;
        let page = view::render(&session, "Register", &view::register_form()).await?;

        return Ok((status, page).into_response());
    }

    Flash::push(
        &session,
        FlashCategory::Success,
        "Registration successful! Please log in.",
    )
    .await?;

    Ok(Redirect::to("/login").into_response())
}

pub async fn forgot_page(session: Session) -> Result<impl IntoResponse, Error> {
    view::render(&session, "Reset password", &view::forgot_form()).await
}

/// Resets the password of the user matching the submitted username or email
///
/// # Returns
/// - 303 See Other: Password replaced, redirect to `/login`
/// - 400 Bad Request: Missing field or short password, form re-rendered
/// - 404 Not Found: No user matches, form re-rendered
/// - 500 Internal Server Error: Database failure, form re-rendered
pub async fn forgot_submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ForgotForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db, state.admin.as_ref());

    if let Err(err) = auth_service
        .reset_password(&form.username, &form.new_password)
        .await
    {
        let status = flash_failure(&session, err).await?;
        let page = view::render(&session, "Reset password", &view::forgot_form()).await?;

        return Ok((status, page).into_response());
    }

    Flash::push(
        &session,
        FlashCategory::Success,
        "Password reset successful! Please log in with your new password.",
    )
    .await?;

    Ok(Redirect::to("/login").into_response())
}

/// Logs the user out and returns to the home page
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if let Some(user) = SessionUser::get(&session).await? {
        session.clear().await;

        tracing::debug!(user = %user.username, "User logged out");
    }

    Flash::push(
        &session,
        FlashCategory::Info,
        "You have been logged out successfully.",
    )
    .await?;

    Ok(Redirect::to("/"))
}
