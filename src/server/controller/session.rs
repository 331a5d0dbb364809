use axum::{response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, session::SessionDto},
    server::{error::Error, model::session::user::SessionUser},
};

pub static SESSION_TAG: &str = "session";

/// Get the authentication state of the current session
#[utoipa::path(
    get,
    path = "/api/session",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "Authentication state of the current session", body = SessionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, Error> {
    let dto = match SessionUser::get(&session).await? {
        Some(user) => user.to_dto(),
        None => SessionDto::anonymous(),
    };

    Ok(Json(dto))
}
