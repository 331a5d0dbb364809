use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Authentication and account errors.
///
/// The display text of each variant is the message shown to the user, both as a flashed
/// message on HTML pages and as the `message` of JSON error bodies.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required.")]
    MissingCredentials,
    #[error("Invalid username/email or password")]
    InvalidCredentials,
    #[error("All fields are required.")]
    MissingRegistrationFields,
    #[error("Username/Email and new password are required.")]
    MissingResetFields,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("Username already exists. Please choose another.")]
    UsernameTaken,
    #[error("Email already registered. Please use a different email or login.")]
    EmailTaken,
    #[error("Username or email not found.")]
    UserNotFound,
    #[error("Authentication required")]
    NotLoggedIn,
    #[error("Admin access required")]
    NotAdmin,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials
            | Self::MissingRegistrationFields
            | Self::MissingResetFields
            | Self::PasswordTooShort
            | Self::UsernameTaken
            | Self::EmailTaken => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::NotLoggedIn => StatusCode::UNAUTHORIZED,
            Self::NotAdmin => StatusCode::FORBIDDEN,
            Self::UserNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication error: {}", self);

        error_response(self.status(), self.to_string())
    }
}
