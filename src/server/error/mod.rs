//! Error types for the Halltek server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, products, uploads). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod product;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, product::ProductError, upload::UploadError,
    },
};

/// Message shown to users when a request fails for reasons they cannot fix.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Main error type for the Halltek server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, registration, missing session, missing privileges).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Product error (invalid ID, unknown product, field validation).
    #[error(transparent)]
    ProductError(#[from] ProductError),
    /// Upload error (unsupported file type, empty file, malformed multipart body).
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Filesystem error from the upload store or while binding the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status code mapping, everything else is treated as an
/// internal server error which is logged with its full message.
///
/// # Returns
/// - 400 Bad Request - Validation failures, invalid product IDs, rejected uploads
/// - 401 Unauthorized - No user in session or invalid credentials
/// - 403 Forbidden - Logged in user lacks admin privileges
/// - 404 Not Found - Missing products or users
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ProductError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error body used by every error response.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
