use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProductError {
    #[error("Invalid product id: {0:?}")]
    InvalidId(String),
    #[error("Product ID {0} not found")]
    NotFound(i32),
    #[error("Product name is required")]
    MissingName,
    #[error("Price is required")]
    MissingPrice,
    #[error("Price must be a valid non-negative number")]
    InvalidPrice(String),
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        tracing::debug!("Product error: {}", self);

        match self {
            Self::InvalidId(_) => error_response(StatusCode::BAD_REQUEST, "Invalid product id"),
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Product not found"),
            err => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}
