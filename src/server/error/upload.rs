use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unsupported file type for {field}: {file_name:?}")]
    UnsupportedFileType { field: String, file_name: String },
    #[error("Uploaded file for {field} is empty")]
    EmptyFile { field: String },
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    /// Request body is not a `multipart/form-data` body
    #[error(transparent)]
    NotMultipart(#[from] MultipartRejection),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("Upload error: {}", self);

        match self {
            Self::Multipart(err) => error_response(err.status(), err.body_text()),
            Self::NotMultipart(err) => error_response(err.status(), err.body_text()),
            err => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}
