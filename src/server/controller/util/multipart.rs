use axum::extract::Multipart;

use crate::server::{
    error::{upload::UploadError, Error},
    model::product::{ProductSubmission, UploadedFile},
};

/// Reads a product form from a multipart body.
///
/// Unknown fields are skipped. File parts without a file name or without content count as
/// not sent, which is what browsers submit for an empty file input.
pub async fn read_product_form(mut multipart: Multipart) -> Result<ProductSubmission, Error> {
    let mut submission = ProductSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" | "font_file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(UploadError::from)?;

                if file_name.is_empty() || bytes.is_empty() {
                    continue;
                }

                let file = Some(UploadedFile {
                    file_name,
                    bytes: bytes.to_vec(),
                });

                if name == "image" {
                    submission.image = file;
                } else {
                    submission.font_file = file;
                }
            }
            "name" | "description" | "price" | "font_family" | "image_url" => {
                let value = Some(field.text().await.map_err(UploadError::from)?.trim().to_string());

                match name.as_str() {
                    "name" => submission.name = value,
                    "description" => submission.description = value,
                    "price" => submission.price = value,
                    "font_family" => submission.font_family = value,
                    _ => submission.image_url = value,
                }
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown product form field");
            }
        }
    }

    Ok(submission)
}
