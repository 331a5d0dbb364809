use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, utoipa::ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Public URL of the product image, either uploaded or external
    pub image: Option<String>,
    pub font_family: Option<String>,
    /// Public URL of an uploaded font file
    pub font_file: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::halltek_product::Model> for ProductDto {
    fn from(model: entity::halltek_product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            image: model.image,
            font_family: model.font_family,
            font_file: model.font_file,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Multipart form accepted when creating or updating a product.
///
/// Only used to describe the request body in the OpenAPI document, the handlers
/// read the fields from the multipart stream directly.
#[allow(dead_code)]
#[derive(utoipa::ToSchema)]
pub struct ProductFormSchema {
    /// Required on create
    pub name: Option<String>,
    /// Required on create, a non-negative number
    pub price: Option<String>,
    pub description: Option<String>,
    pub font_family: Option<String>,
    /// External image URL, ignored when an image file is uploaded
    pub image_url: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub font_file: Option<Vec<u8>>,
}
