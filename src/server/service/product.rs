//! Product catalogue service.
//!
//! Validates product submissions, stores their image and font uploads and keeps the upload
//! directory in step with the product table: files are only written once a submission is
//! valid, and files no product references any more are removed.

use sea_orm::DatabaseConnection;

use crate::{
    model::product::ProductDto,
    server::{
        data::product::{ProductFields, ProductRepository},
        error::{product::ProductError, Error},
        model::product::{ProductSubmission, UploadedFile},
        storage::{UploadKind, UploadStore},
    },
};

/// Parses a product ID received as a path segment.
pub fn parse_product_id(raw: &str) -> Result<i32, ProductError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ProductError::InvalidId(raw.to_string()))
}

/// Parses a submitted price, which must be a finite number of at least zero.
pub fn parse_price(raw: &str) -> Result<f64, ProductError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ProductError::InvalidPrice(raw.to_string())),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Lists every product, newest first.
    pub async fn list(&self) -> Result<Vec<ProductDto>, Error> {
        let products = ProductRepository::new(self.db).get_all().await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn get(&self, product_id: i32) -> Result<ProductDto, Error> {
        let product = ProductRepository::new(self.db)
            .get_by_id(product_id)
            .await?
            .ok_or(ProductError::NotFound(product_id))?;

        Ok(product.into())
    }

    /// Creates a product from a submitted form.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The stored product
    /// - `Err(Error::ProductError(_))` - Name or price missing, price invalid
    /// - `Err(Error::UploadError(_))` - An uploaded file has a disallowed extension
    /// - `Err(Error::DbErr)` - Insert failed, any files saved for the product are removed
    pub async fn create(&self, submission: ProductSubmission) -> Result<ProductDto, Error> {
        let name = non_empty(submission.name).ok_or(ProductError::MissingName)?;
        let price = non_empty(submission.price).ok_or(ProductError::MissingPrice)?;
        let price = parse_price(&price)?;

        let (image_url, font_url) = self
            .save_uploads(submission.image.as_ref(), submission.font_file.as_ref())
            .await?;

        let fields = ProductFields {
            name,
            description: submission.description.unwrap_or_default(),
            price,
            image: image_url.clone().or(non_empty(submission.image_url)),
            font_family: non_empty(submission.font_family),
            font_file: font_url.clone(),
        };

        let product = match ProductRepository::new(self.db).create(fields).await {
            Ok(product) => product,
            Err(err) => {
                self.discard_all([image_url, font_url]).await;

                return Err(err.into());
            }
        };

        tracing::info!(product_id = product.id, name = %product.name, "Created product");

        Ok(product.into())
    }

    /// Applies a submitted form to an existing product.
    ///
    /// Fields that were not sent keep their stored value. A new upload replaces the previous
    /// file, which is then removed from the upload directory.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The updated product
    /// - `Err(Error::ProductError(ProductError::NotFound(_)))` - No product with `product_id`
    /// - `Err(Error::ProductError(_))` - Blank name or price, invalid price
    /// - `Err(Error::UploadError(_))` - An uploaded file has a disallowed extension
    /// - `Err(Error::DbErr)` - Lookup or update failed
    pub async fn update(
        &self,
        product_id: i32,
        submission: ProductSubmission,
    ) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let existing = product_repo
            .get_by_id(product_id)
            .await?
            .ok_or(ProductError::NotFound(product_id))?;

        let mut fields = ProductFields::from(&existing);

        if let Some(name) = submission.name {
            if name.is_empty() {
                return Err(ProductError::MissingName.into());
            }
            fields.name = name;
        }
        if let Some(price) = submission.price {
            if price.is_empty() {
                return Err(ProductError::MissingPrice.into());
            }
            fields.price = parse_price(&price)?;
        }
        if let Some(description) = submission.description {
            fields.description = description;
        }
        if let Some(font_family) = submission.font_family {
            fields.font_family = non_empty(Some(font_family));
        }

        let (image_url, font_url) = self
            .save_uploads(submission.image.as_ref(), submission.font_file.as_ref())
            .await?;

        if let Some(url) = image_url.clone().or(non_empty(submission.image_url)) {
            fields.image = Some(url);
        }
        if let Some(url) = font_url.clone() {
            fields.font_file = Some(url);
        }

        let updated = match product_repo.update(product_id, fields).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.discard_all([image_url, font_url]).await;

                return Err(ProductError::NotFound(product_id).into());
            }
            Err(err) => {
                self.discard_all([image_url, font_url]).await;

                return Err(err.into());
            }
        };

        // Drop files the product no longer points at
        if existing.image.is_some() && existing.image != updated.image {
            self.release_all([existing.image]).await;
        }
        if existing.font_file.is_some() && existing.font_file != updated.font_file {
            self.release_all([existing.font_file]).await;
        }

        tracing::info!(product_id = updated.id, "Updated product");

        Ok(updated.into())
    }

    /// Deletes a product along with its uploaded files.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(Error::ProductError(ProductError::NotFound(_)))` - No product with `product_id`
    /// - `Err(Error::DbErr)` - Lookup or delete failed
    pub async fn delete(&self, product_id: i32) -> Result<(), Error> {
        let product_repo = ProductRepository::new(self.db);

        let existing = product_repo
            .get_by_id(product_id)
            .await?
            .ok_or(ProductError::NotFound(product_id))?;

        let result = product_repo.delete(product_id).await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(product_id).into());
        }

        self.release_all([existing.image, existing.font_file]).await;

        tracing::info!(product_id = product_id, "Deleted product");

        Ok(())
    }

    /// Validates both uploads before writing either of them.
    async fn save_uploads(
        &self,
        image: Option<&UploadedFile>,
        font_file: Option<&UploadedFile>,
    ) -> Result<(Option<String>, Option<String>), Error> {
        if let Some(file) = image {
            UploadKind::Image.validate(&file.file_name)?;
        }
        if let Some(file) = font_file {
            UploadKind::Font.validate(&file.file_name)?;
        }

        let image_url = match image {
            Some(file) => Some(self.uploads.save(UploadKind::Image, file).await?),
            None => None,
        };

        let font_url = match font_file {
            Some(file) => match self.uploads.save(UploadKind::Font, file).await {
                Ok(url) => Some(url),
                Err(err) => {
                    self.discard_all([image_url]).await;

                    return Err(err);
                }
            },
            None => None,
        };

        Ok((image_url, font_url))
    }

    async fn discard_all<const N: usize>(&self, urls: [Option<String>; N]) {
        for url in urls.into_iter().flatten() {
            self.uploads.discard(&url).await;
        }
    }

    /// Discards files a product stopped pointing at, unless another product still uses them.
    async fn release_all<const N: usize>(&self, urls: [Option<String>; N]) {
        let product_repo = ProductRepository::new(self.db);

        for url in urls.into_iter().flatten() {
            match product_repo.count_referencing(&url).await {
                Ok(0) => self.uploads.discard(&url).await,
                Ok(count) => {
                    tracing::debug!(url = %url, count, "Keeping file still used by other products")
                }
                Err(err) => {
                    tracing::warn!(url = %url, "Failed to check file references, keeping it: {}", err)
                }
            }
        }
    }
}
