use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::ProductModel;

/// Values written for a product on create and update.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub font_family: Option<String>,
    pub font_file: Option<String>,
}

impl From<&ProductModel> for ProductFields {
    fn from(model: &ProductModel) -> Self {
        Self {
            name: model.name.clone(),
            description: model.description.clone(),
            price: model.price,
            image: model.image.clone(),
            font_family: model.font_family.clone(),
            font_file: model.font_file.clone(),
        }
    }
}

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: ProductFields) -> Result<ProductModel, DbErr> {
        let now = Utc::now().naive_utc();

        let product = entity::halltek_product::ActiveModel {
            name: ActiveValue::Set(fields.name),
            description: ActiveValue::Set(fields.description),
            price: ActiveValue::Set(fields.price),
            image: ActiveValue::Set(fields.image),
            font_family: ActiveValue::Set(fields.font_family),
            font_file: ActiveValue::Set(fields.font_file),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    /// Gets all products, newest first
    pub async fn get_all(&self) -> Result<Vec<ProductModel>, DbErr> {
        entity::prelude::HalltekProduct::find()
            .order_by_desc(entity::halltek_product::Column::CreatedAt)
            .order_by_desc(entity::halltek_product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, product_id: i32) -> Result<Option<ProductModel>, DbErr> {
        entity::prelude::HalltekProduct::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Counts products whose image or font file is `url`
    pub async fn count_referencing(&self, url: &str) -> Result<u64, DbErr> {
        entity::prelude::HalltekProduct::find()
            .filter(
                Condition::any()
                    .add(entity::halltek_product::Column::Image.eq(url))
                    .add(entity::halltek_product::Column::FontFile.eq(url)),
            )
            .count(self.db)
            .await
    }

    /// Overwrites every field of an existing product and bumps `updated_at`
    ///
    /// Returns `Ok(None)` if no product with `product_id` exists.
    pub async fn update(
        &self,
        product_id: i32,
        fields: ProductFields,
    ) -> Result<Option<ProductModel>, DbErr> {
        let product = match entity::prelude::HalltekProduct::find_by_id(product_id)
            .one(self.db)
            .await?
        {
            Some(product) => product,
            None => return Ok(None),
        };

        let mut product_am = product.into_active_model();
        product_am.name = ActiveValue::Set(fields.name);
        product_am.description = ActiveValue::Set(fields.description);
        product_am.price = ActiveValue::Set(fields.price);
        product_am.image = ActiveValue::Set(fields.image);
        product_am.font_family = ActiveValue::Set(fields.font_family);
        product_am.font_file = ActiveValue::Set(fields.font_file);
        product_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// Deletes a product
    ///
    /// Returns OK regardless of product existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::HalltekProduct::delete_by_id(product_id)
            .exec(self.db)
            .await
    }
}
