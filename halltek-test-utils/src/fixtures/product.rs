use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn product<'a>(&'a self) -> ProductFixtures<'a> {
        ProductFixtures { setup: self }
    }
}

pub struct ProductFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ProductFixtures<'a> {
    /// Insert a product with an empty description and no files.
    ///
    /// Creation timestamps are spaced one second apart per existing product so ordering by
    /// `created_at` follows insertion order.
    pub async fn insert_product(
        &self,
        name: &str,
        price: f64,
    ) -> Result<entity::halltek_product::Model, TestError> {
        let existing = entity::prelude::HalltekProduct::find()
            .count(&self.setup.db)
            .await?;
        let created_at = Utc::now().naive_utc() + Duration::seconds(existing as i64);

        Ok(
            entity::prelude::HalltekProduct::insert(entity::halltek_product::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(String::new()),
                price: ActiveValue::Set(price),
                image: ActiveValue::Set(None),
                font_family: ActiveValue::Set(None),
                font_file: ActiveValue::Set(None),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
