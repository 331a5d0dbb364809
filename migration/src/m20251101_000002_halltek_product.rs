use sea_orm_migration::{prelude::*, schema::*};

static IDX_HALLTEK_PRODUCT_CREATED_AT: &str = "idx-halltek_product-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HalltekProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(HalltekProduct::Id))
                    .col(string(HalltekProduct::Name))
                    .col(text(HalltekProduct::Description))
                    .col(double(HalltekProduct::Price))
                    .col(string_null(HalltekProduct::Image))
                    .col(string_null(HalltekProduct::FontFamily))
                    .col(string_null(HalltekProduct::FontFile))
                    .col(timestamp(HalltekProduct::CreatedAt))
                    .col(timestamp(HalltekProduct::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HALLTEK_PRODUCT_CREATED_AT)
                    .table(HalltekProduct::Table)
                    .col(HalltekProduct::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HALLTEK_PRODUCT_CREATED_AT)
                    .table(HalltekProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HalltekProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HalltekProduct {
    Table,
    Id,
    Name,
    Description,
    Price,
    Image,
    FontFamily,
    FontFile,
    CreatedAt,
    UpdatedAt,
}
