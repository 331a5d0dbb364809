use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HalltekUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HalltekUser::Id))
                    .col(string_uniq(HalltekUser::Username))
                    .col(string_uniq(HalltekUser::Email))
                    .col(string(HalltekUser::PasswordHash))
                    .col(boolean(HalltekUser::IsAdmin).default(false))
                    .col(timestamp(HalltekUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HalltekUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HalltekUser {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    IsAdmin,
    CreatedAt,
}
