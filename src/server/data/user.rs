use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, non-admin user
    ///
    /// Uniqueness of username and email is enforced by the database, a duplicate surfaces as
    /// a unique constraint violation [`DbErr`].
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserModel, DbErr> {
        let user = entity::halltek_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user whose username equals `identifier` or whose email equals it lower-cased
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::HalltekUser::find()
            .filter(
                Condition::any()
                    .add(entity::halltek_user::Column::Username.eq(identifier))
                    .add(entity::halltek_user::Column::Email.eq(identifier.to_lowercase())),
            )
            .one(self.db)
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::HalltekUser::find()
            .filter(entity::halltek_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::HalltekUser::find()
            .filter(entity::halltek_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Replaces the password hash of an existing user
    ///
    /// Returns `Ok(None)` if no user with `user_id` exists.
    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::HalltekUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash.to_string());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
