use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is stored as an argon2 hash.
    pub async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<entity::halltek_user::Model, TestError> {
        let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
            .map_err(|e| TestError::PasswordHashError(e.to_string()))?;
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHashError(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::HalltekUser::insert(entity::halltek_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(email.to_lowercase()),
                password_hash: ActiveValue::Set(password_hash),
                is_admin: ActiveValue::Set(is_admin),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
