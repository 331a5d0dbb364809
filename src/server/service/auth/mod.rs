//! Account authentication service.
//!
//! Handles password logins (including the administrator account configured through the
//! environment), self-service registration and password resets against the user table.

pub mod password;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    config::AdminCredentials,
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
    service::auth::password::{hash_password, verify_password},
};

/// Shortest password accepted on registration and reset.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin: Option<&'a AdminCredentials>,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `admin` - Administrator credentials, `None` disables the admin login
    pub fn new(db: &'a DatabaseConnection, admin: Option<&'a AdminCredentials>) -> Self {
        Self { db, admin }
    }

    /// Authenticates a user by username or email and password.
    ///
    /// The administrator credentials are checked first and never touch the database.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Credentials are valid, user to store in the session
    /// - `Err(Error::AuthError(AuthError::MissingCredentials))` - Identifier or password empty
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(Error::DbErr)` - User lookup failed
    pub async fn login(&self, identifier: &str, password: &str) -> Result<SessionUser, Error> {
        let identifier = identifier.trim();

        if identifier.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        if let Some(admin) = self.admin {
            if admin.matches(identifier, password) {
                tracing::info!(user = %admin.username, "Administrator logged in");

                return Ok(SessionUser {
                    username: admin.username.clone(),
                    email: admin.email.clone(),
                    is_admin: true,
                });
            }
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_identifier(identifier).await? else {
            tracing::debug!(identifier = %identifier, "Login attempt for unknown user");

            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::debug!(user = %user.username, "Login attempt with wrong password");

            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user = %user.username, "User logged in");

        Ok(SessionUser {
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
        })
    }

    /// Creates a new account.
    ///
    /// The username is trimmed and the email trimmed and lower-cased before any check.
    ///
    /// # Returns
    /// - `Ok(())` - Account created
    /// - `Err(Error::AuthError(_))` - A field is missing, the password is too short or the
    ///   username or email is already registered
    /// - `Err(Error::DbErr)` - Lookup or insert failed
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), Error> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingRegistrationFields.into());
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort.into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(password).await?;

        match user_repo.create(username, &email, &password_hash).await {
            Ok(user) => {
                tracing::info!(user = %user.username, "Registered new user");

                Ok(())
            }
            Err(err) => Err(map_unique_violation(err)),
        }
    }

    /// Replaces the password of the user matching `identifier` (username or email).
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(Error::AuthError(AuthError::MissingResetFields))` - Identifier or password empty
    /// - `Err(Error::AuthError(AuthError::PasswordTooShort))` - New password too short
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No matching user
    /// - `Err(Error::DbErr)` - Lookup or update failed
    pub async fn reset_password(&self, identifier: &str, new_password: &str) -> Result<(), Error> {
        let identifier = identifier.trim();

        if identifier.is_empty() || new_password.is_empty() {
            return Err(AuthError::MissingResetFields.into());
        }

        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort.into());
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_identifier(identifier).await? else {
            return Err(AuthError::UserNotFound.into());
        };

        let password_hash = hash_password(new_password).await?;

        if user_repo
            .update_password(user.id, &password_hash)
            .await?
            .is_none()
        {
            // Deleted between the lookup and the update
            return Err(AuthError::UserNotFound.into());
        }

        tracing::info!(user = %user.username, "Password reset");

        Ok(())
    }
}

/// Turns a unique constraint violation on insert into the matching "already taken" error.
fn map_unique_violation(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            if detail.to_lowercase().contains("email") {
                AuthError::EmailTaken.into()
            } else {
                AuthError::UsernameTaken.into()
            }
        }
        _ => err.into(),
    }
}
