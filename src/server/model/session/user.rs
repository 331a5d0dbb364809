use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::session::SessionDto, server::error::Error};

pub const SESSION_USER_KEY: &str = "halltek:user";

/// Logged in user as stored in the session.
///
/// The session holds no database ID, admins logged in through the environment credentials
/// have no user row at all.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl SessionUser {
    /// Insert user into session
    pub async fn insert(session: &Session, user: &SessionUser) -> Result<(), Error> {
        session.insert(SESSION_USER_KEY, user).await?;

        Ok(())
    }

    /// Get user from session
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }

    pub fn to_dto(&self) -> SessionDto {
        SessionDto {
            authenticated: true,
            username: Some(self.username.clone()),
            email: Some(self.email.clone()),
            is_admin: self.is_admin,
        }
    }
}
