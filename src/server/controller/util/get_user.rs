use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Retrieves the logged in user from the session
///
/// # Returns
/// - `Ok(SessionUser)`: User present in session
/// - `Err(Error::AuthError(AuthError::NotLoggedIn))`: Nobody is logged in
/// - `Err(Error::SessionError)`: Session could not be read
pub async fn require_user(session: &Session) -> Result<SessionUser, Error> {
    SessionUser::get(session)
        .await?
        .ok_or(Error::AuthError(AuthError::NotLoggedIn))
}

/// Retrieves the logged in user and checks for admin privileges
///
/// # Returns
/// - `Ok(SessionUser)`: Admin present in session
/// - `Err(Error::AuthError(AuthError::NotLoggedIn))`: Nobody is logged in
/// - `Err(Error::AuthError(AuthError::NotAdmin))`: Logged in user is not an admin
pub async fn require_admin(session: &Session) -> Result<SessionUser, Error> {
    let user = require_user(session).await?;

    if !user.is_admin {
        tracing::debug!(user = %user.username, "Rejected non-admin user");

        return Err(Error::AuthError(AuthError::NotAdmin));
    }

    Ok(user)
}
