use serde::{Deserialize, Serialize};

/// Authentication state of the caller's session
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct SessionDto {
    pub authenticated: bool,
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
}

impl SessionDto {
    /// Session state for a caller who is not logged in
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            username: None,
            email: None,
            is_admin: false,
        }
    }
}
