//! One-shot messages carried across a redirect.
//!
//! Handlers push flashes before redirecting and the next rendered page takes them out of the
//! session, so each message is shown exactly once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_FLASH_KEY: &str = "halltek:flash";

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
    Warning,
    Info,
}

impl FlashCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    /// Appends a message to the queue of pending flashes.
    pub async fn push(
        session: &Session,
        category: FlashCategory,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        let mut pending: Vec<Flash> = session.get(SESSION_FLASH_KEY).await?.unwrap_or_default();

        pending.push(Flash {
            category,
            message: message.into(),
        });

        session.insert(SESSION_FLASH_KEY, pending).await?;

        Ok(())
    }

    /// Removes and returns all pending flashes in the order they were pushed.
    pub async fn take(session: &Session) -> Result<Vec<Flash>, Error> {
        Ok(session
            .remove::<Vec<Flash>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}
