use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{config::AdminCredentials, storage::UploadStore};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub uploads: UploadStore,
    pub admin: Option<AdminCredentials>,
}

/// Builds state without admin credentials from a database connection and upload directory.
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, upload_dir): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            uploads: UploadStore::new(upload_dir),
            admin: None,
        }
    }
}
