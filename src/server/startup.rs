use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha512};
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer, SessionStore,
};

use crate::server::{config::Config, error::Error, storage::UploadStore};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Derives the 64 byte cookie signing key from the configured secret.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());

    Key::from(digest.as_slice())
}

/// Configure session management with signed cookies
pub fn build_session_layer<S: SessionStore>(
    store: S,
    secret: &str,
) -> SessionManagerLayer<S, SignedCookie> {
    use time::Duration;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(session_key(secret))
}

/// Create the upload directory so uploads and static serving work from the first request
pub async fn prepare_upload_store(config: &Config) -> Result<UploadStore, Error> {
    let uploads = UploadStore::new(&config.upload_dir);
    uploads.ensure_dir().await?;

    Ok(uploads)
}
