use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;
use tower_sessions::MemoryStore;
use tracing_subscriber::EnvFilter;

use halltek::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let uploads = startup::prepare_upload_store(&config).await?;
    let session = startup::build_session_layer(MemoryStore::default(), &config.secret_key);

    if config.admin.is_none() {
        tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, administrator login is disabled");
    }

    let state = AppState {
        db,
        uploads,
        admin: config.admin.clone(),
    };

    let app = router::app(state)
        .layer(session)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
