use tokio::net::TcpListener;

use api::app::build_router;
use api::gql::build_schema;
use api::state::AppState;
use api::{telemetry, Config};
use infra::Db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Invalid configuration stops the process before anything is bound.
    let config = Config::from_env()?;
    telemetry::init(config.mode);
    tracing::info!(mode = ?config.mode, "Starting food graph");

    let db = Db::new(config.db_config());

    // Run database migrations automatically on startup (can be disabled with SKIP_MIGRATIONS=true)
    if config.skip_migrations {
        tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
    } else {
        tracing::info!("Running database migrations...");
        db.run_migrations().await?;
        tracing::info!("Database migrations completed successfully");
    }

    let addr = config.listen_addr();
    let state = AppState::new(db, config);

    // Conflicting schema modules are fatal here, before the listener exists.
    let schema = build_schema(state.clone())?;
    let app = build_router(state, schema);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
