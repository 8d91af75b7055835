//! # Trackwise API Server
//!
//! Serves the user, task and inventory endpoints under `/api`.
//!
//! The datastore must already exist with its schema applied; create it with
//! `trackwise-admin create-tables` first.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p trackwise-api --bin trackwise-admin -- create-tables
//! cargo run -p trackwise-api
//! ```

use trackwise_api::{
    app::{build_router, AppState},
    config::Config,
    telemetry,
};
use trackwise_shared::db::{migrations, pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing();

    tracing::info!(
        "Trackwise API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let db = pool::create_pool(config.pool_config()).await.map_err(|e| {
        anyhow::anyhow!(
            "Cannot open database {} ({}); run `trackwise-admin create-tables` first",
            config.database.url,
            e
        )
    })?;

    let status = migrations::get_migration_status(&db).await?;
    if !status.is_up_to_date {
        tracing::warn!(
            applied_migrations = status.applied_migrations,
            "Database schema is missing or outdated; run `trackwise-admin create-tables`"
        );
    }

    tracing::info!(password_scheme = %config.password_scheme, "Password storage configured");

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
