use std::sync::Arc;

use anyhow::Result;
use estimator_client::db::simulation_queries;
use estimator_service::api::{self, AppState};
use estimator_service::config::AppConfig;
use estimator_service::metrics_server;
use estimator_service::observability;
use estimator_service::store::SimulationStore;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;

    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    // The store's availability is fixed here for the lifetime of the
    // process: no connection string means no persistence, and the
    // calculation endpoint runs on its own.
    let store = match &cfg.database {
        Some(db_cfg) => {
            let pool = PgPoolOptions::new()
                .max_connections(db_cfg.max_connections)
                .connect(&db_cfg.url)
                .await?;
            simulation_queries::ensure_schema(&pool).await?;
            tracing::info!("backing store connected");
            SimulationStore::configured(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; simulation history is disabled");
            SimulationStore::unconfigured()
        }
    };

    let state = Arc::new(AppState { store });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(cfg.http_bind_addr.as_str()).await?;
    tracing::info!(addr = %cfg.http_bind_addr, "API server listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
