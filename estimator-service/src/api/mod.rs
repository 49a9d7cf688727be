//! HTTP JSON API for the estimator.
//!
//! Routes:
//! - `POST /api/calculate` — stateless energy/cost estimate
//! - `GET /api/simulations` — saved estimates, newest first
//! - `POST /api/simulations` — persist an estimate

mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::store::SimulationStore;

/// State shared across request handlers.
pub struct AppState {
    pub store: SimulationStore,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/calculate", post(handlers::calculate))
        .route(
            "/api/simulations",
            get(handlers::list_simulations).post(handlers::save_simulation),
        )
        .with_state(state)
}
