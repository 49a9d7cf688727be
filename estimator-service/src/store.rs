use estimator_client::db::simulation_queries;
use estimator_client::domain::{compute, CalculationInput, SimulationRecord};
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("simulation store is not configured")]
    Unavailable,
    #[error("backing store error: {0}")]
    Backend(anyhow::Error),
}

/// Persistence component for simulation records.
///
/// Whether the store is configured is decided once at startup, from the
/// presence of a connection string, and injected here; in the
/// unconfigured state both operations fail before attempting any I/O so
/// the calculation path keeps working without a database.
#[derive(Clone)]
pub enum SimulationStore {
    Configured { pool: PgPool },
    Unconfigured,
}

impl SimulationStore {
    pub fn configured(pool: PgPool) -> Self {
        Self::Configured { pool }
    }

    pub fn unconfigured() -> Self {
        Self::Unconfigured
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured { .. })
    }

    /// Persists one simulation and returns the stored record.
    ///
    /// The result fields are recomputed from the inputs here; a
    /// client-supplied result is never stored, so persisted results cannot
    /// drift from the input-to-result mapping.
    pub async fn save(&self, input: &CalculationInput) -> Result<SimulationRecord, StoreError> {
        match self {
            Self::Unconfigured => Err(StoreError::Unavailable),
            Self::Configured { pool } => {
                let result = compute(input);
                match simulation_queries::insert_simulation(pool, input, &result).await {
                    Ok(record) => {
                        metrics::counter!("simulations_saved_total").increment(1);
                        Ok(record)
                    }
                    Err(e) => {
                        metrics::counter!("store_errors_total").increment(1);
                        Err(StoreError::Backend(e))
                    }
                }
            }
        }
    }

    /// Returns all saved simulations, newest first. Each call is an
    /// independent snapshot.
    pub async fn list(&self) -> Result<Vec<SimulationRecord>, StoreError> {
        match self {
            Self::Unconfigured => Err(StoreError::Unavailable),
            Self::Configured { pool } => {
                match simulation_queries::list_simulations(pool).await {
                    Ok(records) => {
                        metrics::counter!("simulations_listed_total").increment(1);
                        Ok(records)
                    }
                    Err(e) => {
                        metrics::counter!("store_errors_total").increment(1);
                        Err(StoreError::Backend(e))
                    }
                }
            }
        }
    }
}
