use anyhow::Result;
use sqlx::PgPool;

use crate::domain::{CalculationInput, CalculationResult, SimulationRecord};

/// Creates the simulations table and its listing index if they do not
/// exist yet. Run once at startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS simulations (
            id              BIGSERIAL PRIMARY KEY,
            power           DOUBLE PRECISION NOT NULL,
            hours_per_day   DOUBLE PRECISION NOT NULL,
            days_per_month  DOUBLE PRECISION NOT NULL,
            months_per_year DOUBLE PRECISION NOT NULL,
            cost_per_kwh    DOUBLE PRECISION NOT NULL,
            monthly_kwh     DOUBLE PRECISION NOT NULL,
            annual_kwh      DOUBLE PRECISION NOT NULL,
            monthly_cost    DOUBLE PRECISION NOT NULL,
            annual_cost     DOUBLE PRECISION NOT NULL,
            created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS simulations_created_at_idx
         ON simulations (created_at DESC, id DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Appends one simulation in a single statement; the database assigns
/// `id` and `created_at` and the full row is returned, so a successful
/// insert is immediately visible to subsequent reads.
pub async fn insert_simulation(
    pool: &PgPool,
    input: &CalculationInput,
    result: &CalculationResult,
) -> Result<SimulationRecord> {
    let record = sqlx::query_as::<_, SimulationRecord>(
        r#"
        INSERT INTO simulations (
            power, hours_per_day, days_per_month, months_per_year, cost_per_kwh,
            monthly_kwh, annual_kwh, monthly_cost, annual_cost
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING
            id,
            power,
            hours_per_day,
            days_per_month,
            months_per_year,
            cost_per_kwh,
            monthly_kwh,
            annual_kwh,
            monthly_cost,
            annual_cost,
            created_at
        "#,
    )
    .bind(input.power)
    .bind(input.hours_per_day)
    .bind(input.days_per_month)
    .bind(input.months_per_year)
    .bind(input.cost_per_kwh)
    .bind(result.monthly_kwh)
    .bind(result.annual_kwh)
    .bind(result.monthly_cost)
    .bind(result.annual_cost)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// Fetch all saved simulations, newest first. Equal timestamps fall back
/// to the id, which follows insertion order.
pub async fn list_simulations(pool: &PgPool) -> Result<Vec<SimulationRecord>> {
    let rows = sqlx::query_as::<_, SimulationRecord>(
        r#"
        SELECT
            id,
            power,
            hours_per_day,
            days_per_month,
            months_per_year,
            cost_per_kwh,
            monthly_kwh,
            annual_kwh,
            monthly_cost,
            annual_cost,
            created_at
        FROM simulations
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
