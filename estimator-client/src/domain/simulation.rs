use serde::Serialize;
use time::OffsetDateTime;

/// One persisted estimate: the inputs plus the results derived from them.
///
/// `id` and `created_at` are assigned by the backing store on insert and
/// never change afterwards. The result fields are denormalized for read
/// efficiency but always equal re-running [`compute`] on the stored
/// inputs, because the store recomputes them before every insert.
///
/// [`compute`]: crate::domain::compute
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    pub id: i64,
    pub power: f64,
    pub hours_per_day: f64,
    pub days_per_month: f64,
    pub months_per_year: f64,
    pub cost_per_kwh: f64,
    pub monthly_kwh: f64,
    pub annual_kwh: f64,
    pub monthly_cost: f64,
    pub annual_cost: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
