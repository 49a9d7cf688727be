use estimator_client::domain::CalculationInput;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Incoming calculation request. All five fields are required; they are
/// optional here so that an absent field can be reported by name instead
/// of failing opaquely at deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationPayload {
    pub power: Option<f64>,
    pub hours_per_day: Option<f64>,
    pub days_per_month: Option<f64>,
    pub months_per_year: Option<f64>,
    pub cost_per_kwh: Option<f64>,
}

impl CalculationPayload {
    /// Presence check for the five inputs. Reports every missing field by
    /// its wire name.
    pub fn into_input(self) -> Result<CalculationInput, ApiError> {
        if let (
            Some(power),
            Some(hours_per_day),
            Some(days_per_month),
            Some(months_per_year),
            Some(cost_per_kwh),
        ) = (
            self.power,
            self.hours_per_day,
            self.days_per_month,
            self.months_per_year,
            self.cost_per_kwh,
        ) {
            return Ok(CalculationInput {
                power,
                hours_per_day,
                days_per_month,
                months_per_year,
                cost_per_kwh,
            });
        }

        let mut missing = Vec::new();
        if self.power.is_none() {
            missing.push("power");
        }
        if self.hours_per_day.is_none() {
            missing.push("hoursPerDay");
        }
        if self.days_per_month.is_none() {
            missing.push("daysPerMonth");
        }
        if self.months_per_year.is_none() {
            missing.push("monthsPerYear");
        }
        if self.cost_per_kwh.is_none() {
            missing.push("costPerKwh");
        }
        Err(ApiError::MissingParameters(missing))
    }
}

/// Error response body shared by all failure statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
