use serde::{Deserialize, Serialize};

/// Inputs for one energy consumption estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Device power draw in watts.
    pub power: f64,
    pub hours_per_day: f64,
    pub days_per_month: f64,
    pub months_per_year: f64,
    /// Tariff in currency per kilowatt-hour.
    pub cost_per_kwh: f64,
}

/// Derived consumption and cost figures. Energy is rounded to 3 decimal
/// places, cost to 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub monthly_kwh: f64,
    pub annual_kwh: f64,
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

/// Derives consumption and cost from a device's power draw and usage
/// pattern:
///
/// - `monthly_kwh = (power / 1000) * hours_per_day * days_per_month`
/// - `annual_kwh  = monthly_kwh * months_per_year`
/// - `monthly_cost = monthly_kwh * cost_per_kwh`
/// - `annual_cost  = annual_kwh * cost_per_kwh`
///
/// Rounding happens once at the end; every derived value is computed from
/// the unrounded values that precede it. In particular the annual figures
/// and both costs are priced off the full-precision energies, so a cost
/// may disagree in the last cent with `rounded_energy * tariff`.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let monthly_kwh = (input.power / 1000.0) * input.hours_per_day * input.days_per_month;
    let annual_kwh = monthly_kwh * input.months_per_year;

    let monthly_cost = monthly_kwh * input.cost_per_kwh;
    let annual_cost = annual_kwh * input.cost_per_kwh;

    CalculationResult {
        monthly_kwh: round_to(monthly_kwh, 3),
        annual_kwh: round_to(annual_kwh, 3),
        monthly_cost: round_to(monthly_cost, 2),
        annual_cost: round_to(annual_cost, 2),
    }
}

/// Half-away-from-zero rounding to `places` decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn input(
        power: f64,
        hours_per_day: f64,
        days_per_month: f64,
        months_per_year: f64,
        cost_per_kwh: f64,
    ) -> CalculationInput {
        CalculationInput {
            power,
            hours_per_day,
            days_per_month,
            months_per_year,
            cost_per_kwh,
        }
    }

    #[test]
    fn compute_matches_reference_vector() {
        let result = compute(&input(1000.0, 5.0, 30.0, 12.0, 0.2));

        assert_relative_eq!(result.monthly_kwh, 150.0);
        assert_relative_eq!(result.annual_kwh, 1800.0);
        assert_relative_eq!(result.monthly_cost, 30.0);
        assert_relative_eq!(result.annual_cost, 360.0);
    }

    #[test]
    fn zero_power_yields_all_zero_outputs() {
        let result = compute(&input(0.0, 10.0, 30.0, 12.0, 0.15));

        assert_eq!(result.monthly_kwh, 0.0);
        assert_eq!(result.annual_kwh, 0.0);
        assert_eq!(result.monthly_cost, 0.0);
        assert_eq!(result.annual_cost, 0.0);
    }

    #[test]
    fn compute_is_pure() {
        let i = input(742.5, 6.5, 22.0, 11.0, 0.31);
        assert_eq!(compute(&i), compute(&i));
    }

    #[test]
    fn energy_rounds_to_three_decimals_and_cost_to_two() {
        let result = compute(&input(333.0, 3.0, 7.0, 12.0, 0.1));

        // 0.333 * 3 * 7 = 6.993 exactly at 3 decimals.
        assert_eq!(result.monthly_kwh, 6.993);
        assert_eq!(result.annual_kwh, 83.916);
        assert_eq!(result.monthly_cost, 0.7);
        assert_eq!(result.annual_cost, 8.39);
    }

    #[test]
    fn annual_energy_derives_from_unrounded_monthly() {
        // Monthly energy is 0.0005 kWh, which rounds up to 0.001. The
        // annual figure must come from the unrounded 0.0005 * 12 = 0.006,
        // not from the rounded 0.001 * 12 = 0.012.
        let result = compute(&input(1.0, 0.5, 1.0, 12.0, 1.0));

        assert_eq!(result.monthly_kwh, 0.001);
        assert_eq!(result.annual_kwh, 0.006);
        assert_eq!(result.annual_cost, 0.01);
    }
}
