//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use estimator_client::domain::{compute, CalculationResult, SimulationRecord};

use super::types::CalculationPayload;
use super::AppState;
use crate::error::ApiError;

/// `POST /api/calculate` → 200 + `CalculationResult` JSON.
///
/// Rejects with 400 `MissingParameters` when any of the five inputs is
/// absent. Stateless; works whether or not the store is configured.
pub async fn calculate(
    Json(payload): Json<CalculationPayload>,
) -> Result<Json<CalculationResult>, ApiError> {
    metrics::counter!("calculate_requests_total").increment(1);

    let input = match payload.into_input() {
        Ok(input) => input,
        Err(e) => {
            metrics::counter!("calculate_rejected_total").increment(1);
            return Err(e);
        }
    };

    Ok(Json(compute(&input)))
}

/// `GET /api/simulations` → 200 + newest-first array of records.
///
/// 501 when the store is unconfigured, 500 on backing-store failure.
pub async fn list_simulations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SimulationRecord>>, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// `POST /api/simulations` → 200 + the persisted `SimulationRecord`.
///
/// The store recomputes the result fields from the submitted inputs
/// before persisting.
pub async fn save_simulation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CalculationPayload>,
) -> Result<Json<SimulationRecord>, ApiError> {
    let input = payload.into_input()?;
    let record = state.store.save(&input).await?;
    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::store::SimulationStore;

    fn calculation_only_app() -> axum::Router {
        router(Arc::new(AppState {
            store: SimulationStore::unconfigured(),
        }))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn calculate_returns_reference_values() {
        let app = calculation_only_app();

        let resp = app
            .oneshot(post_json(
                "/api/calculate",
                json!({
                    "power": 1000.0,
                    "hoursPerDay": 5.0,
                    "daysPerMonth": 30.0,
                    "monthsPerYear": 12.0,
                    "costPerKwh": 0.2,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["monthlyKwh"], 150.0);
        assert_eq!(json["annualKwh"], 1800.0);
        assert_eq!(json["monthlyCost"], 30.0);
        assert_eq!(json["annualCost"], 360.0);
    }

    #[tokio::test]
    async fn calculate_missing_field_returns_400() {
        let app = calculation_only_app();

        let resp = app
            .oneshot(post_json(
                "/api/calculate",
                json!({
                    "power": 1000.0,
                    "hoursPerDay": 5.0,
                    "daysPerMonth": 30.0,
                    "monthsPerYear": 12.0,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("costPerKwh"), "got: {message}");
    }

    #[tokio::test]
    async fn save_returns_501_when_store_unconfigured() {
        let app = calculation_only_app();

        let resp = app
            .oneshot(post_json(
                "/api/simulations",
                json!({
                    "power": 1000.0,
                    "hoursPerDay": 5.0,
                    "daysPerMonth": 30.0,
                    "monthsPerYear": 12.0,
                    "costPerKwh": 0.2,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn list_returns_501_when_store_unconfigured() {
        let app = calculation_only_app();

        let req = Request::builder()
            .uri("/api/simulations")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
    }
}
