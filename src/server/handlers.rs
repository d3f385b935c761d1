//! HTTP handlers
//!
//! Thin wrappers: decode JSON, call the evaluator, encode JSON.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::metrics::Evaluation;
use crate::models::CostModelInput;
use crate::reference::ReferenceData;
use crate::sweep::{compare_scenarios, sweep, ScenarioRow, SweepParameter, SweepPoint, SweepRange};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub reference_version: String,
}

/// Body of `POST /sweep`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRequest {
    pub input: CostModelInput,
    pub parameter: SweepParameter,
    #[serde(flatten)]
    pub range: SweepRange,
}

/// Response of `POST /sweep`
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub parameter: SweepParameter,
    pub points: Vec<SweepPoint>,
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        reference_version: state.evaluator.reference().version.clone(),
    })
}

/// GET /presets
pub async fn presets(State(state): State<AppState>) -> Json<ReferenceData> {
    Json(state.evaluator.reference().clone())
}

/// POST /evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<CostModelInput>, JsonRejection>,
) -> ApiResult<Json<Evaluation>> {
    let input = decode(payload)?;
    Ok(Json(state.evaluator.evaluate(&input)?))
}

/// POST /scenarios
pub async fn scenarios(
    State(state): State<AppState>,
    payload: Result<Json<CostModelInput>, JsonRejection>,
) -> ApiResult<Json<Vec<ScenarioRow>>> {
    let input = decode(payload)?;
    Ok(Json(compare_scenarios(&input, state.evaluator.reference())?))
}

/// POST /sweep
pub async fn sweep_handler(
    State(state): State<AppState>,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> ApiResult<Json<SweepResponse>> {
    let request = decode(payload)?;
    let points = sweep(
        &request.input,
        state.evaluator.reference(),
        request.parameter,
        &request.range,
    )?;

    Ok(Json(SweepResponse {
        parameter: request.parameter,
        points,
    }))
}
