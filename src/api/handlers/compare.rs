use axum::extract::State;
use axum::Json;

use super::helpers::{internal_error, validate_batch, ApiResult};
use crate::api::types::{AbTestRequest, AbTestResponse};
use crate::api::ServerState;
use crate::evaluator::run_comparison;

/// Compares the fixed Gemini model variants on the same task.
pub async fn handle_ab_test(
    State(state): State<ServerState>,
    Json(req): Json<AbTestRequest>,
) -> ApiResult<Json<AbTestResponse>> {
    validate_batch(&req.task, req.runs_per_model, "runs_per_model")?;

    let models = run_comparison(&state.gemini, &req.task, req.runs_per_model)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(AbTestResponse { models }))
}
