use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::helpers::{internal_error, validate_batch, ApiResult};
use crate::api::types::EvaluateRequest;
use crate::api::ServerState;
use crate::evaluator::{run_pass_at_k, EvaluationReport, DEFAULT_MODEL};

/// Static identification payload for the dashboard frontend.
pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": "AI Agent Evaluation Dashboard API" }))
}

/// Evaluates one task with the Pass@K metric against the default model.
pub async fn handle_evaluate(
    State(state): State<ServerState>,
    Json(req): Json<EvaluateRequest>,
) -> ApiResult<Json<EvaluationReport>> {
    validate_batch(&req.task, req.k, "k")?;

    let report = run_pass_at_k(
        &state.gemini,
        &req.task,
        &req.expected_output,
        req.k,
        DEFAULT_MODEL,
    )
    .await
    .map_err(|e| internal_error(format!("Error during evaluation: {e}")))?;

    Ok(Json(report))
}
