use serde::{Deserialize, Serialize};

use crate::evaluator::ModelReport;

fn default_runs() -> u32 {
    3
}

/// Payload for `POST /evaluate`.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub task: String,
    #[serde(default)]
    pub expected_output: String,
    #[serde(default = "default_runs")]
    pub k: u32,
}

/// Payload for `POST /ab-test`.
#[derive(Debug, Deserialize)]
pub struct AbTestRequest {
    pub task: String,
    #[serde(default = "default_runs")]
    pub runs_per_model: u32,
}

/// Response body for `POST /ab-test`.
#[derive(Debug, Serialize)]
pub struct AbTestResponse {
    pub models: Vec<ModelReport>,
}
