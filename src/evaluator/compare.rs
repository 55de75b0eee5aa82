use std::time::Duration;

use thiserror::Error;

use crate::backends::GenerateProvider;
use crate::error::EvalError;
use crate::evaluator::pass_at_k::run_pass_at_k;
use crate::evaluator::types::{round2, ModelReport};

/// Failure of one model's batch within a comparison.
///
/// The `Display` output is the exact body returned by the A/B endpoint, so
/// no further wrapping happens at the handler boundary.
#[derive(Debug, Error)]
#[error("Error testing model {model_name}: {source}")]
pub struct ComparisonError {
    /// Display name of the model whose batch failed.
    pub model_name: String,
    #[source]
    pub source: EvalError,
}

/// Model variants compared by the A/B endpoint, in response order.
pub const COMPARED_MODELS: [(&str, &str); 3] = [
    ("gemini-1.5-flash-8b", "Gemini 1.5 Flash 8B (Fast)"),
    ("gemini-1.5-flash", "Gemini 1.5 Flash (Balanced)"),
    ("gemini-1.5-pro", "Gemini 1.5 Pro (Quality)"),
];

/// Pause between consecutive model batches.
const MODEL_PAUSE: Duration = Duration::from_secs(1);

/// Runs the same task through every compared model and summarizes each
/// batch.
///
/// Batches use an empty expectation, so every run trivially succeeds and
/// each model's success rate is reported as 100. A fixed pause separates
/// consecutive models; there is none after the last. The first failing
/// batch aborts the whole comparison and earlier results are discarded.
pub async fn run_comparison(
    provider: &dyn GenerateProvider,
    task: &str,
    runs_per_model: u32,
) -> Result<Vec<ModelReport>, ComparisonError> {
    let mut reports = Vec::with_capacity(COMPARED_MODELS.len());

    for (i, (model_id, display_name)) in COMPARED_MODELS.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(MODEL_PAUSE).await;
        }

        let evaluation = run_pass_at_k(provider, task, "", runs_per_model, model_id)
            .await
            .map_err(|e| ComparisonError {
                model_name: display_name.to_string(),
                source: e,
            })?;

        let average_tokens = if evaluation.runs.is_empty() {
            0.0
        } else {
            round2(
                evaluation
                    .runs
                    .iter()
                    .map(|run| run.token_count as f64)
                    .sum::<f64>()
                    / evaluation.runs.len() as f64,
            )
        };

        reports.push(ModelReport {
            model_name: display_name.to_string(),
            average_latency: evaluation.average_latency,
            // No correctness criterion applies in comparison mode.
            success_rate: 100.0,
            average_tokens,
            runs: evaluation.runs,
        });
    }

    Ok(reports)
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
