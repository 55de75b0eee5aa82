use std::time::Duration;

use chrono::Local;

use crate::backends::GenerateProvider;
use crate::error::EvalError;
use crate::evaluator::success::check_success;
use crate::evaluator::types::{round2, EvaluationReport, RunRecord};

/// Model used by the single-task evaluation endpoint.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Pause between consecutive runs, a fixed-interval hedge against upstream
/// rate limits.
const RUN_PAUSE: Duration = Duration::from_millis(500);

/// Runs `task` `k` times against `model`, strictly sequentially, and
/// aggregates the outcomes into a Pass@K report.
///
/// Each run is scored with [`check_success`] against `expected_output` and
/// tagged with its 1-based run index. A fixed pause separates consecutive
/// calls; there is none after the last. The first upstream failure aborts
/// the whole batch.
///
/// `k` is assumed to be in `[1, 10]`; the API layer enforces the bound
/// before any upstream call is made.
pub async fn run_pass_at_k(
    provider: &dyn GenerateProvider,
    task: &str,
    expected_output: &str,
    k: u32,
    model: &str,
) -> Result<EvaluationReport, EvalError> {
    let mut runs = Vec::with_capacity(k as usize);

    for i in 0..k {
        if i > 0 {
            tokio::time::sleep(RUN_PAUSE).await;
        }

        let generation = provider.generate(model, task).await?;
        let success = check_success(&generation.text, expected_output);

        runs.push(RunRecord {
            run_number: i + 1,
            response_text: generation.text,
            latency_ms: round2(generation.latency_ms),
            token_count: generation.token_count,
            safety_ratings: generation.safety_ratings,
            success,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }

    let successes = runs.iter().filter(|run| run.success).count();
    let pass_at_k = if k > 0 {
        round2(successes as f64 / k as f64 * 100.0)
    } else {
        0.0
    };
    let average_latency = if k > 0 {
        round2(runs.iter().map(|run| run.latency_ms).sum::<f64>() / k as f64)
    } else {
        0.0
    };

    Ok(EvaluationReport {
        pass_at_k,
        average_latency,
        success_rate: pass_at_k,
        total_runs: k,
        runs,
    })
}

#[cfg(test)]
#[path = "pass_at_k_tests.rs"]
mod tests;
