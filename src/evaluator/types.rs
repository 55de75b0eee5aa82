use std::collections::HashMap;

use serde::Serialize;

/// Rounds a float to two decimal places, matching the precision of all
/// reported aggregates.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Captured outcome of one upstream call within a batch. Immutable once
/// created.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// 1-based position of this run within its batch.
    pub run_number: u32,
    pub response_text: String,
    /// Wall-clock latency in milliseconds, rounded to two decimals.
    pub latency_ms: f64,
    pub token_count: u32,
    /// Safety category name mapped to its severity label.
    pub safety_ratings: HashMap<String, String>,
    pub success: bool,
    /// Local time the run completed, formatted `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

/// Aggregated result of a Pass@K batch for one model/task pair.
///
/// `pass_at_k` and `success_rate` are numerically identical by
/// construction; both are kept for response compatibility.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub pass_at_k: f64,
    pub average_latency: f64,
    pub success_rate: f64,
    pub total_runs: u32,
    pub runs: Vec<RunRecord>,
}

/// One model's summary within an A/B comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    /// Display name of the model variant.
    pub model_name: String,
    pub average_latency: f64,
    /// Always 100.0 in comparison mode; no correctness criterion applies.
    pub success_rate: f64,
    pub average_tokens: f64,
    pub runs: Vec<RunRecord>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
