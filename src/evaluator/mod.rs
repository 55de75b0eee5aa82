//! Evaluation batches and their aggregation.

mod compare;
mod pass_at_k;
mod success;
mod types;

pub use compare::{run_comparison, ComparisonError, COMPARED_MODELS};
pub use pass_at_k::{run_pass_at_k, DEFAULT_MODEL};
pub use success::check_success;
pub use types::{round2, EvaluationReport, ModelReport, RunRecord};
