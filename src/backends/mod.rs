//! Upstream model backends.

pub mod gemini;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::EvalError;

/// Outcome of a single generation request against an upstream model.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Text of the response; empty when the candidate carried no text.
    pub text: String,
    /// Safety category name mapped to its severity label; empty when the
    /// provider returned no ratings.
    pub safety_ratings: HashMap<String, String>,
    /// Prompt plus completion tokens; 0 when usage metadata was absent.
    pub token_count: u32,
    /// Wall-clock latency of the call in milliseconds.
    pub latency_ms: f64,
}

/// Trait for backends that can answer a single generation request.
#[async_trait]
pub trait GenerateProvider: Send + Sync {
    /// Issues one generation request for `prompt` against `model` and
    /// returns the extracted outcome. Failures are surfaced as-is; no
    /// retries are attempted.
    async fn generate(&self, model: &str, prompt: &str) -> Result<Generation, EvalError>;
}
