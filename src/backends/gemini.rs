//! Google Gemini API client for single-shot content generation.
//!
//! This module wraps the v1beta `generateContent` endpoint and extracts the
//! response text, safety ratings and token usage for one call.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::backends::{GenerateProvider, Generation};
use crate::error::EvalError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Configuration for the Gemini client.
#[derive(Debug)]
pub struct GeminiConfig {
    /// API key for authentication with Gemini.
    pub api_key: String,
    /// Base URL of the Gemini API.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for interacting with the Gemini API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct Gemini {
    /// Shared configuration wrapped in Arc for cheap cloning.
    pub config: Arc<GeminiConfig>,
    /// HTTP client for making requests.
    pub client: Client,
}

#[derive(Serialize)]
struct GeminiGenerateRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
    #[serde(default)]
    safety_ratings: Vec<GeminiSafetyRating>,
}

#[derive(Deserialize, Debug)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize, Debug)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeminiSafetyRating {
    category: String,
    probability: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct GeminiUsageMetadata {
    prompt_token_count: u32,
    candidates_token_count: u32,
}

impl GeminiGenerateResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    fn safety_ratings(&self) -> HashMap<String, String> {
        self.candidates
            .first()
            .map(|c| {
                c.safety_ratings
                    .iter()
                    .map(|r| (r.category.clone(), r.probability.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn token_count(&self) -> u32 {
        self.usage_metadata
            .as_ref()
            .map(|u| u.prompt_token_count + u.candidates_token_count)
            .unwrap_or(0)
    }
}

impl Gemini {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `base_url` - Base URL override, mainly for tests
    /// * `timeout_seconds` - Request timeout in seconds
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, EvalError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(EvalError::AuthError("Missing Gemini API key".to_string()));
        }

        let base_url = Url::parse(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
            .map_err(|e| EvalError::HttpError(e.to_string()))?;

        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(sec));
        }
        let client = builder
            .build()
            .map_err(|e| EvalError::HttpError(e.to_string()))?;

        Ok(Self {
            config: Arc::new(GeminiConfig {
                api_key,
                base_url,
                timeout_seconds,
            }),
            client,
        })
    }

    fn generate_url(&self, model: &str) -> Result<Url, EvalError> {
        self.config
            .base_url
            .join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| EvalError::HttpError(e.to_string()))
    }

    async fn ensure_success_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, EvalError> {
        log::debug!("Gemini HTTP status: {}", response.status());
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await?;
        Err(EvalError::ResponseFormatError {
            message: format!("Gemini API returned error status: {status}"),
            raw_response: error_text,
        })
    }
}

#[async_trait]
impl GenerateProvider for Gemini {
    /// Sends one generation request and measures wall-clock latency around
    /// the call. Any upstream failure is surfaced without retry.
    async fn generate(&self, model: &str, prompt: &str) -> Result<Generation, EvalError> {
        let body = GeminiGenerateRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Gemini request payload: {}", json);
            }
        }

        let mut request = self
            .client
            .post(self.generate_url(model)?)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body);

        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        let start = Instant::now();
        let resp = request.send().await?;
        let resp = self.ensure_success_response(resp).await?;
        let resp_text = resp.text().await?;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let parsed: GeminiGenerateResponse =
            serde_json::from_str(&resp_text).map_err(|e| EvalError::ResponseFormatError {
                message: format!("Failed to decode Gemini response: {e}"),
                raw_response: resp_text.clone(),
            })?;

        Ok(Generation {
            text: parsed.text(),
            safety_ratings: parsed.safety_ratings(),
            token_count: parsed.token_count(),
            latency_ms,
        })
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
