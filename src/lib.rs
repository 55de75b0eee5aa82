//! Agent evaluation backend.
//!
//! This crate provides a small HTTP service that runs evaluation batches
//! against the Google Gemini API and aggregates the results into two
//! metrics: a Pass@K success ratio for a single model, and a side-by-side
//! comparison of several model variants on the same prompt.

pub mod api;
pub mod backends;
pub mod error;
pub mod evaluator;

pub use error::EvalError;
