//! tasklens-gemini: the remote report strategy.
//!
//! Builds the analysis prompt and drives Gemini's `generateContent`
//! endpoint. Any failure — transport, non-2xx, malformed or empty response —
//! surfaces as an `Err` so the orchestrator can fall back to the local
//! report; this crate never returns degraded model output as a success.

pub mod client;
pub mod prompt;

pub use client::GeminiClient;
pub use prompt::build_analysis_prompt;
