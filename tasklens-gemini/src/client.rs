//! Minimal Gemini `generateContent` client.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tasklens_core::{Summarizer, Task, UserInfo};

use crate::prompt::build_analysis_prompt;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Capability probe: `None` when no credential is configured, which
    /// routes the caller straight to the local report.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let mut client = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.trim().is_empty() {
                client.model = model;
            }
        }
        Some(client)
    }

    /// Blocking text generation.
    ///
    /// The CLI uses #[tokio::main], so we're often already inside a runtime.
    /// Creating a nested runtime and calling block_on will panic.
    ///
    /// Strategy:
    /// - If a runtime is already running: use block_in_place + Handle::block_on
    /// - Otherwise: create a runtime and block_on
    pub fn generate(&self, prompt: &str) -> Result<String> {
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            tokio::task::block_in_place(|| handle.block_on(self.generate_async(prompt)))
        } else {
            let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
            rt.block_on(self.generate_async(prompt))
        }
    }

    async fn generate_async(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 1500,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let client = reqwest::Client::new();
        let resp = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("gemini request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("gemini error: {status} {txt}");
        }

        let out: GenerateResponse = resp.json().await.context("parse gemini response")?;
        extract_text(out)
    }
}

impl Summarizer for GeminiClient {
    fn summarize(&self, user: &UserInfo, tasks: &[Task]) -> Result<String> {
        let prompt = build_analysis_prompt(user, tasks);
        self.generate(&prompt)
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: i32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// First candidate's first text part. Empty or missing text is a failure,
/// not a report.
fn extract_text(resp: GenerateResponse) -> Result<String> {
    let text = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        bail!("gemini response contained no text");
    }
    Ok(text.to_string())
}
