//! Gemini `generateContent` client: the default [`GenerationService`].
//!
//! One POST per call to
//! `{base}/v1beta/models/{model}:generateContent`, authenticated with the
//! per-request token in the `x-goog-api-key` header. The wire structs below
//! mirror the REST API's JSON shapes; only the fields this crate reads are
//! modelled.
//!
//! Error mapping is the contract of this module: a 401/403 (or the 400 the
//! API emits for a malformed key) becomes
//! [`PromogenError::Authentication`]; a request timeout becomes
//! [`PromogenError::Timeout`]; anything else that goes wrong on the wire is
//! a [`PromogenError::GenerationService`] carrying the upstream message.
//! There is no retry — the caller is told immediately and may resubmit.

use crate::error::PromogenError;
use crate::service::{GenerationCall, GenerationService, CANDIDATE_COUNT, TEMPERATURE};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default endpoint base for the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

// ── Request wire types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    candidate_count: u32,
}

// ── Response wire types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Holds no credential — the token travels inside each
/// [`GenerationCall`] and exists only for the duration of the request.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a client with the given endpoint base and per-call timeout.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, PromogenError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PromogenError::Internal(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    fn build_body(call: &GenerationCall<'_>) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: call.system_instruction.to_string(),
                }],
            },
            // Image first, then prompt text, matching the part order the
            // interaction surface presents them in.
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: call.image.mime_type.clone(),
                            data: call.image.data.clone(),
                        },
                    },
                    Part::Text {
                        text: call.prompt.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                candidate_count: CANDIDATE_COUNT,
            },
        }
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, call: &GenerationCall<'_>) -> Result<String, PromogenError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, call.model
        );
        let body = Self::build_body(call);
        debug!("POST {} ({} prompt chars)", url, call.prompt.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", call.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PromogenError::Timeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    PromogenError::GenerationService {
                        message: format!("request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, detail));
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| PromogenError::GenerationService {
                    message: format!("malformed response body: {e}"),
                })?;

        let text = extract_text(parsed)?;
        info!("Generation succeeded: {} chars", text.len());
        Ok(text)
    }
}

/// Map a non-success HTTP status to the right error kind.
///
/// Gemini reports a syntactically invalid key as 400 INVALID_ARGUMENT with
/// an "API key not valid" message, not as 401 — treat that as an
/// authentication failure too so the caller gets an actionable signal.
fn map_error_status(status: reqwest::StatusCode, detail: String) -> PromogenError {
    use reqwest::StatusCode;
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PromogenError::Authentication { detail }
        }
        StatusCode::BAD_REQUEST if detail.contains("API key") => {
            PromogenError::Authentication { detail }
        }
        _ => PromogenError::GenerationService {
            message: format!("HTTP {status}: {detail}"),
        },
    }
}

/// Pull the generated text out of a parsed response.
///
/// A blocked prompt or a candidate that stopped for safety means the model
/// produced no usable post; both surface as
/// [`PromogenError::ResponseBlocked`] instead of an empty string the caller
/// could mistake for a real (if terse) result.
fn extract_text(response: GenerateContentResponse) -> Result<String, PromogenError> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(PromogenError::ResponseBlocked {
                reason: reason.clone(),
            });
        }
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| PromogenError::GenerationService {
            message: "response contained no candidates".into(),
        })?;

    if let Some(reason) = &candidate.finish_reason {
        if reason == "SAFETY" || reason == "PROHIBITED_CONTENT" {
            return Err(PromogenError::ResponseBlocked {
                reason: reason.clone(),
            });
        }
    }

    let text: String = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}
