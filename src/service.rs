//! The generation-service seam and the request types that cross it.
//!
//! The pipeline never talks to an HTTP endpoint directly; it hands a fully
//! assembled [`GenerationCall`] to whatever [`GenerationService`] the config
//! carries. The default is the [`crate::gemini::GeminiClient`], but tests
//! inject a recording stub and callers can wrap the client in middleware
//! (rate limiting, request logging) without touching pipeline code.

use crate::error::PromogenError;
use crate::pipeline::image::{InlineImage, PixelBuffer};
use async_trait::async_trait;
use std::fmt;

/// Sampling temperature for every generation call.
///
/// Fixed by design — the interaction surface exposes no temperature knob,
/// and post copy benefits from some variation between resubmissions.
/// `f64` so the JSON body carries exactly `0.7`, not the nearest `f32`.
pub const TEMPERATURE: f64 = 0.7;

/// Number of candidates requested per call. Exactly one; the response is
/// returned verbatim, so there is nothing to pick between.
pub const CANDIDATE_COUNT: u32 = 1;

/// A secret API token scoped to a single request.
///
/// The inner value is reachable only through [`Credential::expose`]; `Debug`
/// is redacted and the type deliberately implements neither `Display` nor
/// `serde::Serialize`, so the token cannot leak through logging or
/// serialisation paths.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for placing in the auth header of the outgoing call.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Everything the interaction surface collects for one submission.
///
/// All entities are request-scoped: created from the form inputs, consumed
/// by [`crate::generate::generate_post`], and dropped when the call returns.
#[derive(Debug)]
pub struct PostRequest {
    /// Model identifier, e.g. `gemini-2.0-flash-exp`.
    pub model: String,
    /// API token for the selected model. Never logged or persisted.
    pub credential: Credential,
    /// System instruction for the model. When empty, the default prompt
    /// from [`crate::prompts`] is used.
    pub system_instruction: String,
    /// Raw PDF byte blobs, in submission order. May be empty.
    pub documents: Vec<Vec<u8>>,
    /// Raw pixel data of the image to post.
    pub image: PixelBuffer,
    /// User-written description of the image.
    pub image_description: String,
}

/// The assembled wire-level call handed to a [`GenerationService`].
#[derive(Debug)]
pub struct GenerationCall<'a> {
    pub model: &'a str,
    pub credential: &'a Credential,
    pub system_instruction: &'a str,
    pub prompt: &'a str,
    pub image: &'a InlineImage,
}

/// A remote multimodal generation endpoint.
///
/// Implementations perform exactly one network round-trip per call: no
/// retry, no streaming, result or error before control returns.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate post text for the given call.
    async fn generate(&self, call: &GenerationCall<'_>) -> Result<String, PromogenError>;
}
