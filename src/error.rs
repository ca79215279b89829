//! Error types for the promogen library.
//!
//! Every failure surfaces to the caller as a [`PromogenError`] — the pipeline
//! never retries, never returns a partial post, and never swallows an
//! upstream problem. The variants map one-to-one onto the failure modes of
//! the four pipeline stages:
//!
//! * [`Extraction`](PromogenError::Extraction) — a document could not be
//!   converted to text. Raised before any network traffic.
//! * [`ImageDecode`](PromogenError::ImageDecode) — the pixel buffer does not
//!   describe a valid image.
//! * [`Authentication`](PromogenError::Authentication) — the remote API
//!   rejected the credential. Resubmitting with the same credential will not
//!   help.
//! * [`GenerationService`](PromogenError::GenerationService) — the remote
//!   call failed for any other reason (network, quota, 5xx). Carries the
//!   upstream message; the caller may resubmit.

use thiserror::Error;

/// All errors returned by the promogen library.
#[derive(Debug, Error)]
pub enum PromogenError {
    // ── Document errors ───────────────────────────────────────────────────
    /// A supplied document could not be converted to text.
    #[error("Document {index} could not be converted: {detail}\nCheck that the file is a valid PDF.")]
    Extraction { index: usize, detail: String },

    // ── Image errors ──────────────────────────────────────────────────────
    /// The pixel buffer does not describe a decodable image.
    #[error("Image could not be decoded: {detail}")]
    ImageDecode { detail: String },

    // ── Generation errors ─────────────────────────────────────────────────
    /// The remote API rejected the supplied credential (401/403).
    #[error("Authentication failed: {detail}\nCheck the API token for the selected model.")]
    Authentication { detail: String },

    /// The remote generation call failed (network, quota, server error).
    #[error("Generation service error: {message}")]
    GenerationService { message: String },

    /// The generation call exceeded the configured timeout.
    #[error("Generation call timed out after {secs}s\nIncrease api_timeout_secs if the model is slow.")]
    Timeout { secs: u64 },

    /// The model refused to answer: the prompt or the response was blocked.
    #[error("Generation was blocked by the service: {reason}")]
    ResponseBlocked { reason: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
