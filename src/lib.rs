//! # promogen
//!
//! Turn PDF background material, an image, and a short description into a
//! social-media promotional post using a multimodal LLM (Gemini
//! `generateContent`).
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDFs ─▶ extract   pdf-extract text, wrapped as <article>…</article>
//!                   (one spawn_blocking task per document, order preserved)
//! image ─▶ normalize decode pixel buffer, cap longest edge at 512 px,
//!                   encode as base64 PNG
//!         assemble  join articles + description into the fixed template
//!         generate  one generateContent call, text returned verbatim
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promogen::{generate_post, Credential, PixelBuffer, PostConfig, PostRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = PostRequest {
//!         model: "gemini-2.0-flash-exp".into(),
//!         credential: Credential::new(std::env::var("GEMINI_API_KEY")?),
//!         system_instruction: String::new(), // empty → built-in default
//!         documents: vec![std::fs::read("paper.pdf")?],
//!         image: PixelBuffer::rgb(640, 480, vec![200; 640 * 480 * 3]),
//!         image_description: "시연 중인 로봇 팔".into(),
//!     };
//!     let post = generate_post(request, &PostConfig::default()).await?;
//!     println!("{post}");
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! The pipeline treats its two external collaborators as capability traits:
//! [`DocumentConverter`] for PDF-to-text and [`GenerationService`] for the
//! model call. Both have production defaults ([`PdfTextConverter`],
//! [`GeminiClient`]) and both can be swapped through [`PostConfig`] — which
//! is also how the integration tests run the full pipeline against a stub
//! with no network.
//!
//! The credential is scoped to a single call: it lives in a
//! [`Credential`] newtype with a redacted `Debug`, is never serialised, and
//! leaves the process only in the auth header of the one outgoing request.
//!
//! Errors are never retried and no partial result is returned — each
//! submission either yields the model's text or a single
//! [`PromogenError`] describing the first thing that went wrong.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod gemini;
pub mod generate;
pub mod pipeline;
pub mod prompts;
pub mod service;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PostConfig, PostConfigBuilder};
pub use error::PromogenError;
pub use gemini::GeminiClient;
pub use generate::{generate_post, generate_post_sync};
pub use pipeline::extract::{DocumentConverter, PdfTextConverter};
pub use pipeline::image::{InlineImage, PixelBuffer, MAX_IMAGE_EDGE};
pub use service::{Credential, GenerationCall, GenerationService, PostRequest};
