//! Pipeline stages for promotional-post generation.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different PDF parser) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! extract ──▶ assemble ──▶ generate
//! (pdf→text)  (template)    (Gemini)
//!      image ──┘
//!    (decode + 512px bound + base64 PNG)
//! ```
//!
//! 1. [`extract`]  — convert each document blob to `<article>`-wrapped text;
//!    runs in `spawn_blocking` because PDF parsing is CPU-bound
//! 2. [`image`]    — decode the raw pixel buffer, cap the longest edge at
//!    512 px, encode as base64 PNG for the multimodal request body
//! 3. [`assemble`] — join article texts and fill the fixed prompt template
//!
//! The only stage with network I/O is the generation call itself, which
//! lives behind the [`crate::service::GenerationService`] trait.

pub mod assemble;
pub mod extract;
pub mod image;
