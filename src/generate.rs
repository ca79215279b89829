//! Top-level orchestration: `extract → normalize → assemble → generate`.
//!
//! This is the whole control flow of the crate, expressed as explicit
//! function composition over the pipeline stages — no callbacks, no shared
//! state. Each submission owns its inputs, and everything derived from them
//! is dropped when the call returns.
//!
//! ## Fail-fast ordering
//!
//! Document extraction and image normalisation run **before** the service
//! is resolved or contacted. An unreadable PDF or a malformed pixel buffer
//! therefore fails the request without spending any network traffic or
//! quota.

use crate::config::PostConfig;
use crate::error::PromogenError;
use crate::gemini::GeminiClient;
use crate::pipeline::{assemble, extract, image};
use crate::prompts::DEFAULT_SYSTEM_PROMPT;
use crate::service::{GenerationCall, GenerationService, PostRequest};
use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Generate a promotional post from the given submission.
///
/// This is the primary entry point for the library: the interaction
/// surface collects a [`PostRequest`] from its form and hands it here.
///
/// # Returns
/// The generated post text, verbatim as the model produced it. An empty
/// string is a legitimate (if unlikely) result.
///
/// # Errors
/// * [`PromogenError::Extraction`] — a document could not be read
///   (raised before any network call)
/// * [`PromogenError::ImageDecode`] — the pixel buffer is malformed
/// * [`PromogenError::Authentication`] — the credential was rejected
/// * [`PromogenError::GenerationService`] / [`PromogenError::Timeout`] /
///   [`PromogenError::ResponseBlocked`] — the remote call failed
pub async fn generate_post(
    request: PostRequest,
    config: &PostConfig,
) -> Result<String, PromogenError> {
    let start = Instant::now();
    info!(
        "Starting post generation: model={}, {} documents",
        request.model,
        request.documents.len()
    );

    // ── Step 1: Extract document texts ───────────────────────────────────
    let article_texts = extract_all(&request.documents, &config.converter).await?;
    debug!(
        "Extracted {} articles ({} chars total)",
        article_texts.len(),
        article_texts.iter().map(String::len).sum::<usize>()
    );

    // ── Step 2: Normalise the image ──────────────────────────────────────
    let inline_image = image::normalize(&request.image)?;

    // ── Step 3: Assemble the prompt ──────────────────────────────────────
    let prompt = assemble::assemble_prompt(&article_texts, &request.image_description);
    debug!("Assembled prompt: {} chars", prompt.len());

    // ── Step 4: Invoke the generation service ────────────────────────────
    let service = resolve_service(config)?;
    let system_instruction = if request.system_instruction.is_empty() {
        DEFAULT_SYSTEM_PROMPT
    } else {
        &request.system_instruction
    };

    let call = GenerationCall {
        model: &request.model,
        credential: &request.credential,
        system_instruction,
        prompt: &prompt,
        image: &inline_image,
    };

    let text = service.generate(&call).await?;
    info!(
        "Post generation complete: {} chars in {}ms",
        text.len(),
        start.elapsed().as_millis()
    );
    Ok(text)
}

/// Synchronous wrapper around [`generate_post`].
///
/// Creates a temporary tokio runtime internally; for interaction layers
/// that are not already async.
pub fn generate_post_sync(
    request: PostRequest,
    config: &PostConfig,
) -> Result<String, PromogenError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| PromogenError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(generate_post(request, config))
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Extract every document concurrently, preserving submission order.
///
/// PDF parsing is CPU-bound, so each document gets its own `spawn_blocking`
/// task; `try_join_all` keeps results positionally aligned with the input
/// and aborts on the first failure. The converter is stateless, so the
/// tasks need no coordination.
async fn extract_all(
    documents: &[Vec<u8>],
    converter: &Arc<dyn extract::DocumentConverter>,
) -> Result<Vec<String>, PromogenError> {
    let tasks = documents.iter().enumerate().map(|(index, bytes)| {
        let converter = Arc::clone(converter);
        let bytes = bytes.clone();
        async move {
            tokio::task::spawn_blocking(move || {
                extract::extract_article(converter.as_ref(), Some(&bytes), index)
            })
            .await
            .map_err(|e| PromogenError::Internal(format!("Extraction task panicked: {e}")))?
        }
    });

    try_join_all(tasks).await
}

/// Resolve the generation service: a pre-built one from the config, or the
/// default Gemini client against the configured endpoint.
fn resolve_service(config: &PostConfig) -> Result<Arc<dyn GenerationService>, PromogenError> {
    if let Some(ref service) = config.service {
        return Ok(Arc::clone(service));
    }
    Ok(Arc::new(GeminiClient::new(
        &config.endpoint,
        config.api_timeout_secs,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extract::DocumentConverter;

    struct UppercaseConverter;

    impl DocumentConverter for UppercaseConverter {
        fn convert(&self, bytes: &[u8]) -> Result<String, String> {
            Ok(String::from_utf8_lossy(bytes).to_uppercase())
        }
    }

    #[tokio::test]
    async fn extract_all_preserves_submission_order() {
        let converter: Arc<dyn DocumentConverter> = Arc::new(UppercaseConverter);
        let documents = vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()];
        let texts = extract_all(&documents, &converter).await.unwrap();
        assert_eq!(
            texts,
            vec![
                "<article>ONE</article>",
                "<article>TWO</article>",
                "<article>THREE</article>"
            ]
        );
    }

    #[tokio::test]
    async fn extract_all_empty_input_yields_empty_output() {
        let converter: Arc<dyn DocumentConverter> = Arc::new(UppercaseConverter);
        let texts = extract_all(&[], &converter).await.unwrap();
        assert!(texts.is_empty());
    }

    #[test]
    fn resolve_service_defaults_to_gemini() {
        let config = PostConfig::default();
        assert!(resolve_service(&config).is_ok());
    }
}
