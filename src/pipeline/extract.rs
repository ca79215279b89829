//! Document text extraction: PDF bytes → `<article>`-wrapped plain text.
//!
//! The converter is a capability seam: the pipeline only needs "bytes in,
//! text out", so alternate backends (a different parser, an external OCR
//! service) can be substituted without touching prompt assembly or the
//! generation call. The default backend is the pure-Rust `pdf-extract`
//! parser reading directly from memory, so no temporary files are created.
//!
//! Extraction is side-effect-free and each document is independent, which is
//! why [`crate::generate::generate_post`] runs one `spawn_blocking` task per
//! document and re-joins the results in submission order.

use crate::error::PromogenError;
use tracing::debug;

/// Converts a raw document byte blob into plain text.
///
/// Implementations must be cheap to share (`Send + Sync`) and safe for
/// concurrent use; the pipeline may invoke `convert` for several documents
/// at once.
pub trait DocumentConverter: Send + Sync {
    /// Extract the plain-text content of `bytes`.
    ///
    /// Fails when the blob is not a parseable document in a supported
    /// format. The error detail should describe the parser failure; the
    /// caller attaches the document index.
    fn convert(&self, bytes: &[u8]) -> Result<String, String>;
}

/// Default converter backed by the `pdf-extract` crate.
///
/// Stateless; one instance serves all requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextConverter;

impl DocumentConverter for PdfTextConverter {
    fn convert(&self, bytes: &[u8]) -> Result<String, String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())?;
        debug!("Extracted {} chars of text from {} bytes", text.len(), bytes.len());
        Ok(text)
    }
}

/// Extract one document and wrap the result in the article marker.
///
/// An absent document (`None`) yields the empty string — never an error —
/// so a submission with no background material still produces a prompt.
/// A present but unreadable document fails with
/// [`PromogenError::Extraction`] carrying the document's position.
pub fn extract_article(
    converter: &dyn DocumentConverter,
    bytes: Option<&[u8]>,
    index: usize,
) -> Result<String, PromogenError> {
    let Some(bytes) = bytes else {
        return Ok(String::new());
    };
    let text = converter
        .convert(bytes)
        .map_err(|detail| PromogenError::Extraction { index, detail })?;
    Ok(format!("<article>{text}</article>"))
}
