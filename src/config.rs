//! Configuration for post generation.
//!
//! Everything tunable lives in [`PostConfig`], built via its
//! [`PostConfigBuilder`]. Keeping the knobs in one struct makes it trivial
//! to share a config across requests and to see at a glance how a given
//! deployment differs from the defaults.
//!
//! Per-request inputs (model, credential, documents, image, description) do
//! *not* belong here — they travel in [`crate::service::PostRequest`]. The
//! config holds only what is fixed across submissions: the timeout, the
//! endpoint, and the capability backends.

use crate::error::PromogenError;
use crate::gemini::DEFAULT_ENDPOINT;
use crate::pipeline::extract::{DocumentConverter, PdfTextConverter};
use crate::service::GenerationService;
use std::fmt;
use std::sync::Arc;

/// Configuration for [`crate::generate::generate_post`].
///
/// # Example
/// ```rust
/// use promogen::PostConfig;
///
/// let config = PostConfig::builder()
///     .api_timeout_secs(30)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct PostConfig {
    /// Per-call timeout on the generation request, in seconds. Default: 60.
    ///
    /// The original behaviour had no timeout at all; this is a safe-default
    /// extension so a stalled upstream cannot hang the interaction surface
    /// indefinitely. It changes when the caller hears about a failure, not
    /// what the pipeline does on success.
    pub api_timeout_secs: u64,

    /// Endpoint base for the generation API. Default:
    /// [`DEFAULT_ENDPOINT`]. Point this at a local stub server in tests.
    pub endpoint: String,

    /// Pre-built generation service. When set, `endpoint` and
    /// `api_timeout_secs` are ignored and the service is used as-is —
    /// useful for stubs in tests or for wrapping the default client in
    /// middleware.
    pub service: Option<Arc<dyn GenerationService>>,

    /// Document conversion backend. Default: the `pdf-extract` converter.
    pub converter: Arc<dyn DocumentConverter>,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            api_timeout_secs: 60,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service: None,
            converter: Arc::new(PdfTextConverter),
        }
    }
}

impl fmt::Debug for PostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostConfig")
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("endpoint", &self.endpoint)
            .field("service", &self.service.as_ref().map(|_| "<dyn GenerationService>"))
            .field("converter", &"<dyn DocumentConverter>")
            .finish()
    }
}

impl PostConfig {
    /// Create a new builder for `PostConfig`.
    pub fn builder() -> PostConfigBuilder {
        PostConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PostConfig`].
#[derive(Debug)]
pub struct PostConfigBuilder {
    config: PostConfig,
}

impl PostConfigBuilder {
    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn service(mut self, service: Arc<dyn GenerationService>) -> Self {
        self.config.service = Some(service);
        self
    }

    pub fn converter(mut self, converter: Arc<dyn DocumentConverter>) -> Self {
        self.config.converter = converter;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PostConfig, PromogenError> {
        let c = &self.config;
        if c.api_timeout_secs == 0 {
            return Err(PromogenError::InvalidConfig(
                "api_timeout_secs must be ≥ 1".into(),
            ));
        }
        if c.endpoint.is_empty() {
            return Err(PromogenError::InvalidConfig("endpoint must not be empty".into()));
        }
        Ok(self.config)
    }
}
