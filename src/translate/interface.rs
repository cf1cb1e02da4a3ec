use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single translation call.
///
/// Transport and Parse are distinguished here for diagnostics; callers
/// collapse them into one generic user-facing notice.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("provider returned {status}: {body}")]
    Transport {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// Translation interface trait - one call per directional hop
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang`.
    ///
    /// `text` must already be trimmed and non-empty. Language codes are
    /// passed to the provider verbatim, not validated against a whitelist.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;
}
