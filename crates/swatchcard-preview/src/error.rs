use swatchcard_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A hover image preload failed. Recovered by the hover controller as a
    /// failed preload; never propagated past it.
    #[error("failed to load hover image {url}: {reason}")]
    ImageLoadFailed { url: String, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
