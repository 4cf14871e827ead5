//! Hover image preloading.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::PreviewError;

/// Fetches an image so it is ready before the hover swap shows it.
pub trait ImageLoader: Send + Sync + 'static {
    /// Resolves once the image at `url` is fully available.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ImageLoadFailed`] when the image cannot be
    /// fetched or does not decode.
    fn load(&self, url: &str) -> impl Future<Output = Result<(), PreviewError>> + Send;
}

/// [`ImageLoader`] that GETs the image over HTTP and decodes the full body.
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    /// Creates a loader with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, PreviewError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &str) -> Result<(), PreviewError> {
        let failed = |reason: String| PreviewError::ImageLoadFailed {
            url: url.to_owned(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "image/*")
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("unexpected HTTP status {}", status.as_u16())));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !content_type.starts_with("image/") {
            return Err(failed(format!("not an image (content-type \"{content_type}\")")));
        }

        let body = response.bytes().await.map_err(|e| failed(e.to_string()))?;
        if body.is_empty() {
            return Err(failed("empty body".to_owned()));
        }

        let (width, height) = tokio::task::spawn_blocking(move || decode(&body))
            .await
            .map_err(|e| failed(format!("decode task failed: {e}")))?
            .map_err(|e| failed(format!("undecodable image: {e}")))?;

        tracing::debug!(url, width, height, "hover image preloaded");
        Ok(())
    }
}

/// Decodes `bytes` and returns the image dimensions.
fn decode(bytes: &[u8]) -> Result<(u32, u32), image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    Ok((img.width(), img.height()))
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, url: &str) -> impl Future<Output = Result<(), PreviewError>> + Send {
        self.fetch(url)
    }
}
