//! Traits for the fetch and decode collaborators

use async_trait::async_trait;
use image::DynamicImage;
use url::Url;

use crate::error::FetchError;
use crate::types::FetchResponse;

/// Capability to retrieve the raw bytes behind a locator
///
/// Implementations report transport problems as
/// [`FetchError::Transport`]. Non-success statuses are returned as a normal
/// [`FetchResponse`]; the caller decides what counts as success.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the resource at `locator`
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the body could
    /// not be read.
    async fn fetch(&self, locator: &Url) -> Result<FetchResponse, FetchError>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}

/// Capability to decode raw bytes into an image
///
/// Treated as a pure function. Runs on the blocking pool, so
/// implementations may be CPU-heavy.
pub trait Decoder: Send + Sync {
    /// Decode `bytes` into an image
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decode`] if the bytes are not a supported image.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, FetchError>;
}
