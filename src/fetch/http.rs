//! HTTP fetcher backed by reqwest

use async_trait::async_trait;
use url::Url;

use super::traits::Fetcher;
use crate::config::HttpConfig;
use crate::error::{FetchError, Result};
use crate::types::FetchResponse;

/// Fetcher that issues a plain HTTP GET per locator
///
/// The underlying `reqwest::Client` pools connections, so one instance
/// should be shared by every item.
///
/// # Examples
///
/// ```no_run
/// use image_dl::config::HttpConfig;
/// use image_dl::fetch::HttpFetcher;
/// use std::time::Duration;
///
/// let config = HttpConfig {
///     timeout: Some(Duration::from_secs(20)),
///     ..Default::default()
/// };
/// let fetcher = HttpFetcher::from_config(&config).expect("client builds");
/// ```
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Wrap an existing client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client from HTTP settings
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`](crate::Error::Network) if the TLS backend
    /// cannot be initialized.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &Url) -> std::result::Result<FetchResponse, FetchError> {
        let response = self.client.get(locator.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::trace!(
            locator = %locator,
            status,
            bytes = body.len(),
            "HTTP response received"
        );

        Ok(FetchResponse::new(status, body.to_vec()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
