//! Spawning fetch tasks and posting their outcomes back to the owning context.

use image::DynamicImage;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use url::Url;

use crate::error::FetchError;
use crate::fetch::{Decoder, Fetcher};
use crate::types::{Completion, ItemId};

/// Issues fetch tasks on the injected runtime
///
/// Every launched fetch posts exactly one [`Completion`], even if the fetch
/// task panics, so the coordinator's outstanding count always drains.
#[derive(Clone)]
pub(crate) struct Launcher {
    runtime: Handle,
    fetcher: Arc<dyn Fetcher>,
    decoder: Arc<dyn Decoder>,
    completion_tx: mpsc::UnboundedSender<Completion>,
}

impl Launcher {
    pub(crate) fn new(
        runtime: Handle,
        fetcher: Arc<dyn Fetcher>,
        decoder: Arc<dyn Decoder>,
        completion_tx: mpsc::UnboundedSender<Completion>,
    ) -> Self {
        Self {
            runtime,
            fetcher,
            decoder,
            completion_tx,
        }
    }

    pub(crate) fn fetcher_name(&self) -> &'static str {
        self.fetcher.name()
    }

    /// Start fetching `url` for `item` and return immediately
    pub(crate) fn launch(&self, item: ItemId, url: Url) {
        let fetcher = Arc::clone(&self.fetcher);
        let decoder = Arc::clone(&self.decoder);
        let completion_tx = self.completion_tx.clone();

        tracing::debug!(item = %item, locator = %url, "fetch started");

        let runtime = self.runtime.clone();
        self.runtime.spawn(async move {
            let work = runtime.spawn(async move { fetch_image(fetcher, decoder, &url).await });

            let outcome = match work.await {
                Ok(outcome) => outcome,
                Err(e) => Err(FetchError::Transport(format!("fetch task failed: {}", e))),
            };

            // Receiver is gone only when the coordinator was dropped
            if completion_tx.send(Completion { item, outcome }).is_err() {
                tracing::trace!(item = %item, "coordinator dropped before fetch completed");
            }
        });
    }
}

/// Fetch, check status, and decode on the blocking pool
async fn fetch_image(
    fetcher: Arc<dyn Fetcher>,
    decoder: Arc<dyn Decoder>,
    url: &Url,
) -> std::result::Result<DynamicImage, FetchError> {
    let response = fetcher.fetch(url).await?;

    if !response.is_success() {
        return Err(FetchError::Status {
            status: response.status,
        });
    }

    if response.body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let body = response.body;
    tokio::task::spawn_blocking(move || decoder.decode(&body))
        .await
        .map_err(|e| FetchError::Decode(format!("decode task failed: {}", e)))?
}
