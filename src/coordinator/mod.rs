//! Fetch coordination split into focused submodules.
//!
//! The `FetchCoordinator` struct and its methods are organized by concern:
//! - [`item`] - Per-locator state machine
//! - [`launch`] - Fetch task spawning and completion posting
//! - [`trigger`] - Single and bulk triggering
//! - [`completion`] - Applying completions and delivering callbacks

mod completion;
mod item;
mod launch;
mod trigger;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

pub use item::FetchItem;

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::{Config, DuplicatePolicy};
use crate::error::{Error, Result};
use crate::fetch::{Decoder, Fetcher, HttpFetcher, ImageDecoder};
use crate::presenter::Presenter;
use crate::types::{Completion, ItemId, ItemState};

use launch::Launcher;

/// External capabilities a coordinator runs on
#[derive(Clone)]
pub struct Collaborators {
    /// Runtime that executes network fetches and decoding
    pub runtime: Handle,
    /// Network fetch capability (trait object for pluggable implementations)
    pub fetcher: Arc<dyn Fetcher>,
    /// Image decode capability
    pub decoder: Arc<dyn Decoder>,
}

impl Collaborators {
    /// Stock HTTP fetcher and image decoder on the given runtime
    pub fn from_config(config: &Config, runtime: Handle) -> Result<Self> {
        Ok(Self {
            runtime,
            fetcher: Arc::new(HttpFetcher::from_config(&config.http)?),
            decoder: Arc::new(ImageDecoder),
        })
    }
}

/// Ordered set of fetch items sharing one completion mailbox
///
/// The coordinator is owned by a single context (typically the UI thread or
/// a UI event loop). Triggers start network work on the injected runtime and
/// return at once; outcomes come back as messages and are applied only by
/// the `&mut self` completion methods, so item state and presenter callbacks
/// never leave the owning context.
pub struct FetchCoordinator<P> {
    /// Items in display order; fixed after construction
    items: Vec<FetchItem>,
    presenter: P,
    launcher: Launcher,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    policy: DuplicatePolicy,
    /// Requests issued whose completion has not been applied yet
    outstanding: usize,
}

impl<P: Presenter> FetchCoordinator<P> {
    /// Create a coordinator with the stock HTTP fetcher and image decoder
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client cannot
    /// be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use image_dl::{Config, FetchCoordinator, FetchError, ItemId, Presenter};
    /// use image::DynamicImage;
    ///
    /// struct Gallery;
    ///
    /// impl Presenter for Gallery {
    ///     fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage) {
    ///         println!("item {} is {}x{}", item, image.width(), image.height());
    ///     }
    ///
    ///     fn on_loaded(&mut self, item: ItemId) {
    ///         println!("disable load button {}", item);
    ///     }
    /// }
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = Config::with_locators(["https://example.com/a.jpg"]);
    ///     let mut coordinator =
    ///         FetchCoordinator::new(&config, tokio::runtime::Handle::current(), Gallery)?;
    ///
    ///     coordinator.trigger_all();
    ///     coordinator.run_until_idle().await;
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: &Config, runtime: Handle, presenter: P) -> Result<Self> {
        config.validate()?;
        let collaborators = Collaborators::from_config(config, runtime)?;
        Ok(Self::with_collaborators(config, collaborators, presenter))
    }

    /// Create a coordinator on explicit collaborators
    pub fn with_collaborators(config: &Config, collaborators: Collaborators, presenter: P) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let launcher = Launcher::new(
            collaborators.runtime,
            collaborators.fetcher,
            collaborators.decoder,
            completion_tx,
        );

        let items: Vec<FetchItem> = config.locators.iter().map(FetchItem::new).collect();

        for (index, item) in items.iter().enumerate() {
            if let Some(e) = item.locator_error() {
                tracing::warn!(item = index, error = %e, "item will never fetch");
            }
        }

        tracing::info!(
            items = items.len(),
            fetcher = launcher.fetcher_name(),
            policy = ?config.fetch.duplicate_requests,
            "fetch coordinator ready"
        );

        Self {
            items,
            presenter,
            launcher,
            completion_rx,
            policy: config.fetch.duplicate_requests,
            outstanding: 0,
        }
    }
}

impl<P> FetchCoordinator<P> {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the coordinator holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order
    pub fn items(&self) -> &[FetchItem] {
        &self.items
    }

    /// Look up one item
    pub fn item(&self, id: ItemId) -> Result<&FetchItem> {
        self.items.get(id.0).ok_or(Error::UnknownItem {
            id,
            len: self.items.len(),
        })
    }

    /// State of one item
    pub fn state(&self, id: ItemId) -> Result<ItemState> {
        self.item(id).map(FetchItem::state)
    }

    /// Ids of all items, in display order
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId)
    }

    /// Number of requests whose completion has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.outstanding
    }

    /// Number of loaded items
    pub fn loaded_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_loaded()).count()
    }

    /// The presenter receiving callbacks
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the coordinator and return its presenter
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
