//! # image-dl
//!
//! Concurrent per-item image fetching for UI-style consumers.
//!
//! ## Design Philosophy
//!
//! image-dl is designed to be:
//! - **Idempotent per item** - Each locator delivers its image at most once
//! - **Non-blocking** - Triggers return at once; network work runs on an injected runtime
//! - **Single-context delivery** - State changes and callbacks happen only on the
//!   context that owns the coordinator, never on network threads
//! - **Library-first** - No UI, purely a Rust crate for embedding
//!
//! ## Quick Start
//!
//! ```no_run
//! use image_dl::{Config, FetchCoordinator, ItemId, Presenter};
//! use image::DynamicImage;
//!
//! struct Gallery;
//!
//! impl Presenter for Gallery {
//!     fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage) {
//!         println!("Image {} ready: {}x{}", item, image.width(), image.height());
//!     }
//!
//!     fn on_loaded(&mut self, item: ItemId) {
//!         println!("Load button {} disabled", item);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::with_locators([
//!         "https://example.com/a.jpg",
//!         "https://example.com/b.jpg",
//!     ]);
//!
//!     let mut coordinator =
//!         FetchCoordinator::new(&config, tokio::runtime::Handle::current(), Gallery)?;
//!
//!     // Load one image, then everything else
//!     coordinator.trigger_one(ItemId(0))?;
//!     coordinator.trigger_all();
//!
//!     coordinator.run_until_idle().await;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Fetch coordination and per-item state
pub mod coordinator;
/// Error types
pub mod error;
/// Network fetch and image decode collaborators
pub mod fetch;
/// Presentation callbacks
pub mod presenter;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{Config, DuplicatePolicy, FetchPolicyConfig, HttpConfig};
pub use coordinator::{Collaborators, FetchCoordinator, FetchItem};
pub use error::{Error, FetchError, FetchErrorKind, Result};
pub use fetch::{Decoder, Fetcher, HttpFetcher, ImageDecoder};
pub use presenter::Presenter;
pub use types::{FetchResponse, ItemId, ItemState, Trigger};
