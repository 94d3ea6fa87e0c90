//! Network fetch and image decode collaborators
//!
//! The coordinator depends on two capabilities only:
//!
//! - [`Fetcher`]: retrieve the raw bytes and status behind a locator
//! - [`Decoder`]: turn those bytes into an image
//!
//! [`HttpFetcher`] and [`ImageDecoder`] are the stock implementations; tests
//! and embedders can supply their own.
//!
//! ## Usage
//!
//! ```no_run
//! use image_dl::fetch::{Decoder, Fetcher, HttpFetcher, ImageDecoder};
//! use image_dl::config::HttpConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = HttpFetcher::from_config(&HttpConfig::default())?;
//!     let url = url::Url::parse("https://example.com/photo.jpg")?;
//!
//!     let response = fetcher.fetch(&url).await?;
//!     if response.is_success() {
//!         let image = ImageDecoder.decode(&response.body)?;
//!         println!("{}x{}", image.width(), image.height());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod decode;
mod http;
mod traits;

pub use decode::ImageDecoder;
pub use http::HttpFetcher;
pub use traits::{Decoder, Fetcher};
