//! Per-locator fetch state.

use image::DynamicImage;
use url::Url;

use crate::config::DuplicatePolicy;
use crate::error::FetchError;
use crate::types::{ItemId, ItemState, Trigger};

use super::launch::Launcher;

/// One locator and its fetch lifecycle
///
/// An item delivers its image at most once. After a successful fetch it is
/// `Loaded` for good and every further trigger is a no-op.
#[derive(Debug)]
pub struct FetchItem {
    locator: String,
    /// Parsed once; the locator is immutable
    url: std::result::Result<Url, url::ParseError>,
    image: Option<DynamicImage>,
    in_flight: usize,
    requests_issued: u64,
}

/// What applying a completion did to an item
#[derive(Debug)]
pub(crate) enum Applied {
    /// First successful fetch; the image is now stored
    Loaded,
    /// Success for an item that was already loaded; payload dropped
    Duplicate,
    /// Fetch produced no image
    Failed(FetchError),
}

impl FetchItem {
    /// Create a pending item for `locator`
    pub fn new(locator: impl Into<String>) -> Self {
        let locator = locator.into();
        let url = Url::parse(&locator);
        Self {
            locator,
            url,
            image: None,
            in_flight: 0,
            requests_issued: 0,
        }
    }

    /// The locator as configured
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Parsed locator, if it is a valid URL
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref().ok()
    }

    /// Current fetch state
    pub fn state(&self) -> ItemState {
        if self.image.is_some() {
            ItemState::Loaded
        } else if self.in_flight > 0 {
            ItemState::InFlight
        } else {
            ItemState::Pending
        }
    }

    /// Whether the image has been delivered
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// The decoded image, once loaded
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    /// Number of requests issued for this item so far
    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    /// Parse error for an invalid locator
    pub(crate) fn locator_error(&self) -> Option<FetchError> {
        self.url
            .as_ref()
            .err()
            .map(|e| FetchError::LocatorInvalid {
                locator: self.locator.clone(),
                reason: e.to_string(),
            })
    }

    /// Issue a fetch unless the item is loaded, its locator is invalid, or
    /// the policy suppresses a duplicate request. Never blocks.
    pub(crate) fn trigger_fetch(
        &mut self,
        id: ItemId,
        launcher: &Launcher,
        policy: DuplicatePolicy,
    ) -> Trigger {
        if self.is_loaded() {
            return Trigger::AlreadyLoaded;
        }

        let url = match &self.url {
            Ok(url) => url.clone(),
            Err(_) => return Trigger::InvalidLocator,
        };

        if self.in_flight > 0 && policy == DuplicatePolicy::Suppress {
            return Trigger::InFlight;
        }

        if self.in_flight > 0 {
            tracing::debug!(
                item = %id,
                outstanding = self.in_flight,
                "issuing duplicate request for item with request in flight"
            );
        }

        self.in_flight += 1;
        self.requests_issued += 1;
        launcher.launch(id, url);
        Trigger::Started
    }

    /// Record the outcome of one request
    pub(crate) fn complete(
        &mut self,
        outcome: std::result::Result<DynamicImage, FetchError>,
    ) -> Applied {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Ok(_) if self.is_loaded() => Applied::Duplicate,
            Ok(image) => {
                self.image = Some(image);
                Applied::Loaded
            }
            Err(e) => Applied::Failed(e),
        }
    }
}
