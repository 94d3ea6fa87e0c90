//! Core types for image-dl

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Position of an item in its coordinator (insertion order = display order)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Create a new ItemId
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the inner index
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ItemId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<ItemId> for usize {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fetch state of a single item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    /// No image loaded and nothing outstanding
    Pending,
    /// At least one request is outstanding and no image is loaded yet
    InFlight,
    /// Image fetched, decoded and delivered; terminal
    Loaded,
}

impl ItemState {
    /// Whether the item holds its image
    pub fn is_loaded(&self) -> bool {
        matches!(self, ItemState::Loaded)
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemState::Pending => "pending",
            ItemState::InFlight => "in_flight",
            ItemState::Loaded => "loaded",
        };
        f.write_str(s)
    }
}

/// What a single trigger did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A request was issued
    Started,
    /// Item is already loaded; nothing was issued
    AlreadyLoaded,
    /// A request is outstanding and duplicates are suppressed
    InFlight,
    /// Locator does not parse; nothing was issued
    InvalidLocator,
}

impl Trigger {
    /// Whether a network request was issued
    pub fn started(&self) -> bool {
        matches!(self, Trigger::Started)
    }
}

/// Raw response handed back by a [`Fetcher`](crate::fetch::Fetcher)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Build a response from status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome of one fetch, posted from the network task to the owning context
#[derive(Debug)]
pub(crate) struct Completion {
    pub(crate) item: ItemId,
    pub(crate) outcome: std::result::Result<DynamicImage, FetchError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_conversions() {
        let id = ItemId::new(4);
        assert_eq!(id.get(), 4);
        assert_eq!(usize::from(id), 4);
        assert_eq!(ItemId::from(4), id);
        assert_eq!(id.to_string(), "4");
    }

    #[test]
    fn test_fetch_response_success_range() {
        assert!(FetchResponse::new(200, vec![1]).is_success());
        assert!(FetchResponse::new(204, Vec::new()).is_success());
        assert!(!FetchResponse::new(199, vec![1]).is_success());
        assert!(!FetchResponse::new(301, vec![1]).is_success());
        assert!(!FetchResponse::new(404, vec![1]).is_success());
    }

    #[test]
    fn test_item_state_display() {
        assert_eq!(ItemState::Pending.to_string(), "pending");
        assert_eq!(ItemState::InFlight.to_string(), "in_flight");
        assert_eq!(ItemState::Loaded.to_string(), "loaded");
        assert!(ItemState::Loaded.is_loaded());
        assert!(!ItemState::InFlight.is_loaded());
    }
}
