//! Presenter that records callbacks for assertions

use image::DynamicImage;
use image_dl::{FetchError, FetchErrorKind, ItemId, Presenter};

/// Records every callback the coordinator makes
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// (item, width, height) per image delivered
    pub ready: Vec<(ItemId, u32, u32)>,
    /// Items whose trigger was retired
    pub loaded: Vec<ItemId>,
    /// Failures offered to the presenter
    pub errors: Vec<(ItemId, FetchErrorKind)>,
}

impl RecordingPresenter {
    /// `ready` sorted by item, for order-independent comparisons
    pub fn ready_sorted(&self) -> Vec<(ItemId, u32, u32)> {
        let mut ready = self.ready.clone();
        ready.sort();
        ready
    }
}

impl Presenter for RecordingPresenter {
    fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage) {
        self.ready.push((item, image.width(), image.height()));
    }

    fn on_loaded(&mut self, item: ItemId) {
        self.loaded.push(item);
    }

    fn on_error(&mut self, item: ItemId, error: &FetchError) {
        self.errors.push((item, error.kind()));
    }
}
