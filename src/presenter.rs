//! Callbacks from the coordinator into the presentation layer

use image::DynamicImage;

use crate::error::FetchError;
use crate::types::ItemId;

/// Receiver of per-item fetch results
///
/// Every method runs on the context that owns the
/// [`FetchCoordinator`](crate::FetchCoordinator), never on a network thread,
/// so implementations may touch UI state directly and need not be `Send`.
///
/// For each item, `on_image_ready` and `on_loaded` are each called at most
/// once, in that order.
pub trait Presenter {
    /// The image for `item` is available
    fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage);

    /// `item` is loaded; its trigger affordance should be retired
    fn on_loaded(&mut self, item: ItemId);

    /// A fetch attempt for `item` produced no image
    ///
    /// The item stays triggerable. The default implementation ignores the
    /// failure.
    fn on_error(&mut self, item: ItemId, error: &FetchError) {
        let _ = (item, error);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage) {
        (**self).on_image_ready(item, image);
    }

    fn on_loaded(&mut self, item: ItemId) {
        (**self).on_loaded(item);
    }

    fn on_error(&mut self, item: ItemId, error: &FetchError) {
        (**self).on_error(item, error);
    }
}
