//! Applying completions and delivering callbacks on the owning context.

use crate::presenter::Presenter;
use crate::types::{Completion, ItemId};

use super::FetchCoordinator;
use super::item::Applied;

impl<P: Presenter> FetchCoordinator<P> {
    /// Apply every completion that has already arrived, without waiting
    ///
    /// Suited to polling from a UI frame or tick. Returns the number of
    /// completions applied.
    pub fn process_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it
    ///
    /// Returns the id of the item it belonged to, or `None` when no request
    /// is outstanding. Cancel-safe: dropping the future loses no completion.
    pub async fn next_completion(&mut self) -> Option<ItemId> {
        if self.outstanding == 0 {
            return None;
        }

        let completion = self.completion_rx.recv().await?;
        let item = completion.item;
        self.apply(completion);
        Some(item)
    }

    /// Apply completions until no request is outstanding
    pub async fn run_until_idle(&mut self) {
        while self.next_completion().await.is_some() {}
        tracing::debug!(loaded = self.loaded_count(), items = self.items.len(), "fetches idle");
    }

    fn apply(&mut self, completion: Completion) {
        let Completion { item: id, outcome } = completion;
        self.outstanding = self.outstanding.saturating_sub(1);

        let Some(item) = self.items.get_mut(id.0) else {
            tracing::warn!(item = %id, "completion for unknown item dropped");
            return;
        };

        match item.complete(outcome) {
            Applied::Loaded => {
                if let Some(image) = item.image() {
                    tracing::debug!(
                        item = %id,
                        width = image.width(),
                        height = image.height(),
                        "image loaded"
                    );
                    self.presenter.on_image_ready(id, image);
                    self.presenter.on_loaded(id);
                }
            }
            Applied::Duplicate => {
                tracing::debug!(item = %id, "duplicate fetch result discarded");
            }
            Applied::Failed(e) => {
                tracing::debug!(
                    item = %id,
                    locator = %item.locator(),
                    error = %e,
                    "fetch produced no image"
                );
                self.presenter.on_error(id, &e);
            }
        }
    }
}
