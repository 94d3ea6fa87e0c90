//! Single and bulk triggering.

use crate::error::{Error, Result};
use crate::presenter::Presenter;
use crate::types::{ItemId, Trigger};

use super::FetchCoordinator;

impl<P: Presenter> FetchCoordinator<P> {
    /// Trigger a fetch for one item
    ///
    /// Equivalent to the item's own trigger: a no-op if the item is loaded
    /// or its locator is invalid. Returns immediately; the outcome is
    /// delivered by the completion methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownItem`] if `id` is out of range.
    pub fn trigger_one(&mut self, id: ItemId) -> Result<Trigger> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(id.0)
            .ok_or(Error::UnknownItem { id, len })?;

        let trigger = item.trigger_fetch(id, &self.launcher, self.policy);
        self.record_trigger(id, trigger);
        Ok(trigger)
    }

    /// Trigger every item, in display order
    ///
    /// Loaded items and items with invalid locators are skipped by their
    /// own guards. Does not wait for any fetch; completions may arrive in
    /// any order.
    pub fn trigger_all(&mut self) {
        tracing::info!(items = self.items.len(), "triggering all items");

        for index in 0..self.items.len() {
            let id = ItemId(index);
            let trigger = self.items[index].trigger_fetch(id, &self.launcher, self.policy);
            self.record_trigger(id, trigger);
        }
    }

    fn record_trigger(&mut self, id: ItemId, trigger: Trigger) {
        match trigger {
            Trigger::Started => self.outstanding += 1,
            Trigger::InvalidLocator => {
                if let Some(e) = self.items[id.0].locator_error() {
                    tracing::debug!(item = %id, error = %e, "trigger ignored");
                    self.presenter.on_error(id, &e);
                }
            }
            Trigger::AlreadyLoaded | Trigger::InFlight => {
                tracing::trace!(item = %id, outcome = ?trigger, "trigger ignored");
            }
        }
    }
}
