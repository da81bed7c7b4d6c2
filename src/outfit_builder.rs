//! Outfit Builder Service
//!
//! Drag-and-drop composition of a new outfit and the save flow. Resolution of
//! a save arrives asynchronously through the outfits manager.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::builder::{parse_transfer, BuilderState, BuilderStateStoreFields, Container};
use crate::dialog;
use crate::error::SaveError;
use crate::models::Item;
use crate::outfits::OutfitsManager;
use crate::views::ViewSwitcher;

/// Payload format of a dragged item
pub const TRANSFER_FORMAT: &str = "text/plain";

#[derive(Clone, Copy)]
pub struct OutfitBuilder {
    state: Store<BuilderState>,
    manager: OutfitsManager,
    /// Container currently hovered by a drag
    drag_over: RwSignal<Option<Container>>,
    /// Item being dragged
    dragging: RwSignal<Option<u32>>,
}

impl OutfitBuilder {
    pub fn new(items: Vec<Item>, manager: OutfitsManager) -> Self {
        Self {
            state: Store::new(BuilderState::new(items)),
            manager,
            drag_over: RwSignal::new(None),
            dragging: RwSignal::new(None),
        }
    }

    pub fn initialize(&self) {
        self.rearm_drag_and_drop();
        self.filter_builder_items();
        log::info!(
            "[Builder] initialized with {} items",
            self.state.catalog().with_untracked(Vec::len)
        );
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn items_in(&self, container: Container) -> Vec<u32> {
        match container {
            Container::Available => self.state.available().get(),
            Container::Selected => self.state.selected().get(),
        }
    }

    pub fn item(&self, item_id: u32) -> Option<Item> {
        self.state.catalog().with_untracked(|catalog| {
            catalog.iter().find(|item| item.id == item_id).cloned()
        })
    }

    pub fn is_shown(&self, item_id: u32) -> bool {
        self.state.hidden().with(|hidden| !hidden.contains(&item_id))
    }

    /// Empty-state placeholder of `container`, shown exactly when it has no items.
    pub fn placeholder(&self, container: Container) -> Option<&'static str> {
        self.state.with(|state| state.placeholder(container))
    }

    pub fn query(&self, container: Container) -> String {
        match container {
            Container::Available => self.state.wardrobe_query().get(),
            Container::Selected => self.state.outfit_query().get(),
        }
    }

    pub fn outfit_name(&self) -> String {
        self.state.outfit_name().get()
    }

    pub fn save_label(&self) -> &'static str {
        self.state.with(BuilderState::save_label)
    }

    pub fn is_saving(&self) -> bool {
        self.state.saving().get()
    }

    pub fn is_drag_over(&self, container: Container) -> bool {
        self.drag_over.get() == Some(container)
    }

    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.dragging.get() == Some(item_id)
    }

    // ========================
    // Inputs
    // ========================

    pub fn set_outfit_name(&self, name: String) {
        self.state.outfit_name().set(name);
    }

    /// Search input listener
    pub fn set_query(&self, container: Container, query: String) {
        self.state.update(|state| state.set_query(container, query));
    }

    /// Re-apply both containers' search queries.
    pub fn filter_builder_items(&self) {
        self.state.update(BuilderState::apply_filters);
    }

    // ========================
    // Drag and drop
    // ========================

    /// Clear transient drag state left over from an interrupted drag.
    pub fn rearm_drag_and_drop(&self) {
        self.drag_over.set(None);
        self.dragging.set(None);
    }

    pub fn drag_start(&self, item_id: u32) {
        self.dragging.set(Some(item_id));
    }

    pub fn drag_end(&self) {
        self.dragging.set(None);
    }

    pub fn drag_enter(&self, container: Container) {
        if self.drag_over.get_untracked() != Some(container) {
            self.drag_over.set(Some(container));
        }
    }

    pub fn drag_leave(&self, container: Container) {
        if self.drag_over.get_untracked() == Some(container) {
            self.drag_over.set(None);
        }
    }

    /// Drop handler: move the item named by `payload` into `container`.
    pub fn drop_item(&self, container: Container, payload: &str) {
        self.drag_over.set(None);
        let Some(item_id) = parse_transfer(payload) else {
            log::warn!("[Builder] ignoring drop with payload {:?}", payload);
            return;
        };
        let moved = self
            .state
            .try_update(|state| state.move_item(item_id, container))
            .unwrap_or(false);
        if moved {
            log::debug!("[Builder] moved item {} to {}", item_id, container.dom_id());
        }
    }

    // ========================
    // Save flow
    // ========================

    /// Clear the form and move every selected item back to "available".
    pub fn reset(&self) {
        self.state.update(BuilderState::reset);
    }

    pub fn save_outfit(&self) {
        if let Err(e) = self.submit_outfit() {
            dialog::alert(&e.to_string());
        }
    }

    /// Validate the draft and hand it to the manager. The save control stays
    /// busy only when the request went out.
    pub(crate) fn submit_outfit(&self) -> Result<(), SaveError> {
        let draft = self.state.with_untracked(BuilderState::prepare_save).map_err(|e| {
            log::warn!("[Builder] save rejected: {}", e);
            e
        })?;

        if !self.manager.is_connected() {
            self.restore_save_button();
            return Err(SaveError::NotConnected);
        }

        self.state.saving().set(true);
        if let Err(e) = self.manager.create_outfit(&draft.name, &draft.item_ids) {
            self.restore_save_button();
            return Err(e.into());
        }
        Ok(())
    }

    /// Return the save control to idle. Safe when no save is in flight.
    pub fn restore_save_button(&self) {
        self.state.saving().set(false);
    }

    /// The server confirmed a creation.
    pub fn on_outfit_created(&self, views: ViewSwitcher) {
        self.rearm_drag_and_drop();
        self.reset();
        self.restore_save_button();
        views.show_outfit_library();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use futures::channel::mpsc;

    use super::*;
    use crate::outfits::tests::make_manager;

    pub(crate) fn make_builder(manager: OutfitsManager) -> OutfitBuilder {
        let items = [(1, "White Tee"), (2, "Blue Jeans"), (3, "Red Scarf")]
            .into_iter()
            .map(|(id, name)| Item {
                id,
                name: name.to_string(),
                image_url: format!("/i/{}.png", id),
                category: None,
            })
            .collect();
        OutfitBuilder::new(items, manager)
    }

    #[test]
    fn test_submit_sends_one_create_frame() {
        let manager = make_manager();
        let (tx, mut rx) = mpsc::unbounded();
        manager.attach(tx);
        let builder = make_builder(manager);

        builder.drop_item(Container::Selected, "1");
        builder.drop_item(Container::Selected, "3");
        builder.set_outfit_name("  Brunch  ".to_string());

        assert_eq!(builder.submit_outfit(), Ok(()));
        assert!(builder.is_saving());
        assert_eq!(builder.save_label(), crate::builder::SAVING_LABEL);

        let frame: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(frame["type"], "create_outfit");
        assert_eq!(frame["outfit"]["name"], "Brunch");
        assert_eq!(frame["outfit"]["item_ids"], serde_json::json!([1, 3]));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rejected_submit_sends_nothing() {
        let manager = make_manager();
        let (tx, mut rx) = mpsc::unbounded();
        manager.attach(tx);
        let builder = make_builder(manager);

        builder.set_outfit_name("Brunch".to_string());
        assert_eq!(builder.submit_outfit(), Err(SaveError::NoItems));

        builder.drop_item(Container::Selected, "2");
        builder.set_outfit_name("   ".to_string());
        assert_eq!(builder.submit_outfit(), Err(SaveError::MissingName));

        assert!(!builder.is_saving());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_while_disconnected_restores_button() {
        let builder = make_builder(make_manager());
        builder.drop_item(Container::Selected, "2");
        builder.set_outfit_name("Brunch".to_string());

        assert_eq!(builder.submit_outfit(), Err(SaveError::NotConnected));
        assert!(!builder.is_saving());
        assert_eq!(builder.items_in(Container::Selected), vec![2]);
    }
}
