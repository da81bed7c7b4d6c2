//! Outfit Builder State
//!
//! Draft outfit being composed by dragging wardrobe items between the
//! "available" and "selected" containers. Uses reactive_stores so the view
//! can track individual fields.

use std::collections::BTreeSet;

use reactive_stores::Store;

use crate::error::SaveError;
use crate::filter::name_matches;
use crate::models::Item;

pub const SAVE_LABEL: &str = "Save Outfit";
pub const SAVING_LABEL: &str = "Saving...";

/// The two drop targets of the builder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    Available,
    Selected,
}

impl Container {
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Available => "available-clothes",
            Self::Selected => "selected-items",
        }
    }

    /// Id of the search input filtering this container
    pub fn search_id(self) -> &'static str {
        match self {
            Self::Available => "wardrobe-search",
            Self::Selected => "outfit-search",
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            Self::Available => "All items are in your outfit",
            Self::Selected => "Drag items here to build your outfit",
        }
    }
}

/// A validated outfit ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitDraft {
    pub name: String,
    pub item_ids: Vec<u32>,
}

#[derive(Clone, Debug, Default, Store)]
pub struct BuilderState {
    /// Wardrobe items the builder can place
    pub catalog: Vec<Item>,
    pub outfit_name: String,
    /// Item ids in the "available" container, in display order
    pub available: Vec<u32>,
    /// Item ids in the "selected" container, in drop order
    pub selected: Vec<u32>,
    pub wardrobe_query: String,
    pub outfit_query: String,
    /// Items hidden by the current search queries
    pub hidden: BTreeSet<u32>,
    /// A create request is in flight
    pub saving: bool,
}

impl BuilderState {
    pub fn new(catalog: Vec<Item>) -> Self {
        let available = catalog.iter().map(|item| item.id).collect();
        Self {
            catalog,
            available,
            ..Default::default()
        }
    }

    pub fn items_in(&self, container: Container) -> &[u32] {
        match container {
            Container::Available => &self.available,
            Container::Selected => &self.selected,
        }
    }

    fn items_in_mut(&mut self, container: Container) -> &mut Vec<u32> {
        match container {
            Container::Available => &mut self.available,
            Container::Selected => &mut self.selected,
        }
    }

    pub fn container_of(&self, item_id: u32) -> Option<Container> {
        if self.available.contains(&item_id) {
            Some(Container::Available)
        } else if self.selected.contains(&item_id) {
            Some(Container::Selected)
        } else {
            None
        }
    }

    pub fn item(&self, item_id: u32) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id == item_id)
    }

    pub fn query(&self, container: Container) -> &str {
        match container {
            Container::Available => &self.wardrobe_query,
            Container::Selected => &self.outfit_query,
        }
    }

    pub fn set_query(&mut self, container: Container, query: String) {
        match container {
            Container::Available => self.wardrobe_query = query,
            Container::Selected => self.outfit_query = query,
        }
        self.apply_filters();
    }

    /// Move an item into `target`. Returns false when the item is unknown or
    /// already there.
    pub fn move_item(&mut self, item_id: u32, target: Container) -> bool {
        let Some(source) = self.container_of(item_id) else {
            return false;
        };
        if source == target {
            return false;
        }
        self.items_in_mut(source).retain(|id| *id != item_id);
        self.items_in_mut(target).push(item_id);
        self.apply_filters();
        true
    }

    /// Recompute which items each container's search query hides.
    pub fn apply_filters(&mut self) {
        let mut hidden = BTreeSet::new();
        for container in [Container::Available, Container::Selected] {
            let query = self.query(container);
            for id in self.items_in(container) {
                let shown = self
                    .item(*id)
                    .map_or(true, |item| name_matches(&item.name, query));
                if !shown {
                    hidden.insert(*id);
                }
            }
        }
        self.hidden = hidden;
    }

    pub fn is_shown(&self, item_id: u32) -> bool {
        !self.hidden.contains(&item_id)
    }

    /// Placeholder text for `container`, present exactly when it holds no items.
    pub fn placeholder(&self, container: Container) -> Option<&'static str> {
        self.items_in(container)
            .is_empty()
            .then(|| container.empty_text())
    }

    /// Clear inputs and move every selected item back to "available".
    pub fn reset(&mut self) {
        self.outfit_name.clear();
        self.wardrobe_query.clear();
        self.outfit_query.clear();
        let selected = std::mem::take(&mut self.selected);
        self.available.extend(selected);
        self.apply_filters();
    }

    /// Validate the draft: at least one selected item, then a non-blank name.
    pub fn prepare_save(&self) -> Result<OutfitDraft, SaveError> {
        if self.selected.is_empty() {
            return Err(SaveError::NoItems);
        }
        let name = self.outfit_name.trim();
        if name.is_empty() {
            return Err(SaveError::MissingName);
        }
        Ok(OutfitDraft {
            name: name.to_string(),
            item_ids: self.selected.clone(),
        })
    }

    pub fn save_label(&self) -> &'static str {
        if self.saving {
            SAVING_LABEL
        } else {
            SAVE_LABEL
        }
    }
}

/// Parse the item id carried by a drag transfer.
pub fn parse_transfer(data: &str) -> Option<u32> {
    data.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            image_url: format!("/i/{}.png", id),
            category: Some("top".to_string()),
        }
    }

    fn make_state() -> BuilderState {
        BuilderState::new(vec![
            make_item(1, "White Tee"),
            make_item(2, "Blue Jeans"),
            make_item(3, "Red Scarf"),
            make_item(4, "Black Boots"),
        ])
    }

    fn total(state: &BuilderState) -> usize {
        state.available.len() + state.selected.len()
    }

    #[test]
    fn test_new_places_everything_in_available() {
        let state = make_state();
        assert_eq!(state.available, vec![1, 2, 3, 4]);
        assert!(state.selected.is_empty());
        assert_eq!(state.save_label(), SAVE_LABEL);
    }

    #[test]
    fn test_move_conserves_items() {
        let mut state = make_state();
        let moves = [
            (1, Container::Selected),
            (3, Container::Selected),
            (1, Container::Available),
            (4, Container::Selected),
            (3, Container::Selected),
            (2, Container::Selected),
            (4, Container::Available),
        ];
        for (id, target) in moves {
            state.move_item(id, target);
            assert_eq!(total(&state), 4);
            assert_eq!(state.container_of(id), Some(target));
            let in_both = state.available.contains(&id) && state.selected.contains(&id);
            assert!(!in_both);
        }
        assert_eq!(state.selected, vec![3, 2]);
    }

    #[test]
    fn test_move_to_same_container_is_noop() {
        let mut state = make_state();
        assert!(!state.move_item(2, Container::Available));
        assert_eq!(state.available, vec![1, 2, 3, 4]);
        assert!(state.move_item(2, Container::Selected));
        assert!(!state.move_item(2, Container::Selected));
        assert_eq!(state.selected, vec![2]);
    }

    #[test]
    fn test_move_unknown_item_is_noop() {
        let mut state = make_state();
        assert!(!state.move_item(99, Container::Selected));
        assert_eq!(total(&state), 4);
    }

    #[test]
    fn test_placeholder_tracks_emptiness() {
        let mut state = make_state();
        let check = |state: &BuilderState| {
            for container in [Container::Available, Container::Selected] {
                assert_eq!(
                    state.placeholder(container).is_some(),
                    state.items_in(container).is_empty()
                );
            }
        };
        check(&state);
        for id in [1, 2, 3, 4] {
            state.move_item(id, Container::Selected);
            check(&state);
        }
        assert_eq!(state.placeholder(Container::Available), Some("All items are in your outfit"));
        state.move_item(2, Container::Available);
        check(&state);
        state.reset();
        check(&state);
        assert_eq!(
            state.placeholder(Container::Selected),
            Some("Drag items here to build your outfit")
        );
    }

    #[test]
    fn test_filters_apply_per_container() {
        let mut state = make_state();
        state.move_item(2, Container::Selected);
        state.move_item(4, Container::Selected);

        state.set_query(Container::Available, "TEE".to_string());
        assert!(state.is_shown(1));
        assert!(!state.is_shown(3));
        // selected items ignore the wardrobe query
        assert!(state.is_shown(2));
        assert!(state.is_shown(4));

        state.set_query(Container::Selected, "jeans".to_string());
        assert!(state.is_shown(2));
        assert!(!state.is_shown(4));
    }

    #[test]
    fn test_filter_follows_moved_item() {
        let mut state = make_state();
        state.set_query(Container::Selected, "boots".to_string());
        state.move_item(1, Container::Selected);
        assert!(!state.is_shown(1));
        state.move_item(1, Container::Available);
        assert!(state.is_shown(1));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = make_state();
        state.move_item(3, Container::Selected);
        state.move_item(1, Container::Selected);
        state.outfit_name = "Weekend".to_string();
        state.set_query(Container::Available, "zzz".to_string());
        state.set_query(Container::Selected, "zzz".to_string());

        state.reset();

        assert!(state.selected.is_empty());
        assert_eq!(state.available, vec![2, 4, 3, 1]);
        assert!(state.outfit_name.is_empty());
        assert!(state.wardrobe_query.is_empty());
        assert!(state.outfit_query.is_empty());
        assert!(state.hidden.is_empty());
    }

    #[test]
    fn test_prepare_save_requires_items_first() {
        let state = make_state();
        assert_eq!(state.prepare_save(), Err(SaveError::NoItems));
    }

    #[test]
    fn test_prepare_save_requires_name() {
        let mut state = make_state();
        state.move_item(1, Container::Selected);
        assert_eq!(state.prepare_save(), Err(SaveError::MissingName));
        state.outfit_name = "   \t".to_string();
        assert_eq!(state.prepare_save(), Err(SaveError::MissingName));
    }

    #[test]
    fn test_prepare_save_returns_trimmed_draft() {
        let mut state = make_state();
        state.move_item(3, Container::Selected);
        state.move_item(1, Container::Selected);
        state.outfit_name = "  Date night ".to_string();
        assert_eq!(
            state.prepare_save(),
            Ok(OutfitDraft { name: "Date night".to_string(), item_ids: vec![3, 1] })
        );
    }

    #[test]
    fn test_parse_transfer() {
        assert_eq!(parse_transfer("12"), Some(12));
        assert_eq!(parse_transfer(" 7 "), Some(7));
        assert_eq!(parse_transfer(""), None);
        assert_eq!(parse_transfer("abc"), None);
    }
}
