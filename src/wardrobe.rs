//! Wardrobe Filter Service
//!
//! Shows or hides wardrobe items by category selector and search text.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::config::Bootstrap;
use crate::filter::{category_options, visible_ids, ALL_CATEGORIES};
use crate::models::Item;

#[derive(Clone, Copy)]
pub struct WardrobeFilter {
    items: StoredValue<Vec<Item>>,
    options: StoredValue<Vec<(String, String)>>,
    category: RwSignal<String>,
    query: RwSignal<String>,
    visible: RwSignal<BTreeSet<u32>>,
}

impl WardrobeFilter {
    pub fn new(bootstrap: &Bootstrap) -> Self {
        Self {
            items: StoredValue::new(bootstrap.items.clone()),
            options: StoredValue::new(category_options(&bootstrap.items, &bootstrap.categories)),
            category: RwSignal::new(ALL_CATEGORIES.to_string()),
            query: RwSignal::new(String::new()),
            visible: RwSignal::new(BTreeSet::new()),
        }
    }

    /// Initial filter pass. The selector and search listeners are bound by the view.
    pub fn initialize(&self) {
        self.filter_items();
        log::info!("[Wardrobe] {} items", self.items.with_value(Vec::len));
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.get_value()
    }

    pub fn category_options(&self) -> Vec<(String, String)> {
        self.options.get_value()
    }

    pub fn category(&self) -> String {
        self.category.get()
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Category selector listener
    pub fn set_category(&self, category: String) {
        self.category.set(category);
        self.filter_items();
    }

    /// Search input listener
    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.filter_items();
    }

    /// Recompute item visibility from the current category and query.
    pub fn filter_items(&self) {
        let category = self.category.get_untracked();
        let query = self.query.get_untracked();
        let visible = self
            .items
            .with_value(|items| visible_ids(items, &category, &query));
        self.visible.set(visible);
    }

    pub fn is_shown(&self, item_id: u32) -> bool {
        self.visible.with(|visible| visible.contains(&item_id))
    }
}
