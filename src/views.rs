//! View Switching
//!
//! Exactly one top-level panel is active at a time. Entering or leaving the
//! library keeps the outfits manager's visibility flag in step.

use leptos::prelude::*;

use crate::dialog;
use crate::outfit_builder::OutfitBuilder;
use crate::outfits::OutfitsManager;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Wardrobe,
    OutfitBuilder,
    OutfitLibrary,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            Self::Wardrobe => "wardrobe",
            Self::OutfitBuilder => "outfit-builder",
            Self::OutfitLibrary => "outfit-library",
        }
    }

    /// Id of the panel element
    pub fn dom_id(self) -> String {
        format!("{}-view", self.name())
    }
}

#[derive(Clone, Copy)]
pub struct ViewSwitcher {
    active: RwSignal<View>,
    outfits: OutfitsManager,
    builder: OutfitBuilder,
}

impl ViewSwitcher {
    pub fn new(outfits: OutfitsManager, builder: OutfitBuilder) -> Self {
        Self {
            active: RwSignal::new(View::default()),
            outfits,
            builder,
        }
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active.get() == view
    }

    /// Deactivate every panel and activate `view`.
    pub fn show_view(&self, view: View) {
        log::debug!("[App] showing {}", view.dom_id());
        self.active.set(view);
    }

    pub fn show_outfit_library(&self) {
        self.show_view(View::OutfitLibrary);
        if !self.outfits.is_connected() {
            self.outfits.connect();
        }
        self.outfits.show_library();
    }

    pub fn show_wardrobe(&self) {
        self.show_view(View::Wardrobe);
        self.outfits.hide_library();
    }

    pub fn show_outfit_builder(&self) {
        self.show_view(View::OutfitBuilder);
        self.outfits.hide_library();
        self.builder.reset();
        self.builder.rearm_drag_and_drop();
    }

    pub fn show_recommendations(&self) {
        dialog::alert("Personal Recommendations feature coming soon!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Container;
    use crate::models::Outfit;
    use crate::outfit_builder::tests::make_builder;
    use crate::outfits::tests::make_manager;
    use crate::protocol::ServerMessage;

    #[test]
    fn test_view_dom_ids() {
        assert_eq!(View::Wardrobe.dom_id(), "wardrobe-view");
        assert_eq!(View::OutfitBuilder.dom_id(), "outfit-builder-view");
        assert_eq!(View::OutfitLibrary.dom_id(), "outfit-library-view");
        assert_eq!(View::default(), View::Wardrobe);
    }

    #[test]
    fn test_leaving_library_hides_it() {
        let outfits = make_manager();
        let views = ViewSwitcher::new(outfits, make_builder(outfits));

        outfits.set_library_visible(true);
        views.show_wardrobe();
        assert!(views.is_active(View::Wardrobe));
        assert!(!outfits.is_library_visible());

        outfits.handle_message(ServerMessage::OutfitsList {
            outfits: vec![Outfit { id: 1, name: "Casual".to_string(), items: Vec::new() }],
        });
        assert!(outfits.grid().get_untracked().is_empty());

        outfits.set_library_visible(true);
        views.show_outfit_builder();
        assert!(views.is_active(View::OutfitBuilder));
        assert!(!outfits.is_library_visible());
    }

    #[test]
    fn test_entering_builder_resets_it() {
        let outfits = make_manager();
        let builder = make_builder(outfits);
        let views = ViewSwitcher::new(outfits, builder);

        builder.drop_item(Container::Selected, "1");
        builder.set_outfit_name("Brunch".to_string());
        builder.set_query(Container::Available, "jeans".to_string());
        builder.drag_start(2);
        builder.drag_enter(Container::Selected);

        views.show_outfit_builder();

        assert!(builder.items_in(Container::Selected).is_empty());
        let mut available = builder.items_in(Container::Available);
        available.sort();
        assert_eq!(available, vec![1, 2, 3]);
        assert_eq!(builder.outfit_name(), "");
        assert_eq!(builder.query(Container::Available), "");
        assert!(builder.is_shown(1));
        assert!(!builder.is_dragging(2));
        assert!(!builder.is_drag_over(Container::Selected));
    }
}
