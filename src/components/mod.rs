//! UI Components
//!
//! Leptos views over the app services.

mod nav_bar;
mod wardrobe_view;
mod drop_container;
mod outfit_builder_view;
mod outfit_library;

pub use nav_bar::{NavBar, ViewPanel};
pub use wardrobe_view::WardrobeView;
pub use drop_container::DropContainer;
pub use outfit_builder_view::OutfitBuilderView;
pub use outfit_library::OutfitLibrary;
