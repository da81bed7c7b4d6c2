//! Application Context
//!
//! Service handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::outfit_builder::OutfitBuilder;
use crate::outfits::OutfitsManager;
use crate::views::ViewSwitcher;
use crate::wardrobe::WardrobeFilter;

/// App-wide services, constructed once by `App`
#[derive(Clone, Copy)]
pub struct AppContext {
    pub views: ViewSwitcher,
    pub outfits: OutfitsManager,
    pub builder: OutfitBuilder,
    pub wardrobe: WardrobeFilter,
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
