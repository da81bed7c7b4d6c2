//! Wardrobe Frontend App
//!
//! Builds the services, wires the manager's notifications to the builder,
//! and lays out the three panels.

use leptos::prelude::*;

use crate::cache::ManagerEvent;
use crate::components::{NavBar, OutfitBuilderView, OutfitLibrary, ViewPanel, WardrobeView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::outfit_builder::OutfitBuilder;
use crate::outfits::OutfitsManager;
use crate::views::{View, ViewSwitcher};
use crate::wardrobe::WardrobeFilter;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();

    // Services
    let outfits = OutfitsManager::new(&config);
    let builder = OutfitBuilder::new(config.bootstrap.items.clone(), outfits);
    let wardrobe = WardrobeFilter::new(&config.bootstrap);
    let views = ViewSwitcher::new(outfits, builder);

    // Dispatched after the cache and grid have been updated
    outfits.subscribe(Callback::new(move |event: ManagerEvent| match event {
        ManagerEvent::OutfitCreated(outfit) => {
            log::info!("[App] outfit {} created", outfit.id);
            builder.on_outfit_created(views);
        }
        ManagerEvent::ServerError(_) => builder.restore_save_button(),
    }));

    provide_context(AppContext { views, outfits, builder, wardrobe });

    wardrobe.initialize();
    outfits.connect();
    builder.initialize();
    log::info!("[App] initialized");

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                <ViewPanel view=View::Wardrobe>
                    <WardrobeView />
                </ViewPanel>
                <ViewPanel view=View::OutfitBuilder>
                    <OutfitBuilderView />
                </ViewPanel>
                <ViewPanel view=View::OutfitLibrary>
                    <OutfitLibrary />
                </ViewPanel>
            </main>
        </div>
    }
}
