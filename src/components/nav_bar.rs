//! Navigation Bar Component
//!
//! Switches between the wardrobe, builder and library panels.

use leptos::prelude::*;

use crate::connection::ConnectionStatus;
use crate::context::use_app_context;
use crate::views::View;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let views = ctx.views;
    let status = ctx.outfits.status();

    let tab_class = move |view: View| {
        if views.is_active(view) { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <nav class="nav-bar">
            <button class=move || tab_class(View::Wardrobe) on:click=move |_| views.show_wardrobe()>
                "My Wardrobe"
            </button>
            <button class=move || tab_class(View::OutfitBuilder) on:click=move |_| views.show_outfit_builder()>
                "Create Outfit"
            </button>
            <button class=move || tab_class(View::OutfitLibrary) on:click=move |_| views.show_outfit_library()>
                "My Outfits"
            </button>
            <button class="nav-btn" on:click=move |_| views.show_recommendations()>
                "Recommendations"
            </button>
            <span class=move || match status.get() {
                ConnectionStatus::Open => "connection-status online",
                ConnectionStatus::Connecting => "connection-status connecting",
                ConnectionStatus::Disconnected => "connection-status offline",
            } />
        </nav>
    }
}

/// A top-level panel, active only while `view` is selected
#[component]
pub fn ViewPanel(view: View, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let views = ctx.views;

    view! {
        <section
            id=view.dom_id()
            class=move || if views.is_active(view) { "view active" } else { "view" }
        >
            {children()}
        </section>
    }
}
