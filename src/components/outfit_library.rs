//! Outfit Library Component
//!
//! Grid of saved outfits. The grid mirrors what the outfits manager last
//! rendered, which only changes while the library is visible.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::html::outfit_card_html;
use crate::models::Outfit;
use crate::outfits::{EMPTY_ID, GRID_ID};

#[component]
pub fn OutfitLibrary() -> impl IntoView {
    let ctx = use_app_context();
    let grid = ctx.outfits.grid();

    view! {
        <div
            id=EMPTY_ID
            class="empty-state"
            style:display=move || if grid.with(Vec::is_empty) { "block" } else { "none" }
        >
            "No outfits yet. Create one in the outfit builder!"
        </div>
        <div id=GRID_ID class="outfits-grid">
            <For
                each=move || grid.get()
                // Content is part of the key so an updated outfit re-renders its card
                key=|outfit| (outfit.id, outfit_card_html(outfit))
                children=move |outfit| view! { <OutfitCard outfit=outfit /> }
            />
        </div>
    }
}

#[component]
fn OutfitCard(outfit: Outfit) -> impl IntoView {
    let ctx = use_app_context();
    let outfits = ctx.outfits;
    let id = outfit.id;
    let body = outfit_card_html(&outfit);

    view! {
        <div class="outfit-card" data-outfit-id=id.to_string()>
            <div class="outfit-card-body" inner_html=body></div>
            <div class="outfit-actions">
                <button class="btn-edit-outfit" on:click=move |_| outfits.edit_outfit(id)>"Edit"</button>
                <button class="btn-delete-outfit" on:click=move |_| outfits.delete_outfit(id)>"Delete"</button>
            </div>
        </div>
    }
}
