//! Wardrobe View Component
//!
//! Grid of the user's items with a category selector and search field.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;

#[component]
pub fn WardrobeView() -> impl IntoView {
    let ctx = use_app_context();
    let wardrobe = ctx.wardrobe;

    view! {
        <div class="wardrobe-filters">
            <select
                id="category-filter"
                prop:value=move || wardrobe.category()
                on:change=move |ev| wardrobe.set_category(event_target_value(&ev))
            >
                {wardrobe.category_options().into_iter().map(|(slug, label)| {
                    view! { <option value=slug>{label}</option> }
                }).collect_view()}
            </select>
            <input
                id="search-filter"
                type="text"
                placeholder="Search items..."
                prop:value=move || wardrobe.query()
                on:input=move |ev| wardrobe.set_query(event_target_value(&ev))
            />
        </div>

        <div class="wardrobe-grid">
            {wardrobe.items().into_iter().map(|item| view! { <WardrobeCell item=item /> }).collect_view()}
        </div>
    }
}

/// One wardrobe item; its wrapper is hidden when the filter excludes it
#[component]
fn WardrobeCell(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let wardrobe = ctx.wardrobe;
    let id = item.id;

    view! {
        <div
            class="wardrobe-cell"
            style:display=move || if wardrobe.is_shown(id) { "block" } else { "none" }
        >
            <div
                class="wardrobe-item"
                data-category=item.category().to_string()
                data-name=item.name.to_lowercase()
            >
                <img src=item.image_url.clone() alt=item.name.clone() class="wardrobe-item-img" />
                <div class="wardrobe-item-name">{item.name.clone()}</div>
            </div>
        </div>
    }
}
