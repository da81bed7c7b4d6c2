//! Outfit Builder View Component
//!
//! Name field, the two drop containers with their search inputs, and the save button.

use leptos::prelude::*;

use crate::builder::Container;
use crate::components::DropContainer;
use crate::context::use_app_context;

#[component]
pub fn OutfitBuilderView() -> impl IntoView {
    let ctx = use_app_context();
    let builder = ctx.builder;

    view! {
        <div class="builder-header">
            <input
                id="outfit-name"
                type="text"
                placeholder="Outfit name"
                prop:value=move || builder.outfit_name()
                on:input=move |ev| builder.set_outfit_name(event_target_value(&ev))
            />
            <button
                class="btn-save-outfit"
                disabled=move || builder.is_saving()
                on:click=move |_| builder.save_outfit()
            >
                {move || builder.save_label()}
            </button>
        </div>

        <div class="builder-columns">
            <BuilderColumn container=Container::Available title="Your Wardrobe" />
            <BuilderColumn container=Container::Selected title="Your Outfit" />
        </div>
    }
}

#[component]
fn BuilderColumn(container: Container, title: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let builder = ctx.builder;

    view! {
        <div class="builder-column">
            <h3>{title}</h3>
            <input
                id=container.search_id()
                type="text"
                placeholder="Search..."
                prop:value=move || builder.query(container)
                on:input=move |ev| builder.set_query(container, event_target_value(&ev))
            />
            <DropContainer container=container />
        </div>
    }
}
