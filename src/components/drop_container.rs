//! Drop Container Component
//!
//! One of the builder's two item containers. Accepts dropped items and shows
//! an empty-state placeholder while it holds none.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::builder::Container;
use crate::context::use_app_context;
use crate::models::Item;
use crate::outfit_builder::TRANSFER_FORMAT;

/// Builder container accepting dragged items
#[component]
pub fn DropContainer(container: Container) -> impl IntoView {
    let ctx = use_app_context();
    let builder = ctx.builder;

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        builder.drag_enter(container);
    };

    let on_dragleave = move |_: DragEvent| {
        builder.drag_leave(container);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(TRANSFER_FORMAT).ok())
            .unwrap_or_default();
        builder.drop_item(container, &payload);
    };

    view! {
        <div
            id=container.dom_id()
            class=move || {
                let mut c = "builder-container".to_string();
                if builder.is_drag_over(container) { c.push_str(" drag-over"); }
                c
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <For
                each=move || builder.items_in(container)
                key=|id| *id
                children=move |id| builder.item(id).map(|item| view! { <BuilderItem item=item /> })
            />
            {move || builder.placeholder(container).map(|text| view! {
                <div class="empty-state">{text}</div>
            })}
        </div>
    }
}

/// Draggable item card carrying its id as the transfer payload
#[component]
fn BuilderItem(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let builder = ctx.builder;
    let id = item.id;

    let on_dragstart = move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            if let Err(e) = dt.set_data(TRANSFER_FORMAT, &id.to_string()) {
                log::warn!("[Builder] drag payload for item {} not set: {:?}", id, e);
            }
        }
        builder.drag_start(id);
    };

    view! {
        <div
            class=move || if builder.is_dragging(id) { "builder-clothing-item dragging" } else { "builder-clothing-item" }
            draggable="true"
            data-item-id=id.to_string()
            data-item-name=item.name.to_lowercase()
            style:display=move || if builder.is_shown(id) { "flex" } else { "none" }
            on:dragstart=on_dragstart
            on:dragend=move |_: DragEvent| builder.drag_end()
        >
            <img src=item.image_url.clone() alt=item.name.clone() class="builder-item-img" />
            <span class="builder-item-name">{item.name.clone()}</span>
        </div>
    }
}
