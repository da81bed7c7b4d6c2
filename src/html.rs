//! Outfit Card Markup
//!
//! Server-supplied text is escaped before it is injected as HTML.

use crate::models::{Item, Outfit};

/// Escape the five HTML-reserved characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

fn thumbnail_html(item: &Item) -> String {
    let name = escape_html(&item.name);
    format!(
        r#"<img src="{}" alt="{name}" title="{name}" class="outfit-item-img">"#,
        escape_html(&item.image_url),
    )
}

/// Name and thumbnail grid of an outfit card
pub fn outfit_card_html(outfit: &Outfit) -> String {
    let thumbnails: String = outfit.items.iter().map(thumbnail_html).collect();
    format!(
        r#"<div class="outfit-name">{}</div><div class="outfit-items-grid">{}</div>"#,
        escape_html(&outfit.name),
        thumbnails,
    )
}
