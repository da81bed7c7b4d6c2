//! Frontend Models
//!
//! Data structures matching the server's outfit payloads.

use serde::Deserialize;

/// Wardrobe item (rendered by the server, read-only on the client)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Outfit data structure (matches server)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Outfit {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Item {
    /// Category slug, empty when the server sent none
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}
