//! Application Configuration
//!
//! Read once at startup from the server-rendered page.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::Item;

/// Element carrying the username attribute and the wardrobe JSON
pub const BOOTSTRAP_ELEMENT_ID: &str = "wardrobe-data";
pub const SOCKET_PATH: &str = "/ws/outfits";
pub const RECONNECT_DELAY: Duration = Duration::from_millis(3000);
pub const LIBRARY_RENDER_DELAY: Duration = Duration::from_millis(100);

/// JSON body of the bootstrap element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Category slug -> display label
    #[serde(default)]
    pub categories: HashMap<String, String>,
}

impl Bootstrap {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub username: String,
    pub socket_url: String,
    pub reconnect_delay: Duration,
    pub library_render_delay: Duration,
    pub bootstrap: Bootstrap,
}

impl AppConfig {
    pub fn new(username: String, socket_url: String, bootstrap: Bootstrap) -> Self {
        Self {
            username,
            socket_url,
            reconnect_delay: RECONNECT_DELAY,
            library_render_delay: LIBRARY_RENDER_DELAY,
            bootstrap,
        }
    }

    /// Resolve the configuration from the current document.
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let location = window.as_ref().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_default();
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:3000".to_string());

        let element = window
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID));

        let Some(element) = element else {
            log::warn!("[Config] #{} not found, starting with an empty wardrobe", BOOTSTRAP_ELEMENT_ID);
            return Self::new(String::new(), socket_url(&protocol, &host, SOCKET_PATH), Bootstrap::default());
        };

        let username = element.get_attribute("data-username").unwrap_or_default();
        if username.is_empty() {
            log::warn!("[Config] no data-username on #{}", BOOTSTRAP_ELEMENT_ID);
        }

        let text = element.text_content().unwrap_or_default();
        let bootstrap = Bootstrap::parse(&text).unwrap_or_else(|e| {
            log::error!("[Config] {}", e);
            Bootstrap::default()
        });
        log::info!("[Config] user={:?}, {} wardrobe items", username, bootstrap.items.len());

        Self::new(username, socket_url(&protocol, &host, SOCKET_PATH), bootstrap)
    }
}

/// WebSocket URL for `path` on `host`, secure when the page is.
pub fn socket_url(protocol: &str, host: &str, path: &str) -> String {
    let scheme = if protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{}://{}{}", scheme, host, path)
}
