//! Outfits Manager
//!
//! Owns the outfits socket and the outfit cache, and decides when the library
//! grid is re-rendered. Server pushes always update the cache; the grid only
//! follows while the library view is visible.

use std::time::Duration;

use futures::channel::mpsc::{self, UnboundedSender};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::{apply_patch, ManagerEvent, OutfitCache};
use crate::config::AppConfig;
use crate::connection::{self, ConnectionStatus};
use crate::dialog;
use crate::error::SendError;
use crate::models::Outfit;
use crate::protocol::{self, ClientMessage, NewOutfit, ServerMessage};

/// DOM id of the outfit grid
pub const GRID_ID: &str = "outfits-grid";
/// DOM id of the "no outfits yet" placeholder
pub const EMPTY_ID: &str = "outfits-empty";

const DELETE_PROMPT: &str = "Are you sure you want to delete this outfit?";

#[derive(Clone, Copy)]
pub struct OutfitsManager {
    username: StoredValue<String>,
    socket_url: StoredValue<String>,
    reconnect_delay: Duration,
    render_delay: Duration,
    cache: StoredValue<OutfitCache>,
    /// Whether the library view is shown
    visible: StoredValue<bool>,
    /// Outfits currently rendered in the grid
    grid: RwSignal<Vec<Outfit>>,
    status: RwSignal<ConnectionStatus>,
    /// Outgoing frames for the open socket
    outbox: StoredValue<Option<UnboundedSender<String>>>,
    /// Cuts the supervisor's reconnect delay short
    wake: StoredValue<Option<UnboundedSender<()>>>,
    listener: StoredValue<Option<Callback<ManagerEvent>>>,
}

impl OutfitsManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            username: StoredValue::new(config.username.clone()),
            socket_url: StoredValue::new(config.socket_url.clone()),
            reconnect_delay: config.reconnect_delay,
            render_delay: config.library_render_delay,
            cache: StoredValue::new(OutfitCache::default()),
            visible: StoredValue::new(false),
            grid: RwSignal::new(Vec::new()),
            status: RwSignal::new(ConnectionStatus::Disconnected),
            outbox: StoredValue::new(None),
            wake: StoredValue::new(None),
            listener: StoredValue::new(None),
        }
    }

    /// Register the receiver of creation/error notifications.
    pub fn subscribe(&self, listener: Callback<ManagerEvent>) {
        self.listener.set_value(Some(listener));
    }

    pub fn grid(&self) -> Signal<Vec<Outfit>> {
        self.grid.into()
    }

    pub fn status(&self) -> Signal<ConnectionStatus> {
        self.status.into()
    }

    pub fn is_connected(&self) -> bool {
        self.status.get_untracked() == ConnectionStatus::Open
    }

    // ========================
    // Connection
    // ========================

    /// Open the socket unless it is already open. The first call starts the
    /// supervisor; later calls wake it if it is waiting to reconnect.
    pub fn connect(&self) {
        if self.is_connected() {
            return;
        }

        let woken = self
            .wake
            .with_value(|wake| wake.as_ref().is_some_and(|tx| tx.unbounded_send(()).is_ok()));
        if woken {
            return;
        }

        let (wake_tx, wake_rx) = mpsc::unbounded();
        self.wake.set_value(Some(wake_tx));
        log::info!("[Outfits] starting connection to {}", self.socket_url.get_value());
        spawn_local(connection::supervise(
            *self,
            self.socket_url.get_value(),
            self.reconnect_delay,
            wake_rx,
        ));
    }

    pub(crate) fn set_status(&self, status: ConnectionStatus) {
        self.status.set(status);
    }

    /// Socket is open and `outbox` feeds it.
    pub(crate) fn attach(&self, outbox: UnboundedSender<String>) {
        self.outbox.set_value(Some(outbox));
        self.status.set(ConnectionStatus::Open);
    }

    /// Socket is gone. The cache is kept for the next connection.
    pub(crate) fn detach(&self) {
        self.outbox.set_value(None);
        self.status.set(ConnectionStatus::Disconnected);
    }

    pub(crate) fn load_request(&self) -> Result<String, SendError> {
        self.username
            .with_value(|username| protocol::encode(&ClientMessage::GetOutfits { username }))
    }

    fn send(&self, message: &ClientMessage<'_>) -> Result<(), SendError> {
        if !self.is_connected() {
            return Err(SendError::NotOpen);
        }
        let text = protocol::encode(message)?;
        self.outbox.with_value(|outbox| match outbox {
            Some(tx) => tx.unbounded_send(text).map_err(|_| SendError::ChannelClosed),
            None => Err(SendError::NotOpen),
        })
    }

    // ========================
    // Requests
    // ========================

    /// Ask the server for the full outfit list.
    pub fn load_outfits(&self) {
        let result = self
            .username
            .with_value(|username| self.send(&ClientMessage::GetOutfits { username }));
        if let Err(e) = result {
            log::warn!("[Outfits] get_outfits not sent: {}", e);
        }
    }

    /// Request creation. `Ok` only means the request was handed to the socket;
    /// the result arrives later as `outfit_created` or `error`.
    pub fn create_outfit(&self, name: &str, item_ids: &[u32]) -> Result<(), SendError> {
        let result = self.username.with_value(|username| {
            self.send(&ClientMessage::CreateOutfit {
                username,
                outfit: NewOutfit { name, item_ids },
            })
        });
        match &result {
            Ok(()) => log::info!("[Outfits] create_outfit {:?} with {} items", name, item_ids.len()),
            Err(e) => log::error!("[Outfits] create_outfit not sent: {}", e),
        }
        result
    }

    /// Delete after the user confirms.
    pub fn delete_outfit(&self, outfit_id: u32) {
        if !dialog::confirm(DELETE_PROMPT) {
            return;
        }
        let result = self
            .username
            .with_value(|username| self.send(&ClientMessage::DeleteOutfit { outfit_id, username }));
        if let Err(e) = result {
            log::warn!("[Outfits] delete_outfit {} not sent: {}", outfit_id, e);
        }
    }

    pub fn edit_outfit(&self, outfit_id: u32) {
        dialog::alert(&format!("Edit outfit {} - Feature coming soon!", outfit_id));
    }

    // ========================
    // Incoming frames
    // ========================

    /// Handle one text frame from the server. Malformed frames are logged and dropped.
    pub fn handle_text(&self, text: &str) {
        match protocol::decode(text) {
            Ok(message) => self.handle_message(message),
            Err(e) => log::error!("[Outfits] {}", e),
        }
    }

    pub fn handle_message(&self, message: ServerMessage) {
        log::debug!("[Outfits] received {}", message.kind());
        if message == ServerMessage::Unknown {
            log::warn!("[Outfits] ignoring message of unknown type");
            return;
        }

        let visible = self.visible.get_value();
        let Some(reconciliation) = self.cache.try_update_value(|cache| cache.apply(message, visible)) else {
            return;
        };

        if let Some(patch) = reconciliation.patch {
            self.grid.update(|grid| apply_patch(grid, patch));
        }

        if let Some(event) = reconciliation.event {
            if let ManagerEvent::ServerError(message) = &event {
                log::error!("[Outfits] server error: {}", message);
                dialog::alert(&format!("Error: {}", message));
            }
            if let Some(listener) = self.listener.get_value() {
                listener.run(event);
            }
        }
    }

    // ========================
    // Library visibility
    // ========================

    /// Mark the library visible and render it from the cache shortly after,
    /// once its elements are mounted.
    pub fn show_library(&self) {
        self.set_library_visible(true);
        let manager = *self;
        spawn_local(async move {
            gloo_timers::future::sleep(manager.render_delay).await;
            if !manager.is_library_visible() {
                return;
            }
            if library_mounted() {
                manager.display_outfits();
            } else {
                log::warn!("[Outfits] #{} not mounted, requesting outfits again", GRID_ID);
                manager.load_outfits();
            }
        });
    }

    pub fn hide_library(&self) {
        self.set_library_visible(false);
    }

    pub fn is_library_visible(&self) -> bool {
        self.visible.get_value()
    }

    pub(crate) fn set_library_visible(&self, visible: bool) {
        self.visible.set_value(visible);
    }

    /// Re-render the whole grid from the cache.
    pub fn display_outfits(&self) {
        let outfits = self.cache.with_value(|cache| cache.outfits().to_vec());
        log::debug!("[Outfits] rendering {} outfits", outfits.len());
        self.grid.set(outfits);
    }
}

fn library_mounted() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(GRID_ID))
        .is_some()
}
