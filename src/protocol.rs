//! Outfits Socket Protocol
//!
//! JSON frames exchanged over `/ws/outfits`. The `type` field selects the case.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, SendError};
use crate::models::Outfit;

/// Frames sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage<'a> {
    GetOutfits {
        username: &'a str,
    },
    CreateOutfit {
        username: &'a str,
        outfit: NewOutfit<'a>,
    },
    DeleteOutfit {
        outfit_id: u32,
        username: &'a str,
    },
}

/// Body of a `create_outfit` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOutfit<'a> {
    pub name: &'a str,
    pub item_ids: &'a [u32],
}

/// Frames pushed by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    OutfitsList { outfits: Vec<Outfit> },
    OutfitCreated { outfit: Outfit },
    OutfitUpdated { outfit: Outfit },
    OutfitDeleted { outfit_id: u32 },
    Error { message: String },
    /// Any `type` this client does not understand.
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Wire name of the message, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OutfitsList { .. } => "outfits_list",
            Self::OutfitCreated { .. } => "outfit_created",
            Self::OutfitUpdated { .. } => "outfit_updated",
            Self::OutfitDeleted { .. } => "outfit_deleted",
            Self::Error { .. } => "error",
            Self::Unknown => "unknown",
        }
    }
}

pub fn encode(message: &ClientMessage<'_>) -> Result<String, SendError> {
    serde_json::to_string(message).map_err(|e| SendError::Encode(e.to_string()))
}

pub fn decode(text: &str) -> Result<ServerMessage, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}
