//! Outfit Cache
//!
//! Client copy of the user's outfits, kept in step with server pushes.
//! Applying a message mutates the cache first and then says what, if anything,
//! the rendered grid must do. The grid is only patched while the library is visible.

use crate::models::Outfit;
use crate::protocol::ServerMessage;

/// Change to apply to the rendered outfit grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridPatch {
    /// Replace every card
    Replace(Vec<Outfit>),
    /// Replace the card with this id, or append it
    Upsert(Outfit),
    /// Remove the card with this id
    Remove(u32),
}

/// Notification for other components, dispatched after the grid is patched
#[derive(Debug, Clone, PartialEq)]
pub enum ManagerEvent {
    OutfitCreated(Outfit),
    ServerError(String),
}

/// Outcome of applying one server message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub patch: Option<GridPatch>,
    pub event: Option<ManagerEvent>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitCache {
    outfits: Vec<Outfit>,
}

impl OutfitCache {
    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    /// Apply a server message. `visible` is the library visibility at the time
    /// the message arrived.
    pub fn apply(&mut self, message: ServerMessage, visible: bool) -> Reconciliation {
        let (patch, event) = match message {
            ServerMessage::OutfitsList { outfits } => {
                self.outfits = outfits;
                (Some(GridPatch::Replace(self.outfits.clone())), None)
            }
            ServerMessage::OutfitCreated { outfit } => {
                upsert(&mut self.outfits, outfit.clone());
                (
                    Some(GridPatch::Upsert(outfit.clone())),
                    Some(ManagerEvent::OutfitCreated(outfit)),
                )
            }
            ServerMessage::OutfitUpdated { outfit } => {
                upsert(&mut self.outfits, outfit.clone());
                (Some(GridPatch::Upsert(outfit)), None)
            }
            ServerMessage::OutfitDeleted { outfit_id } => {
                self.outfits.retain(|o| o.id != outfit_id);
                (Some(GridPatch::Remove(outfit_id)), None)
            }
            ServerMessage::Error { message } => (None, Some(ManagerEvent::ServerError(message))),
            ServerMessage::Unknown => (None, None),
        };

        Reconciliation {
            patch: patch.filter(|_| visible),
            event,
        }
    }
}

/// Replace by id, or append when the id is new
fn upsert(outfits: &mut Vec<Outfit>, outfit: Outfit) {
    match outfits.iter_mut().find(|o| o.id == outfit.id) {
        Some(existing) => *existing = outfit,
        None => outfits.push(outfit),
    }
}

/// Apply a patch to the rendered card list
pub fn apply_patch(grid: &mut Vec<Outfit>, patch: GridPatch) {
    match patch {
        GridPatch::Replace(outfits) => *grid = outfits,
        GridPatch::Upsert(outfit) => upsert(grid, outfit),
        GridPatch::Remove(outfit_id) => grid.retain(|o| o.id != outfit_id),
    }
}
