//! item_core - Items, outfit slots and the equip/unequip protocol
//!
//! Gear is the only item kind that can be worn. Wearing is expressed
//! through two traits:
//! - [`Equippable`]: what a wearable item must declare (slot, stat change)
//! - [`Wearer`]: what an entity must expose so gear can be put on it
//!
//! Item handling returns an [`ItemEvent`] for the caller
//! to render; nothing in this crate prints.

mod config;
mod equip;
mod event;
mod item;
pub mod types;

pub use config::{ItemDef, ItemDefKind};
pub use equip::{Equippable, Wearer};
pub use event::{ItemEvent, ItemEventKind};
pub use item::{Gear, Item};
pub use types::SlotType;

use thiserror::Error;

/// Error building an item from its definition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item '{item}' is declared as gear but has no {capability}")]
    CapabilityMissing {
        item: String,
        capability: &'static str,
    },
    #[error("Item '{0}' has an empty name")]
    EmptyName(String),
}
