use crate::equip::{Equippable, Wearer};
use crate::event::{ItemEvent, ItemEventKind};
use crate::types::SlotType;
use serde::{Deserialize, Serialize};
use stat_core::StatChange;
use std::fmt;

/// A wearable item: occupies one outfit slot and shifts stats while worn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    pub slot: SlotType,
    pub stat_change: StatChange,
}

impl Gear {
    pub fn new(name: impl Into<String>, slot: SlotType, stat_change: StatChange) -> Self {
        Gear {
            name: name.into(),
            slot,
            stat_change,
        }
    }
}

impl Equippable for Gear {
    fn name(&self) -> &str {
        &self.name
    }

    fn slot(&self) -> SlotType {
        self.slot
    }

    fn stat_change(&self) -> &StatChange {
        &self.stat_change
    }
}

/// Anything that can sit in an inventory
///
/// Cloning an item yields a fully independent copy; no item state is
/// shared between the copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// An item with no equip capability
    Plain { name: String },
    Gear(Gear),
}

impl Item {
    pub fn plain(name: impl Into<String>) -> Self {
        Item::Plain { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Plain { name } => name,
            Item::Gear(gear) => &gear.name,
        }
    }

    /// The equip capability of this item, if it has one
    pub fn as_equippable(&self) -> Option<&Gear> {
        match self {
            Item::Gear(gear) => Some(gear),
            Item::Plain { .. } => None,
        }
    }

    /// Convert into gear, handing the item back if it cannot be worn
    pub fn into_gear(self) -> Result<Gear, Item> {
        match self {
            Item::Gear(gear) => Ok(gear),
            other => Err(other),
        }
    }

    /// Use this item on a target
    ///
    /// Gear only hints that it should be equipped; plain items have no effect.
    /// Neither changes any stats.
    pub fn use_on<U, T>(&self, user: &U, target: &T) -> ItemEvent
    where
        U: Wearer + ?Sized,
        T: Wearer + ?Sized,
    {
        match self {
            Item::Gear(gear) => gear.use_on(user, target),
            Item::Plain { name } => ItemEvent::new(user.name(), name.clone(), ItemEventKind::NoEffect),
        }
    }
}

impl From<Gear> for Item {
    fn from(gear: Gear) -> Self {
        Item::Gear(gear)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
