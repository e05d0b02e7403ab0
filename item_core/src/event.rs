use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened when an item was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEventKind {
    Equipped,
    Unequipped,
    /// Gear was used instead of equipped
    EquipHint,
    /// A plain item was used and did nothing
    NoEffect,
}

/// Notification produced by item handling, rendered by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEvent {
    pub entity: String,
    pub item: String,
    pub kind: ItemEventKind,
}

impl ItemEvent {
    pub fn new(entity: impl Into<String>, item: impl Into<String>, kind: ItemEventKind) -> Self {
        ItemEvent {
            entity: entity.into(),
            item: item.into(),
            kind,
        }
    }
}

impl fmt::Display for ItemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemEventKind::Equipped => write!(f, "{} equips {}!", self.entity, self.item),
            ItemEventKind::Unequipped => write!(f, "{} unequips {}!", self.entity, self.item),
            ItemEventKind::EquipHint => {
                write!(f, "Type 'equip {}' to equip this item.", self.item)
            }
            ItemEventKind::NoEffect => write!(f, "Nothing happens."),
        }
    }
}
