use crate::item::{Gear, Item};
use crate::types::SlotType;
use crate::ItemError;
use serde::Deserialize;
use stat_core::StatChange;

/// Which kind of item a definition builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDefKind {
    #[default]
    Plain,
    Gear,
}

/// TOML definition of an item
///
/// Gear must declare both `slot` and `stat_change`; a gear definition
/// missing either is rejected by [`ItemDef::build`].
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: ItemDefKind,
    #[serde(default)]
    pub slot: Option<SlotType>,
    #[serde(default)]
    pub stat_change: Option<StatChange>,
}

impl ItemDef {
    /// Build the item this definition describes
    pub fn build(&self) -> Result<Item, ItemError> {
        if self.name.trim().is_empty() {
            return Err(ItemError::EmptyName(self.id.clone()));
        }

        match self.kind {
            ItemDefKind::Plain => Ok(Item::plain(self.name.clone())),
            ItemDefKind::Gear => {
                let slot = self.slot.ok_or_else(|| ItemError::CapabilityMissing {
                    item: self.id.clone(),
                    capability: "slot",
                })?;
                let stat_change = self.stat_change.ok_or_else(|| ItemError::CapabilityMissing {
                    item: self.id.clone(),
                    capability: "stat_change",
                })?;
                Ok(Item::Gear(Gear::new(self.name.clone(), slot, stat_change)))
            }
        }
    }
}
