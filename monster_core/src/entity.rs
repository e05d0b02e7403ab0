//! Entity - Stats, inventory and outfit of a battle participant

use crate::monster::Rewards;
use crate::EntityError;
use item_core::{Equippable, Gear, Item, ItemEvent, SlotType, Wearer};
use stat_core::StatBlock;
use std::collections::BTreeMap;

/// An item held in an inventory, with how many copies are held
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub item: Item,
    pub count: u32,
}

/// A battle participant (player or monster)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub stats: StatBlock,
    /// Items in insertion order, at most one entry per item name
    pub inventory: Vec<InventoryEntry>,
    pub gold: u32,
    /// Names of the commands this entity can issue in battle
    pub battle_commands: Vec<String>,
    pub outfit: BTreeMap<SlotType, Gear>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Entity {
            name: name.into(),
            stats: StatBlock::default(),
            inventory: Vec::new(),
            gold: 0,
            battle_commands: Vec::new(),
            outfit: BTreeMap::new(),
        }
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_battle_commands(mut self, commands: Vec<String>) -> Self {
        self.battle_commands = commands;
        self
    }

    /// Add copies of an item, merging with an existing entry of the same name
    pub fn add_item(&mut self, item: Item, count: u32) {
        if count == 0 {
            return;
        }

        match self
            .inventory
            .iter_mut()
            .find(|entry| entry.item.name() == item.name())
        {
            Some(entry) => entry.count = entry.count.saturating_add(count),
            None => self.inventory.push(InventoryEntry { item, count }),
        }
    }

    /// Remove up to `count` copies of an item; the entry is dropped when none remain
    pub fn remove_item(&mut self, name: &str, count: u32) -> Result<(), EntityError> {
        let index = self.index_of(name)?;
        let entry = &mut self.inventory[index];
        entry.count = entry.count.saturating_sub(count);
        if entry.count == 0 {
            self.inventory.remove(index);
        }
        Ok(())
    }

    pub fn find_item(&self, name: &str) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|entry| entry.item.name() == name)
    }

    /// How many copies of an item are held
    pub fn item_count(&self, name: &str) -> u32 {
        self.find_item(name).map(|entry| entry.count).unwrap_or(0)
    }

    /// Take one copy of an inventory item and wear it
    ///
    /// On failure the inventory, outfit and stats are left as they were.
    pub fn equip_item(&mut self, name: &str) -> Result<ItemEvent, EntityError> {
        let index = self.index_of(name)?;
        let gear = match self.inventory[index].item.clone().into_gear() {
            Ok(gear) => gear,
            Err(_) => return Err(EntityError::NotEquippable(name.to_string())),
        };

        let event = gear.equip(self)?;
        self.remove_item(name, 1)?;
        Ok(event)
    }

    /// Take off whatever is worn in a slot, returning it to the inventory
    pub fn unequip_item(&mut self, slot: SlotType) -> Result<ItemEvent, EntityError> {
        let gear = self
            .outfit
            .get(&slot)
            .cloned()
            .ok_or(EntityError::SlotEmpty(slot))?;
        gear.unequip(self)?.ok_or(EntityError::SlotEmpty(slot))
    }

    /// Use an inventory item on a target
    pub fn use_item(&self, name: &str, target: &Entity) -> Result<ItemEvent, EntityError> {
        let entry = self
            .find_item(name)
            .ok_or_else(|| self.not_found(name))?;
        Ok(entry.item.use_on(self, target))
    }

    /// Credit the spoils of a won battle
    pub fn collect_rewards(&mut self, rewards: Rewards) {
        self.gold = self.gold.saturating_add(rewards.gold);
        if let Some(treasure) = rewards.treasure {
            tracing::debug!(entity = %self.name, item = treasure.name(), "received treasure");
            self.add_item(treasure, 1);
        }
    }

    fn index_of(&self, name: &str) -> Result<usize, EntityError> {
        self.inventory
            .iter()
            .position(|entry| entry.item.name() == name)
            .ok_or_else(|| self.not_found(name))
    }

    fn not_found(&self, name: &str) -> EntityError {
        EntityError::ItemNotFound {
            entity: self.name.clone(),
            item: name.to_string(),
        }
    }
}

impl Wearer for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn set_stats(&mut self, stats: StatBlock) {
        self.stats = stats;
    }

    fn outfit_slot(&self, slot: SlotType) -> Option<&Gear> {
        self.outfit.get(&slot)
    }

    fn put_outfit_slot(&mut self, slot: SlotType, gear: Gear) -> Option<Gear> {
        self.outfit.insert(slot, gear)
    }

    fn take_outfit_slot(&mut self, slot: SlotType) -> Option<Gear> {
        self.outfit.remove(&slot)
    }

    fn add_item(&mut self, item: Item, count: u32) {
        Entity::add_item(self, item, count);
    }
}
