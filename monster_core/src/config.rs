use crate::entity::Entity;
use crate::monster::Monster;
use crate::treasure::TreasureTable;
use crate::ContentError;
use item_core::{Equippable, Item, ItemDef};
use serde::Deserialize;
use stat_core::StatBlock;
use std::collections::HashMap;

/// TOML configuration for a content file
///
/// A file may declare items, monsters, or both.
#[derive(Debug, Default, Deserialize)]
pub struct ContentFileConfig {
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub monsters: Vec<MonsterConfig>,
}

/// Configuration for a monster template
#[derive(Debug, Deserialize)]
pub struct MonsterConfig {
    pub id: String,
    pub name: String,
    #[serde(default = "default_message")]
    pub message: String,
    /// Maximum gold awarded on defeat
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub battle_commands: Vec<String>,
    #[serde(default)]
    pub inventory: Vec<InventoryConfig>,
    /// Item ids worn from the start
    #[serde(default)]
    pub outfit: Vec<String>,
    #[serde(default)]
    pub treasures: Vec<TreasureConfig>,
}

/// Starting stats; omitted stats use the defaults and `hp` starts at `max_hp`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatsConfig {
    pub max_hp: Option<i32>,
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub agility: Option<i32>,
}

impl StatsConfig {
    pub fn to_stat_block(&self) -> StatBlock {
        let defaults = StatBlock::default();
        let max_hp = self.max_hp.unwrap_or(defaults.max_hp);
        StatBlock {
            max_hp,
            hp: self.hp.unwrap_or(max_hp),
            attack: self.attack.unwrap_or(defaults.attack),
            defense: self.defense.unwrap_or(defaults.defense),
            agility: self.agility.unwrap_or(defaults.agility),
        }
    }
}

fn default_message() -> String {
    "!!!".to_string()
}

#[derive(Debug, Deserialize)]
pub struct InventoryConfig {
    pub item: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct TreasureConfig {
    pub item: String,
    pub weight: u32,
}

impl MonsterConfig {
    /// Build the monster template, resolving item ids against `items`
    pub fn build(&self, items: &HashMap<String, Item>) -> Result<Monster, ContentError> {
        let lookup = |id: &str| {
            items
                .get(id)
                .cloned()
                .ok_or_else(|| ContentError::UnknownItem(id.to_string()))
        };

        let mut entity = Entity::new(self.name.clone())
            .with_stats(self.stats.to_stat_block())
            .with_battle_commands(self.battle_commands.clone());

        for entry in &self.inventory {
            entity.add_item(lookup(&entry.item)?, entry.count);
        }

        for id in &self.outfit {
            let gear = lookup(id)?
                .into_gear()
                .map_err(|_| ContentError::NotGear(id.clone()))?;
            gear.equip(&mut entity)?;
        }

        let treasures = self
            .treasures
            .iter()
            .map(|t| lookup(&t.item).map(|item| (item, t.weight)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Monster::new(entity)
            .with_message(self.message.clone())
            .with_gold_ceiling(self.gold)
            .with_treasures(TreasureTable::from_entries(treasures)?))
    }
}
