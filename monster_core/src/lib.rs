//! monster_core - Battle entities, monster templates and treasure rewards
//!
//! Content is authored as monster templates. The battle engine spawns an
//! independent copy per encounter, and on victory asks the copy for its
//! rewards:
//!
//! ```rust,ignore
//! use monster_core::ContentRegistry;
//!
//! let content = ContentRegistry::load(Path::new("content/"))?;
//! let goblin = content.spawn("goblin")?;
//! let rewards = goblin.sample_rewards(&mut rng);
//! hero.collect_rewards(rewards);
//! ```

mod config;
mod entity;
mod monster;
mod registry;
mod treasure;

pub use config::{ContentFileConfig, InventoryConfig, MonsterConfig, StatsConfig, TreasureConfig};
pub use entity::{Entity, InventoryEntry};
pub use monster::{Monster, Rewards};
pub use registry::ContentRegistry;
pub use treasure::{Treasure, TreasureTable};

use item_core::{ItemError, SlotType};
use stat_core::StatError;
use std::path::PathBuf;
use thiserror::Error;

/// Error loading a content directory
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read content at '{}': {error}", path.display())]
    Read {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Malformed content file '{}': {error}", path.display())]
    Syntax {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Rejected content in '{}': {message}", path.display())]
    Invalid { message: String, path: PathBuf },
}

/// Error building items, treasure tables or monsters from definitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error("Unknown monster: {0}")]
    UnknownMonster(String),
    #[error("Item '{0}' cannot be worn")]
    NotGear(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Total treasure weight overflows")]
    WeightOverflow,
    #[error("Starting outfit overflows stats: {0}")]
    StatOverflow(#[from] StatError),
}

/// Error from an inventory or outfit operation on an entity
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("{entity} has no {item}")]
    ItemNotFound { entity: String, item: String },
    #[error("{0} cannot be equipped")]
    NotEquippable(String),
    #[error("Nothing is equipped in the {0} slot")]
    SlotEmpty(SlotType),
    #[error(transparent)]
    Stat(#[from] StatError),
}
