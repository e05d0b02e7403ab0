use crate::entity::Entity;
use crate::treasure::TreasureTable;
use item_core::Item;
use rand::Rng;
use std::sync::Arc;

/// Spoils handed to the victor when a monster is defeated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewards {
    pub gold: u32,
    pub treasure: Option<Item>,
}

/// A CPU-controlled entity fought in battle
///
/// Monsters are authored once as templates and never fought directly;
/// each encounter uses a [`Monster::spawn`]ed copy. Cloning deep-copies the
/// entity (stats, inventory, outfit) so a copy can consume its items
/// without touching the template. The treasure table is read-only and
/// shared between a template and all of its copies.
#[derive(Debug, Clone)]
pub struct Monster {
    pub entity: Entity,
    message: String,
    gold_ceiling: u32,
    treasures: Arc<TreasureTable>,
}

impl Monster {
    pub fn new(entity: Entity) -> Self {
        Monster {
            entity,
            message: "!!!".to_string(),
            gold_ceiling: 0,
            treasures: Arc::new(TreasureTable::new()),
        }
    }

    /// Battle cry shown when the encounter starts
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Maximum (inclusive) gold awarded on defeat
    pub fn with_gold_ceiling(mut self, gold: u32) -> Self {
        self.gold_ceiling = gold;
        self
    }

    pub fn with_treasures(mut self, treasures: TreasureTable) -> Self {
        self.treasures = Arc::new(treasures);
        self
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn gold_ceiling(&self) -> u32 {
        self.gold_ceiling
    }

    pub fn treasures(&self) -> &TreasureTable {
        &self.treasures
    }

    /// Sum of all treasure weights
    pub fn total_treasures(&self) -> u32 {
        self.treasures.total_weight()
    }

    /// Produce an independent battle instance of this monster
    pub fn spawn(&self) -> Monster {
        tracing::debug!(monster = %self.entity.name, "spawning battle instance");
        self.clone()
    }

    /// Roll the gold and treasure awarded for defeating this monster
    ///
    /// Gold is uniform over `[0, gold_ceiling]`. At most one treasure is
    /// drawn, weighted by the treasure table. The monster is not modified.
    pub fn sample_rewards<R: Rng>(&self, rng: &mut R) -> Rewards {
        let gold = rng.gen_range(0..=self.gold_ceiling);
        let treasure = self.treasures.sample(rng).cloned();

        tracing::debug!(
            monster = %self.entity.name,
            gold,
            treasure = treasure.as_ref().map(Item::name),
            "rolled rewards"
        );

        Rewards { gold, treasure }
    }
}
