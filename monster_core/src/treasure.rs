use crate::ContentError;
use item_core::Item;
use rand::Rng;

/// One candidate reward and its share of the distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treasure {
    pub item: Item,
    pub weight: u32,
}

/// Weighted list of candidate rewards
///
/// `total_weight` always equals the sum of entry weights; it is recomputed
/// in full on every structural change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreasureTable {
    entries: Vec<Treasure>,
    total_weight: u32,
}

impl TreasureTable {
    /// Create an empty table (never yields treasure)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (item, weight) pairs, keeping their order
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Item, u32)>,
    ) -> Result<Self, ContentError> {
        let entries: Vec<Treasure> = entries
            .into_iter()
            .map(|(item, weight)| Treasure { item, weight })
            .collect();
        let total_weight = sum_weights(&entries)?;
        Ok(TreasureTable {
            entries,
            total_weight,
        })
    }

    /// Append an entry at the end of the table
    pub fn push(&mut self, item: Item, weight: u32) -> Result<(), ContentError> {
        self.entries.push(Treasure { item, weight });
        match sum_weights(&self.entries) {
            Ok(total) => {
                self.total_weight = total;
                Ok(())
            }
            Err(e) => {
                self.entries.pop();
                Err(e)
            }
        }
    }

    pub fn entries(&self) -> &[Treasure] {
        &self.entries
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// True when sampling can never produce treasure
    pub fn is_empty(&self) -> bool {
        self.total_weight == 0
    }

    /// Item whose bucket contains `index`
    ///
    /// `[0, total_weight)` is split into contiguous buckets in table order,
    /// each as wide as its entry's weight. Zero-weight entries own no bucket.
    pub fn select(&self, index: u32) -> Option<&Item> {
        let mut total = 0u32;
        for entry in &self.entries {
            total += entry.weight;
            if index < total {
                return Some(&entry.item);
            }
        }
        None
    }

    /// Draw a treasure, or `None` if the table carries no weight
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<&Item> {
        if self.total_weight == 0 {
            return None;
        }

        let index = rng.gen_range(0..self.total_weight);
        self.select(index)
    }
}

fn sum_weights(entries: &[Treasure]) -> Result<u32, ContentError> {
    entries.iter().try_fold(0u32, |total, entry| {
        total
            .checked_add(entry.weight)
            .ok_or(ContentError::WeightOverflow)
    })
}
