//! StatChange - The fixed delta a piece of gear applies while worn

use crate::stat::{Stat, StatBlock};
use crate::StatError;
use serde::{Deserialize, Serialize};

/// Signed adjustment for each stat gear may touch
///
/// A `None` entry leaves the stat alone. `Hp` is not part of the
/// equippable set and is ignored by [`apply_stat_change`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatChange {
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub agility: Option<i32>,
    pub max_hp: Option<i32>,
}

impl StatChange {
    /// Create an empty change
    pub fn new() -> Self {
        StatChange::default()
    }

    /// Builder-style setter
    pub fn with(mut self, stat: Stat, delta: i32) -> Self {
        match stat {
            Stat::Attack => self.attack = Some(delta),
            Stat::Defense => self.defense = Some(delta),
            Stat::Agility => self.agility = Some(delta),
            Stat::MaxHp => self.max_hp = Some(delta),
            Stat::Hp => {}
        }
        self
    }

    /// Delta for a stat, if this change touches it
    pub fn get(&self, stat: Stat) -> Option<i32> {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Agility => self.agility,
            Stat::MaxHp => self.max_hp,
            Stat::Hp => None,
        }
    }

    /// True when no stat is touched
    pub fn is_empty(&self) -> bool {
        Stat::EQUIPPABLE.iter().all(|s| self.get(*s).is_none())
    }
}

/// Direction a StatChange is applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Add the delta (equipping)
    Apply,
    /// Subtract the delta (unequipping)
    Revert,
}

impl Sign {
    fn shift(self, value: i32, delta: i32) -> Option<i32> {
        match self {
            Sign::Apply => value.checked_add(delta),
            Sign::Revert => value.checked_sub(delta),
        }
    }
}

/// Apply a stat change to a block, returning the adjusted block
///
/// Walks [`Stat::EQUIPPABLE`] uniformly. Results are not clamped, but a
/// result outside the `i32` range is an error and `stats` is left as-is.
// TODO: decide whether defense/agility should floor at zero once gear with
// negative deltas ships; hp above max_hp after a max_hp revert is also left as-is.
pub fn apply_stat_change(
    stats: &StatBlock,
    change: &StatChange,
    sign: Sign,
) -> Result<StatBlock, StatError> {
    let mut adjusted = *stats;
    for stat in Stat::EQUIPPABLE {
        if let Some(delta) = change.get(stat) {
            let value = adjusted.get_mut(stat);
            *value = sign.shift(*value, delta).ok_or(StatError::Overflow {
                stat,
                value: *value,
                delta,
            })?;
        }
    }
    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_apply_adds_listed_stats_only() {
        let stats = StatBlock::new(10, 2, 2, 2);
        let change = StatChange::new()
            .with(Stat::Attack, 3)
            .with(Stat::MaxHp, 5);

        let result = apply_stat_change(&stats, &change, Sign::Apply).unwrap();

        assert_eq!(result.attack, 5);
        assert_eq!(result.max_hp, 15);
        assert_eq!(result.defense, 2);
        assert_eq!(result.agility, 2);
        // Current health is never touched by gear
        assert_eq!(result.hp, 10);
    }

    #[test]
    fn test_revert_subtracts() {
        let stats = StatBlock::new(10, 2, 2, 2);
        let change = StatChange::new().with(Stat::Defense, 4);

        let result = apply_stat_change(&stats, &change, Sign::Revert).unwrap();
        assert_eq!(result.defense, -2);
    }

    #[test]
    fn test_hp_is_not_equippable() {
        let change = StatChange::new().with(Stat::Hp, 50);
        assert!(change.is_empty());
        assert_eq!(change.get(Stat::Hp), None);
    }

    #[test]
    fn test_negative_delta_unclamped() {
        let stats = StatBlock::new(10, 1, 1, 1);
        let cursed = StatChange::new().with(Stat::Agility, -5);

        let result = apply_stat_change(&stats, &cursed, Sign::Apply).unwrap();
        assert_eq!(result.agility, -4);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let stats = StatBlock::new(10, i32::MAX, 1, 1);
        let ring = StatChange::new().with(Stat::Attack, 1);

        assert_eq!(
            apply_stat_change(&stats, &ring, Sign::Apply),
            Err(StatError::Overflow {
                stat: Stat::Attack,
                value: i32::MAX,
                delta: 1,
            })
        );
    }

    #[test]
    fn test_revert_underflow_is_an_error() {
        let stats = StatBlock::new(10, 1, 1, 1);
        let change = StatChange::new().with(Stat::Defense, i32::MIN);

        // Subtracting i32::MIN cannot be represented
        assert!(matches!(
            apply_stat_change(&stats, &change, Sign::Revert),
            Err(StatError::Overflow { stat: Stat::Defense, .. })
        ));
    }

    #[test]
    fn test_parse_stat_change() {
        let toml = r#"
attack = 2
defense = -1
"#;
        let change: StatChange = toml::from_str(toml).unwrap();
        assert_eq!(change.attack, Some(2));
        assert_eq!(change.defense, Some(-1));
        assert_eq!(change.agility, None);
    }

    fn arb_change() -> impl Strategy<Value = StatChange> {
        (
            proptest::option::of(-100i32..100),
            proptest::option::of(-100i32..100),
            proptest::option::of(-100i32..100),
            proptest::option::of(-100i32..100),
        )
            .prop_map(|(attack, defense, agility, max_hp)| StatChange {
                attack,
                defense,
                agility,
                max_hp,
            })
    }

    proptest! {
        #[test]
        fn apply_then_revert_is_identity(
            max_hp in -1000i32..1000,
            attack in -1000i32..1000,
            defense in -1000i32..1000,
            agility in -1000i32..1000,
            change in arb_change(),
        ) {
            let stats = StatBlock::new(max_hp, attack, defense, agility);
            let applied = apply_stat_change(&stats, &change, Sign::Apply).unwrap();
            let restored = apply_stat_change(&applied, &change, Sign::Revert).unwrap();
            prop_assert_eq!(restored, stats);
        }
    }
}
