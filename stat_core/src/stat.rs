//! Stat identifiers and the per-entity StatBlock

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named attribute of a battle entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    MaxHp,
    Hp,
    Attack,
    Defense,
    Agility,
}

impl Stat {
    /// Stats that gear is allowed to modify, in application order
    pub const EQUIPPABLE: [Stat; 4] = [Stat::Attack, Stat::Defense, Stat::Agility, Stat::MaxHp];
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::MaxHp => write!(f, "Max HP"),
            Stat::Hp => write!(f, "HP"),
            Stat::Attack => write!(f, "Attack"),
            Stat::Defense => write!(f, "Defense"),
            Stat::Agility => write!(f, "Agility"),
        }
    }
}

/// Current stat values of an entity
///
/// Values are signed and never clamped: gear with a negative delta can
/// push a stat below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub agility: i32,
}

impl Default for StatBlock {
    fn default() -> Self {
        StatBlock {
            max_hp: 1,
            hp: 1,
            attack: 1,
            defense: 1,
            agility: 1,
        }
    }
}

impl StatBlock {
    /// Create a stat block at full health
    pub fn new(max_hp: i32, attack: i32, defense: i32, agility: i32) -> Self {
        StatBlock {
            max_hp,
            hp: max_hp,
            attack,
            defense,
            agility,
        }
    }

    /// Get the value of a stat
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::MaxHp => self.max_hp,
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Agility => self.agility,
        }
    }

    /// Get a mutable reference to a stat
    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::MaxHp => &mut self.max_hp,
            Stat::Hp => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::Agility => &mut self.agility,
        }
    }

    /// Whether the entity still has health left
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = StatBlock::default();
        for stat in Stat::EQUIPPABLE {
            assert_eq!(stats.get(stat), 1);
        }
        assert_eq!(stats.get(Stat::Hp), 1);
    }

    #[test]
    fn test_new_starts_at_full_health() {
        let stats = StatBlock::new(30, 5, 2, 4);
        assert_eq!(stats.hp, 30);
        assert_eq!(stats.max_hp, 30);
        assert!(stats.is_alive());
    }

    #[test]
    fn test_get_mut() {
        let mut stats = StatBlock::default();
        *stats.get_mut(Stat::Defense) = -3;
        assert_eq!(stats.get(Stat::Defense), -3);
        assert_eq!(stats.defense, -3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Stat::MaxHp.to_string(), "Max HP");
        assert_eq!(Stat::Agility.to_string(), "Agility");
    }

    #[test]
    fn test_parse_partial_block() {
        let toml = r#"
max_hp = 12
attack = 4
"#;
        let stats: StatBlock = toml::from_str(toml).unwrap();
        assert_eq!(stats.max_hp, 12);
        assert_eq!(stats.attack, 4);
        // Unspecified stats fall back to defaults
        assert_eq!(stats.defense, 1);
        assert_eq!(stats.hp, 1);
    }
}
