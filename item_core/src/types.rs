use serde::{Deserialize, Serialize};
use std::fmt;

/// Outfit slot a piece of gear occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Weapon,
    Helmet,
    Shield,
    Torso,
    Legs,
}

impl SlotType {
    /// Get all outfit slots
    pub fn all() -> &'static [SlotType] {
        &[
            SlotType::Weapon,
            SlotType::Helmet,
            SlotType::Shield,
            SlotType::Torso,
            SlotType::Legs,
        ]
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotType::Weapon => write!(f, "Weapon"),
            SlotType::Helmet => write!(f, "Helmet"),
            SlotType::Shield => write!(f, "Shield"),
            SlotType::Torso => write!(f, "Torso"),
            SlotType::Legs => write!(f, "Legs"),
        }
    }
}
