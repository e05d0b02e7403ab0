//! stat_core - Stat storage and equipment stat deltas for battle entities
//!
//! This library provides:
//! - Stat: The named attributes every battle entity carries
//! - StatBlock: One integer value per stat
//! - StatChange: The fixed delta a piece of gear applies while worn
//! - apply_stat_change: Table-driven application of a StatChange to a StatBlock
//!
//! # Quick Start
//!
//! ```rust
//! use stat_core::prelude::*;
//!
//! let stats = StatBlock::new(20, 4, 3, 5);
//! let sword = StatChange::new().with(Stat::Attack, 3);
//!
//! let equipped = apply_stat_change(&stats, &sword, Sign::Apply).unwrap();
//! assert_eq!(equipped.attack, 7);
//!
//! let restored = apply_stat_change(&equipped, &sword, Sign::Revert).unwrap();
//! assert_eq!(restored, stats);
//! ```

pub mod change;
pub mod prelude;
pub mod stat;

pub use change::{apply_stat_change, Sign, StatChange};
pub use stat::{Stat, StatBlock};

use thiserror::Error;

/// Error applying a stat change
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StatError {
    #[error("{stat} of {value} cannot absorb a change of {delta}")]
    Overflow { stat: Stat, value: i32, delta: i32 },
}
