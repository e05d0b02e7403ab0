//! Prelude module for convenient imports
//!
//! ```rust
//! use stat_core::prelude::*;
//! ```

pub use crate::change::{apply_stat_change, Sign, StatChange};
pub use crate::stat::{Stat, StatBlock};
pub use crate::StatError;
