//! Overall rating engine
//!
//! Each player's `overall` is a position-dependent weighted sum of their raw
//! attributes, rounded to a whole number.

pub mod calculator;
pub mod weights;

// Re-export commonly used items
pub use calculator::{compute_overall, overall_for_label, round_half_up};
pub use weights::{weights_for, PositionWeights};
