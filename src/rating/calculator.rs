//! Overall score calculation
//!
//! `compute_overall` is a pure function of position and attributes; the same
//! inputs always produce the same integer.

use crate::rating::weights::weights_for;
use crate::types::{PlayerAttributes, Position};

/// Round to the nearest integer, with halves rounded up (towards +inf)
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Compute a player's overall score from their position and attributes
pub fn compute_overall(position: Position, attributes: &PlayerAttributes) -> i64 {
    round_half_up(weights_for(position).apply(attributes))
}

/// Compute an overall score from a raw position label.
///
/// Labels other than exactly GK, DF, MF and ST score 0; matching is
/// case-sensitive.
pub fn overall_for_label(label: &str, attributes: &PlayerAttributes) -> i64 {
    match label.parse::<Position>() {
        Ok(position) => compute_overall(position, attributes),
        Err(_) => 0,
    }
}
