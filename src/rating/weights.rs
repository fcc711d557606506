//! Per-position attribute weights

use crate::types::{PlayerAttributes, Position};
use serde::Serialize;

/// Weight applied to each raw attribute for one position.
///
/// The vectors are used as-is and are not normalized: strikers and
/// midfielders sum to 1.10, defenders to 1.03 and goalkeepers to 1.02.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionWeights {
    pub speed: f64,
    pub shooting: f64,
    pub passing: f64,
    pub dribbling: f64,
    pub physical: f64,
    pub defending: f64,
    pub goalkeeping: f64,
    pub weak_foot: f64,
}

pub const STRIKER_WEIGHTS: PositionWeights = PositionWeights {
    speed: 0.25,
    shooting: 0.3,
    passing: 0.1,
    dribbling: 0.15,
    physical: 0.1,
    defending: 0.1,
    goalkeeping: 0.0,
    weak_foot: 0.1,
};

pub const MIDFIELDER_WEIGHTS: PositionWeights = PositionWeights {
    speed: 0.2,
    shooting: 0.2,
    passing: 0.25,
    dribbling: 0.2,
    physical: 0.1,
    defending: 0.1,
    goalkeeping: 0.0,
    weak_foot: 0.05,
};

pub const DEFENDER_WEIGHTS: PositionWeights = PositionWeights {
    speed: 0.1,
    shooting: 0.05,
    passing: 0.15,
    dribbling: 0.05,
    physical: 0.2,
    defending: 0.45,
    goalkeeping: 0.0,
    weak_foot: 0.03,
};

pub const GOALKEEPER_WEIGHTS: PositionWeights = PositionWeights {
    speed: 0.03,
    shooting: 0.0,
    passing: 0.02,
    dribbling: 0.0,
    physical: 0.05,
    defending: 0.0,
    goalkeeping: 0.9,
    weak_foot: 0.02,
};

/// Weight vector for a position
pub fn weights_for(position: Position) -> &'static PositionWeights {
    match position {
        Position::Striker => &STRIKER_WEIGHTS,
        Position::Midfielder => &MIDFIELDER_WEIGHTS,
        Position::Defender => &DEFENDER_WEIGHTS,
        Position::Goalkeeper => &GOALKEEPER_WEIGHTS,
    }
}

impl PositionWeights {
    /// Weighted sum of the attributes, before rounding
    pub fn apply(&self, a: &PlayerAttributes) -> f64 {
        a.speed * self.speed
            + a.shooting * self.shooting
            + a.passing * self.passing
            + a.dribbling * self.dribbling
            + a.physical * self.physical
            + a.defending * self.defending
            + a.goalkeeping * self.goalkeeping
            + a.weak_foot * self.weak_foot
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.speed
            + self.shooting
            + self.passing
            + self.dribbling
            + self.physical
            + self.defending
            + self.goalkeeping
            + self.weak_foot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_weight_totals_are_not_normalized() {
        assert!(approx(weights_for(Position::Striker).total(), 1.10));
        assert!(approx(weights_for(Position::Midfielder).total(), 1.10));
        assert!(approx(weights_for(Position::Defender).total(), 1.03));
        assert!(approx(weights_for(Position::Goalkeeper).total(), 1.02));
    }

    #[test]
    fn test_outfield_weights_ignore_goalkeeping() {
        for position in [Position::Striker, Position::Midfielder, Position::Defender] {
            assert_eq!(weights_for(position).goalkeeping, 0.0);
        }
    }

    #[test]
    fn test_apply_single_attribute() {
        let attrs = PlayerAttributes {
            defending: 100.0,
            ..Default::default()
        };
        assert!(approx(weights_for(Position::Defender).apply(&attrs), 45.0));
        assert!(approx(weights_for(Position::Goalkeeper).apply(&attrs), 0.0));
    }
}
