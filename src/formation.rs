//! Formation catalog
//!
//! A formation is a fixed template of ten slot labels, always starting with a
//! single goalkeeper. Unknown codes resolve to the default `3-3-3`.

use crate::types::Position;
use crate::types::Position::{Defender as DF, Goalkeeper as GK, Midfielder as MF, Striker as ST};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Number of slots on every team board
pub const BOARD_SIZE: usize = 10;

/// The supported formations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-4-1")]
    F441,
    #[serde(rename = "4-3-2")]
    F432,
    #[serde(rename = "4-2-3")]
    F423,
    #[serde(rename = "5-2-2")]
    F522,
    #[serde(rename = "5-3-1")]
    F531,
    #[serde(rename = "3-3-3")]
    F333,
    #[serde(rename = "3-4-2")]
    F342,
    #[serde(rename = "3-5-1")]
    F351,
    #[serde(rename = "3-2-4")]
    F324,
}

/// Outcome of selecting a formation by code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormationChange {
    pub formation: Formation,
    /// True when the requested code was unknown and the default was used
    pub fell_back: bool,
}

impl Default for Formation {
    fn default() -> Self {
        Formation::F333
    }
}

impl Formation {
    /// All formations in menu order
    pub fn all() -> [Formation; 9] {
        [
            Formation::F441,
            Formation::F432,
            Formation::F423,
            Formation::F522,
            Formation::F531,
            Formation::F333,
            Formation::F342,
            Formation::F351,
            Formation::F324,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Formation::F441 => "4-4-1",
            Formation::F432 => "4-3-2",
            Formation::F423 => "4-2-3",
            Formation::F522 => "5-2-2",
            Formation::F531 => "5-3-1",
            Formation::F333 => "3-3-3",
            Formation::F342 => "3-4-2",
            Formation::F351 => "3-5-1",
            Formation::F324 => "3-2-4",
        }
    }

    /// Look up a formation by its exact code
    pub fn from_code(code: &str) -> Option<Formation> {
        Formation::all().into_iter().find(|f| f.code() == code.trim())
    }

    /// Look up a formation, falling back to the default for unknown codes
    pub fn resolve(code: &str) -> FormationChange {
        match Formation::from_code(code) {
            Some(formation) => FormationChange {
                formation,
                fell_back: false,
            },
            None => {
                let formation = Formation::default();
                warn!(
                    "Unknown formation code '{}', using {}",
                    code,
                    formation.code()
                );
                FormationChange {
                    formation,
                    fell_back: true,
                }
            }
        }
    }

    /// Required position for each slot, in board order
    pub fn slots(&self) -> [Position; BOARD_SIZE] {
        match self {
            Formation::F441 => [GK, DF, DF, DF, DF, MF, MF, MF, MF, ST],
            // 4-2-3 shares the 4-3-2 layout
            Formation::F432 | Formation::F423 => [GK, DF, DF, DF, DF, MF, MF, MF, ST, ST],
            Formation::F522 => [GK, DF, DF, DF, DF, DF, MF, MF, ST, ST],
            Formation::F531 => [GK, DF, DF, DF, DF, DF, MF, MF, MF, ST],
            Formation::F333 => [GK, DF, DF, DF, MF, MF, MF, ST, ST, ST],
            Formation::F342 => [GK, DF, DF, DF, MF, MF, MF, MF, ST, ST],
            Formation::F351 => [GK, DF, DF, DF, MF, MF, MF, MF, MF, ST],
            Formation::F324 => [GK, DF, DF, DF, MF, MF, ST, ST, ST, ST],
        }
    }

    /// Required position at a slot index, if the index is on the board
    pub fn slot(&self, index: usize) -> Option<Position> {
        self.slots().get(index).copied()
    }

    /// Number of slots per position
    pub fn slot_counts(&self) -> [(Position, usize); 4] {
        let slots = self.slots();
        Position::ALL.map(|position| (position, slots.iter().filter(|p| **p == position).count()))
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}
