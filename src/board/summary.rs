//! Presentation view of a team board

use crate::board::instance::TeamBoard;
use crate::formation::{Formation, BOARD_SIZE};
use crate::rating::round_half_up;
use crate::types::{Attribute, Player, Position, TeamId};
use serde::Serialize;
use std::fmt;

/// Attributes averaged on the board footer
pub const SUMMARY_ATTRIBUTES: [Attribute; 4] = [
    Attribute::Overall,
    Attribute::Speed,
    Attribute::Passing,
    Attribute::Shooting,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotPlayer {
    pub name: String,
    pub position: Position,
    pub overall: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub label: Position,
    pub player: Option<SlotPlayer>,
    /// Occupant's position differs from the label (left over from a
    /// formation change)
    pub mismatched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSummary {
    pub team: TeamId,
    pub formation: Formation,
    pub filled: usize,
    pub capacity: usize,
    pub slots: Vec<SlotView>,
    /// Rounded averages over occupied slots, keyed by attribute label
    pub averages: Vec<(Attribute, i64)>,
}

impl BoardSummary {
    pub fn from_board(team: TeamId, board: &TeamBoard) -> Self {
        let formation = board.formation();
        let slots = formation
            .slots()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let player = board.get(index);
                SlotView {
                    index,
                    label: *label,
                    mismatched: player.is_some_and(|p| p.position() != *label),
                    player: player.map(SlotPlayer::from),
                }
            })
            .collect();

        let averages = SUMMARY_ATTRIBUTES
            .iter()
            .map(|attribute| (*attribute, round_half_up(board.average(*attribute))))
            .collect();

        Self {
            team,
            formation,
            filled: board.occupied_count(),
            capacity: BOARD_SIZE,
            slots,
            averages,
        }
    }

    pub fn average(&self, attribute: Attribute) -> Option<i64> {
        self.averages
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| *v)
    }
}

impl From<&Player> for SlotPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            position: player.position(),
            overall: player.overall(),
        }
    }
}

impl fmt::Display for BoardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}] ({}/{})",
            self.team, self.formation, self.filled, self.capacity
        )?;
        for slot in &self.slots {
            match &slot.player {
                Some(p) => {
                    let flag = if slot.mismatched { " !" } else { "" };
                    writeln!(
                        f,
                        "  {:>2} {}  {} ({}) OVR {}{}",
                        slot.index, slot.label, p.name, p.position, p.overall, flag
                    )?;
                }
                None => writeln!(f, "  {:>2} {}  -", slot.index, slot.label)?,
            }
        }
        if self.filled > 0 {
            let parts: Vec<String> = self
                .averages
                .iter()
                .map(|(attribute, value)| format!("{}: {}", attribute, value))
                .collect();
            writeln!(f, "  Avg {}", parts.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerAttributes;

    #[test]
    fn test_empty_summary() {
        let board = TeamBoard::default();
        let summary = BoardSummary::from_board(TeamId::A, &board);
        assert_eq!(summary.filled, 0);
        assert_eq!(summary.capacity, BOARD_SIZE);
        assert_eq!(summary.slots.len(), BOARD_SIZE);
        assert_eq!(summary.average(Attribute::Overall), Some(0));
        assert!(summary.slots.iter().all(|s| s.player.is_none()));
    }

    #[test]
    fn test_summary_flags_mismatched_slots() {
        let mut board = TeamBoard::default();
        let mid = Player::new(
            "Mid",
            Position::Midfielder,
            PlayerAttributes {
                passing: 80.0,
                ..Default::default()
            },
        );
        board.drop_player(4, &mid).unwrap();
        board.select_formation("4-4-1");

        let summary = BoardSummary::from_board(TeamId::B, &board);
        assert_eq!(summary.filled, 1);
        assert!(summary.slots[4].mismatched);
        assert_eq!(summary.slots[4].label, Position::Defender);
        assert_eq!(summary.average(Attribute::Overall), Some(20));
        assert_eq!(summary.average(Attribute::Passing), Some(80));

        let text = summary.to_string();
        assert!(text.starts_with("Team B [4-4-1] (1/10)"));
        assert!(text.contains("Mid (MF) OVR 20 !"));
    }
}
