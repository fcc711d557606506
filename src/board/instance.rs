//! Team board implementation
//!
//! A board is ten positional slots laid out by the team's active formation.
//! Drops are checked against the slot label and a player may only sit in one
//! slot per board.

use crate::error::DropRejection;
use crate::formation::{Formation, FormationChange, BOARD_SIZE};
use crate::types::{Attribute, Player};
use serde::Serialize;
use tracing::debug;

/// Result of an accepted drop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Slot the player now occupies
    pub slot: usize,
    /// Slot the same player was moved out of, if any
    pub vacated: Option<usize>,
    /// Previous occupant of the target slot, if it held someone else
    pub displaced: Option<Player>,
}

/// One team's formation and slot contents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamBoard {
    formation: Formation,
    slots: [Option<Player>; BOARD_SIZE],
}

impl TeamBoard {
    /// Create an empty board with the given formation
    pub fn new(formation: Formation) -> Self {
        Self {
            formation,
            slots: Default::default(),
        }
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }

    /// Switch formation by code, leaving every slot where it is.
    ///
    /// Players already placed keep their index even when the new label at
    /// that index differs from their position.
    pub fn select_formation(&mut self, code: &str) -> FormationChange {
        let change = Formation::resolve(code);
        self.set_formation(change.formation);
        change
    }

    pub fn set_formation(&mut self, formation: Formation) {
        debug!(
            "Formation change {} -> {}",
            self.formation.code(),
            formation.code()
        );
        self.formation = formation;
    }

    pub fn slots(&self) -> &[Option<Player>; BOARD_SIZE] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Occupied slots as (index, player)
    pub fn players(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (i, p)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Slot currently holding a player with this name
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.players()
            .find(|(_, p)| p.name() == name)
            .map(|(i, _)| i)
    }

    /// Place a copy of `player` at `index`.
    ///
    /// The slot label under the active formation must equal the player's
    /// position. Any other slot holding the same player is cleared first.
    /// A rejected drop leaves the board untouched.
    pub fn drop_player(
        &mut self,
        index: usize,
        player: &Player,
    ) -> Result<Placement, DropRejection> {
        let required = self
            .formation
            .slot(index)
            .ok_or(DropRejection::SlotOutOfRange {
                index,
                capacity: BOARD_SIZE,
            })?;

        if required != player.position() {
            return Err(DropRejection::PositionMismatch {
                index,
                required,
                actual: player.position(),
                player: player.name().to_string(),
            });
        }

        let mut vacated = None;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if i != index && slot.as_ref().is_some_and(|p| p.name() == player.name()) {
                *slot = None;
                vacated = Some(i);
            }
        }

        let displaced = self.slots[index]
            .replace(player.clone())
            .filter(|previous| previous.name() != player.name());

        debug!(
            "Placed '{}' ({}) in slot {} (vacated: {:?})",
            player.name(),
            player.position(),
            index,
            vacated
        );

        Ok(Placement {
            slot: index,
            vacated,
            displaced,
        })
    }

    /// Clear a slot. Empty or out-of-range slots are a no-op.
    pub fn remove_player(&mut self, index: usize) -> Option<Player> {
        let removed = self.slots.get_mut(index).and_then(Option::take);
        if let Some(player) = &removed {
            debug!("Removed '{}' from slot {}", player.name(), index);
        }
        removed
    }

    /// Empty every slot, keeping the formation
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Mean of an attribute over occupied slots only; 0 for an empty board
    pub fn average(&self, attribute: Attribute) -> f64 {
        let (sum, count) = self
            .players()
            .fold((0.0, 0usize), |(sum, count), (_, p)| {
                (sum + p.attribute(attribute), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }
}
