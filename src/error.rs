//! Error types for the lineup builder
//!
//! Roster and configuration failures use `LineupError` and propagate through
//! anyhow. Rejected drops are reported as `DropRejection` values so callers
//! can decide whether to surface them.

use crate::types::Position;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for roster loading and configuration
#[derive(Debug, thiserror::Error)]
pub enum LineupError {
    #[error("Roster fetch failed: {message}")]
    RosterFetchFailed { message: String },

    #[error("Roster response could not be parsed: {reason}")]
    RosterParseFailed { reason: String },

    #[error("Invalid team: {value}")]
    InvalidTeam { value: String },

    #[error("Invalid attribute: {value}")]
    InvalidAttribute { value: String },

    #[error("Invalid position: {value}")]
    InvalidPosition { value: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

/// Reason a drop onto a team board was refused; the board is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropRejection {
    #[error("Slot {index} is out of range (boards have {capacity} slots)")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("Slot {index} requires {required}, but {player} plays {actual}")]
    PositionMismatch {
        index: usize,
        required: Position,
        actual: Position,
        player: String,
    },

    #[error("Player not found in roster: {name}")]
    UnknownPlayer { name: String },

    #[error("Transfer payload is not a player record: {reason}")]
    InvalidPayload { reason: String },
}
