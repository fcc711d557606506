//! Lineup Builder - soccer lineup planning from a shared roster sheet
//!
//! This crate loads a player roster from a spreadsheet-backed source, scores
//! each player with a position-weighted overall rating, and arranges players
//! on two formation-based team boards.

pub mod board;
pub mod config;
pub mod error;
pub mod formation;
pub mod rating;
pub mod roster;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{DropRejection, LineupError, Result};
pub use types::*;

// Re-export key components
pub use board::{BoardSummary, LineupSession, Placement, TeamBoard};
pub use formation::{Formation, FormationChange, BOARD_SIZE};
pub use rating::compute_overall;
pub use roster::{load_roster, Roster, RosterQuery, RosterSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
