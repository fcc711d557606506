//! Team boards and the session controller
//!
//! Each session holds two independent boards. A board is laid out by its
//! team's formation and accepts drops only onto slots whose label matches
//! the player's position.

pub mod instance;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use instance::{Placement, TeamBoard};
pub use session::LineupSession;
pub use summary::{BoardSummary, SlotPlayer, SlotView};
