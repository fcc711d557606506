//! Configuration management for the lineup builder
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;
pub mod lineup;
pub mod roster;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use lineup::LineupSettings;
pub use roster::{RosterSettings, DEFAULT_ROSTER_URL};
