//! Roster source configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Spreadsheet query endpoint for the shared roster sheet
pub const DEFAULT_ROSTER_URL: &str = "https://docs.google.com/spreadsheets/d/1ooFfP_H35NlmBCqbKOfwDJQoxhgwfdC0LysBbo6NfTg/gviz/tq?tqx=out:json&sheet=Sheet1";

/// Where the roster is read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Spreadsheet query URL
    pub url: String,
    /// Saved query response; takes precedence over `url` when set
    pub file: Option<PathBuf>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_ROSTER_URL.to_string(),
            file: None,
        }
    }
}
