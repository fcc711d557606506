//! Session defaults

use crate::formation::Formation;
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Initial state for new lineup sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupSettings {
    pub team_a_formation: String,
    pub team_b_formation: String,
    pub default_sort: Attribute,
}

impl Default for LineupSettings {
    fn default() -> Self {
        Self {
            team_a_formation: Formation::default().code().to_string(),
            team_b_formation: Formation::default().code().to_string(),
            default_sort: Attribute::Overall,
        }
    }
}
