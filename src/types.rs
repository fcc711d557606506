//! Common types used throughout the lineup builder

use crate::error::LineupError;
use crate::rating::compute_overall;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a lineup session
pub type SessionId = Uuid;

/// Playing position, shared by players and board slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "ST")]
    Striker,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Striker,
    ];

    /// Two-letter label used by the roster sheet and slot labels
    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Striker => "ST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    /// Exact, case-sensitive match on the two-letter label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GK" => Ok(Position::Goalkeeper),
            "DF" => Ok(Position::Defender),
            "MF" => Ok(Position::Midfielder),
            "ST" => Ok(Position::Striker),
            _ => Err(LineupError::InvalidPosition {
                value: s.to_string(),
            }),
        }
    }
}

/// Player attribute key, used for sorting and board averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Overall,
    Speed,
    Shooting,
    Passing,
    Dribbling,
    Physical,
    Defending,
    Goalkeeping,
    WeakFoot,
}

impl Attribute {
    pub const ALL: [Attribute; 9] = [
        Attribute::Overall,
        Attribute::Speed,
        Attribute::Shooting,
        Attribute::Passing,
        Attribute::Dribbling,
        Attribute::Physical,
        Attribute::Defending,
        Attribute::Goalkeeping,
        Attribute::WeakFoot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Overall => "overall",
            Attribute::Speed => "speed",
            Attribute::Shooting => "shooting",
            Attribute::Passing => "passing",
            Attribute::Dribbling => "dribbling",
            Attribute::Physical => "physical",
            Attribute::Defending => "defending",
            Attribute::Goalkeeping => "goalkeeping",
            Attribute::WeakFoot => "weakFoot",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Attribute {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overall" => Ok(Attribute::Overall),
            "speed" => Ok(Attribute::Speed),
            "shooting" => Ok(Attribute::Shooting),
            "passing" => Ok(Attribute::Passing),
            "dribbling" => Ok(Attribute::Dribbling),
            "physical" => Ok(Attribute::Physical),
            "defending" => Ok(Attribute::Defending),
            "goalkeeping" => Ok(Attribute::Goalkeeping),
            "weakfoot" | "weak_foot" | "weak-foot" => Ok(Attribute::WeakFoot),
            _ => Err(LineupError::InvalidAttribute {
                value: s.to_string(),
            }),
        }
    }
}

/// Raw attribute scores for a player; absent values are 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerAttributes {
    pub speed: f64,
    pub shooting: f64,
    pub passing: f64,
    pub dribbling: f64,
    pub physical: f64,
    pub defending: f64,
    pub goalkeeping: f64,
    pub weak_foot: f64,
}

/// Player record as it crosses the drag/drop boundary
///
/// Any `overall` carried by the payload is ignored; it is recomputed when the
/// record becomes a [`Player`].
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub position: Position,
    #[serde(flatten)]
    pub attributes: PlayerAttributes,
}

/// A scored player. `overall` is derived from position and attributes at
/// construction and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerRecord")]
pub struct Player {
    name: String,
    position: Position,
    #[serde(flatten)]
    attributes: PlayerAttributes,
    overall: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, attributes: PlayerAttributes) -> Self {
        let overall = compute_overall(position, &attributes);
        Self {
            name: name.into(),
            position,
            attributes,
            overall,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn attributes(&self) -> &PlayerAttributes {
        &self.attributes
    }

    pub fn overall(&self) -> i64 {
        self.overall
    }

    /// Value of a single attribute, with `overall` widened to f64
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        let a = &self.attributes;
        match attribute {
            Attribute::Overall => self.overall as f64,
            Attribute::Speed => a.speed,
            Attribute::Shooting => a.shooting,
            Attribute::Passing => a.passing,
            Attribute::Dribbling => a.dribbling,
            Attribute::Physical => a.physical,
            Attribute::Defending => a.defending,
            Attribute::Goalkeeping => a.goalkeeping,
            Attribute::WeakFoot => a.weak_foot,
        }
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Player::new(record.name, record.position, record.attributes)
    }
}

/// One of the two boards in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::A => write!(f, "Team A"),
            TeamId::B => write!(f, "Team B"),
        }
    }
}

impl FromStr for TeamId {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "team-a" | "teama" => Ok(TeamId::A),
            "b" | "team-b" | "teamb" => Ok(TeamId::B),
            _ => Err(LineupError::InvalidTeam {
                value: s.to_string(),
            }),
        }
    }
}
