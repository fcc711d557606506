//! Spreadsheet query response parser
//!
//! The sheet endpoint answers with JSON wrapped in a JavaScript callback:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"table":{"rows":[{"c":[{"v":"Name"}, ...]}]}});
//! ```
//!
//! Cells are read by fixed column index. Rows without a name or a known
//! position are dropped before scoring.

use crate::error::{LineupError, Result};
use crate::types::{Player, PlayerAttributes, Position};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const COL_NAME: usize = 0;
const COL_POSITION: usize = 1;
const COL_SPEED: usize = 2;
const COL_SHOOTING: usize = 3;
const COL_PASSING: usize = 4;
const COL_DRIBBLING: usize = 5;
const COL_PHYSICAL: usize = 6;
const COL_DEFENDING: usize = 7;
const COL_GOALKEEPING: usize = 8;
// column 9 is not used
const COL_WEAK_FOOT: usize = 10;

static NULL: Value = Value::Null;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    table: QueryTable,
}

#[derive(Debug, Deserialize)]
struct QueryTable {
    #[serde(default)]
    rows: Vec<QueryRow>,
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    #[serde(default)]
    c: Vec<Option<QueryCell>>,
}

#[derive(Debug, Deserialize)]
struct QueryCell {
    #[serde(default)]
    v: Value,
}

impl QueryRow {
    fn cell(&self, index: usize) -> &Value {
        match self.c.get(index) {
            Some(Some(cell)) => &cell.v,
            _ => &NULL,
        }
    }

    fn number(&self, index: usize) -> f64 {
        numeric_value(self.cell(index))
    }

    fn into_player(self) -> Option<Player> {
        let name = text_value(self.cell(COL_NAME))?;
        // position labels must match exactly
        let position = match self.cell(COL_POSITION) {
            Value::String(label) => label.parse::<Position>().ok()?,
            _ => return None,
        };

        let attributes = PlayerAttributes {
            speed: self.number(COL_SPEED),
            shooting: self.number(COL_SHOOTING),
            passing: self.number(COL_PASSING),
            dribbling: self.number(COL_DRIBBLING),
            physical: self.number(COL_PHYSICAL),
            defending: self.number(COL_DEFENDING),
            goalkeeping: self.number(COL_GOALKEEPING),
            weak_foot: self.number(COL_WEAK_FOOT),
        };

        Some(Player::new(name, position, attributes))
    }
}

/// Non-empty text of a cell; numbers are rendered as text
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric value of a cell; anything non-numeric counts as 0
fn numeric_value(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Slice out the JSON object wrapped by the callback
fn unwrap_envelope(body: &str) -> Option<&str> {
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (start < end).then(|| &body[start..=end])
}

/// Parse a spreadsheet query response into scored players
pub fn parse_query_response(body: &str) -> Result<Vec<Player>> {
    let json = unwrap_envelope(body).ok_or_else(|| LineupError::RosterParseFailed {
        reason: "no JSON object in response".to_string(),
    })?;

    let response: QueryResponse =
        serde_json::from_str(json).map_err(|e| LineupError::RosterParseFailed {
            reason: e.to_string(),
        })?;

    let total = response.table.rows.len();
    let players: Vec<Player> = response
        .table
        .rows
        .into_iter()
        .filter_map(QueryRow::into_player)
        .collect();

    if players.len() < total {
        debug!(
            "Dropped {} roster rows without a name or position",
            total - players.len()
        );
    }

    Ok(players)
}
