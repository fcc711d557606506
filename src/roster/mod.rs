//! Roster loading and querying
//!
//! The roster is read once per session from a spreadsheet-backed source,
//! parsed into scored players, then filtered and sorted for display.

pub mod parser;
pub mod query;
pub mod source;

// Re-export commonly used types
pub use parser::parse_query_response;
pub use query::{PositionFilter, RosterQuery};
pub use source::{FileRosterSource, HttpRosterSource, RosterSource, StaticRosterSource};

use crate::error::Result;
use crate::types::Player;
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use tracing::info;

/// Players loaded for a session
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            loaded_at: Some(current_timestamp()),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by exact name
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// When the roster was loaded; `None` for a session with no roster yet
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

/// Fetch the raw response from `source` and parse it into a roster
pub async fn load_roster(source: &dyn RosterSource) -> Result<Roster> {
    info!("Loading roster from {}", source.describe());
    let body = source.fetch().await?;
    let players = parse_query_response(&body)?;
    info!("Loaded {} players", players.len());
    Ok(Roster::new(players))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineupError;
    use crate::roster::source::MockRosterSource;

    const BODY: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","status":"ok","table":{"cols":[],"rows":[
{"c":[{"v":"Keeper"},{"v":"GK"},{"v":50},{"v":10},{"v":40},{"v":20},{"v":60},{"v":30},{"v":90},null,{"v":2}]},
{"c":[{"v":"Nine"},{"v":"ST"},{"v":80},{"v":85},{"v":60},{"v":75},{"v":70},{"v":30},null,null,{"v":4}]}
]}});"#;

    #[tokio::test]
    async fn test_load_roster_from_source() {
        let mut source = MockRosterSource::new();
        source
            .expect_describe()
            .returning(|| "mock".to_string());
        source
            .expect_fetch()
            .times(1)
            .returning(|| Ok(BODY.to_string()));

        let roster = load_roster(&source).await.unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.loaded_at().is_some());
        assert_eq!(roster.find("Nine").map(|p| p.name()), Some("Nine"));
        assert!(roster.find("nine").is_none());
    }

    #[tokio::test]
    async fn test_load_roster_propagates_fetch_failure() {
        let mut source = MockRosterSource::new();
        source
            .expect_describe()
            .returning(|| "mock".to_string());
        source.expect_fetch().returning(|| {
            Err(LineupError::RosterFetchFailed {
                message: "connection refused".to_string(),
            }
            .into())
        });

        let err = load_roster(&source).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LineupError>(),
            Some(LineupError::RosterFetchFailed { .. })
        ));
    }

    #[test]
    fn test_default_roster_is_empty() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert!(roster.loaded_at().is_none());
    }
}
