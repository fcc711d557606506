//! Lineup session controller
//!
//! The session owns all state for one user: the loaded roster, the list
//! query, and the two team boards. Every change goes through a method here.

use crate::board::instance::{Placement, TeamBoard};
use crate::board::summary::BoardSummary;
use crate::error::DropRejection;
use crate::formation::{Formation, FormationChange};
use crate::roster::{PositionFilter, Roster, RosterQuery};
use crate::types::{Attribute, Player, SessionId, TeamId};
use crate::utils::{current_timestamp, generate_session_id};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// State of one lineup-building session
#[derive(Debug, Clone)]
pub struct LineupSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    roster: Roster,
    query: RosterQuery,
    team_a: TeamBoard,
    team_b: TeamBoard,
}

impl Default for LineupSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LineupSession {
    /// Start a session with empty boards in the default formation
    pub fn new() -> Self {
        Self::with_formations(Formation::default(), Formation::default())
    }

    pub fn with_formations(team_a: Formation, team_b: Formation) -> Self {
        let session = Self {
            id: generate_session_id(),
            started_at: current_timestamp(),
            roster: Roster::default(),
            query: RosterQuery::default(),
            team_a: TeamBoard::new(team_a),
            team_b: TeamBoard::new(team_b),
        };
        info!(
            "Started lineup session {} ({} vs {})",
            session.id, team_a, team_b
        );
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // Roster and list view

    pub fn set_roster(&mut self, roster: Roster) {
        info!("Session {} roster: {} players", self.id, roster.len());
        self.roster = roster;
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn query(&self) -> &RosterQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: RosterQuery) {
        self.query = query;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_position_filter(&mut self, filter: PositionFilter) {
        self.query.position = filter;
    }

    pub fn set_sort(&mut self, attribute: Attribute) {
        self.query.sort_by = attribute;
    }

    /// Roster players passing the current query, in display order
    pub fn visible_players(&self) -> Vec<&Player> {
        self.query.apply(self.roster.players())
    }

    // Boards

    pub fn board(&self, team: TeamId) -> &TeamBoard {
        match team {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    fn board_mut(&mut self, team: TeamId) -> &mut TeamBoard {
        match team {
            TeamId::A => &mut self.team_a,
            TeamId::B => &mut self.team_b,
        }
    }

    pub fn formation(&self, team: TeamId) -> Formation {
        self.board(team).formation()
    }

    /// Change a team's formation; unknown codes fall back to 3-3-3.
    ///
    /// Placed players are not moved or cleared.
    pub fn select_formation(&mut self, team: TeamId, code: &str) -> FormationChange {
        let change = self.board_mut(team).select_formation(code);
        info!("{} formation set to {}", team, change.formation);
        change
    }

    /// Drop a player onto a slot of one team's board
    pub fn drop_player(
        &mut self,
        team: TeamId,
        slot: usize,
        player: &Player,
    ) -> Result<Placement, DropRejection> {
        let result = self.board_mut(team).drop_player(slot, player);
        match &result {
            Ok(placement) => debug!("{} slot {} <- '{}'", team, placement.slot, player.name()),
            Err(rejection) => debug!("{} drop rejected: {}", team, rejection),
        }
        result
    }

    /// Drop a serialized player record, as carried by a drag payload
    pub fn drop_payload(
        &mut self,
        team: TeamId,
        slot: usize,
        payload: &str,
    ) -> Result<Placement, DropRejection> {
        let player: Player =
            serde_json::from_str(payload).map_err(|e| DropRejection::InvalidPayload {
                reason: e.to_string(),
            })?;
        self.drop_player(team, slot, &player)
    }

    /// Drop a roster player looked up by exact name
    pub fn drop_by_name(
        &mut self,
        team: TeamId,
        slot: usize,
        name: &str,
    ) -> Result<Placement, DropRejection> {
        let player = self
            .roster
            .find(name)
            .cloned()
            .ok_or_else(|| DropRejection::UnknownPlayer {
                name: name.to_string(),
            })?;
        self.drop_player(team, slot, &player)
    }

    /// Clear a slot; returns whoever was there
    pub fn remove_player(&mut self, team: TeamId, slot: usize) -> Option<Player> {
        self.board_mut(team).remove_player(slot)
    }

    pub fn clear_board(&mut self, team: TeamId) {
        info!("Clearing {} board", team);
        self.board_mut(team).clear();
    }

    /// Mean of `attribute` over the team's occupied slots; 0 when empty
    pub fn team_average(&self, team: TeamId, attribute: Attribute) -> f64 {
        self.board(team).average(attribute)
    }

    pub fn board_summary(&self, team: TeamId) -> BoardSummary {
        BoardSummary::from_board(team, self.board(team))
    }
}
