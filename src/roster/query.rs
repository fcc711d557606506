//! Search, position filter and sort over the roster

use crate::error::LineupError;
use crate::types::{Attribute, Player, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position filter for the player list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    pub fn matches(&self, position: Position) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(p) => *p == position,
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::All => write!(f, "All"),
            PositionFilter::Only(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            Ok(PositionFilter::All)
        } else {
            s.to_ascii_uppercase()
                .parse::<Position>()
                .map(PositionFilter::Only)
        }
    }
}

/// Current list view settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterQuery {
    /// Case-insensitive substring matched against player names
    pub search: String,
    pub position: PositionFilter,
    /// Sorted descending by this attribute
    pub sort_by: Attribute,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            position: PositionFilter::All,
            sort_by: Attribute::Overall,
        }
    }
}

impl RosterQuery {
    /// Players matching the search and filter, highest `sort_by` first.
    ///
    /// Ties keep roster order.
    pub fn apply<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        let needle = self.search.to_lowercase();
        let mut results: Vec<&Player> = players
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .filter(|p| self.position.matches(p.position()))
            .collect();

        let key = self.sort_by;
        results.sort_by(|a, b| b.attribute(key).total_cmp(&a.attribute(key)));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerAttributes;

    fn roster() -> Vec<Player> {
        let player = |name: &str, position, speed, goalkeeping| {
            Player::new(
                name,
                position,
                PlayerAttributes {
                    speed,
                    goalkeeping,
                    ..Default::default()
                },
            )
        };
        vec![
            player("Ana Keeper", Position::Goalkeeper, 40.0, 90.0),
            player("Bo Striker", Position::Striker, 90.0, 0.0),
            player("Cy Mid", Position::Midfielder, 70.0, 0.0),
            player("Dee Back", Position::Defender, 70.0, 0.0),
            player("anna striker", Position::Striker, 50.0, 0.0),
        ]
    }

    fn names(players: Vec<&Player>) -> Vec<&str> {
        players.into_iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_overall() {
        let players = roster();
        let results = RosterQuery::default().apply(&players);
        assert_eq!(results.len(), 5);
        // GK 82, ST 23, MF 14, ST 13 (12.5 rounds up), DF 7
        assert_eq!(
            names(results),
            vec!["Ana Keeper", "Bo Striker", "Cy Mid", "anna striker", "Dee Back"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let players = roster();
        let query = RosterQuery {
            search: "ANN".to_string(),
            ..Default::default()
        };
        assert_eq!(names(query.apply(&players)), vec!["anna striker"]);

        let query = RosterQuery {
            search: "striker".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(&players).len(), 2);
    }

    #[test]
    fn test_position_filter() {
        let players = roster();
        let query = RosterQuery {
            position: PositionFilter::Only(Position::Striker),
            ..Default::default()
        };
        assert_eq!(names(query.apply(&players)), vec!["Bo Striker", "anna striker"]);
    }

    #[test]
    fn test_sort_ties_keep_roster_order() {
        let players = roster();
        let query = RosterQuery {
            sort_by: Attribute::Speed,
            ..Default::default()
        };
        assert_eq!(
            names(query.apply(&players)),
            vec!["Bo Striker", "Cy Mid", "Dee Back", "anna striker", "Ana Keeper"]
        );
    }

    #[test]
    fn test_no_matches() {
        let players = roster();
        let query = RosterQuery {
            search: "zzz".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&players).is_empty());
    }

    #[test]
    fn test_position_filter_parsing() {
        assert_eq!("All".parse::<PositionFilter>().unwrap(), PositionFilter::All);
        assert_eq!(
            "mf".parse::<PositionFilter>().unwrap(),
            PositionFilter::Only(Position::Midfielder)
        );
        assert_eq!(
            " gk ".parse::<PositionFilter>().unwrap(),
            PositionFilter::Only(Position::Goalkeeper)
        );
        assert!("wing".parse::<PositionFilter>().is_err());
    }
}
