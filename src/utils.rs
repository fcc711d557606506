//! Utility functions for the lineup builder

use crate::types::TeamId;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique session ID
pub fn generate_session_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a `TEAM:SLOT:NAME` placement, e.g. `a:0:Jane Doe`.
///
/// The name is everything after the second colon, so it may contain colons.
pub fn parse_placement(spec: &str) -> Result<(TeamId, usize, String)> {
    let mut parts = spec.splitn(3, ':');
    let (team, slot, name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(team), Some(slot), Some(name)) if !name.trim().is_empty() => (team, slot, name),
        _ => return Err(anyhow!("Invalid placement '{}', expected TEAM:SLOT:NAME", spec)),
    };

    let team = team.parse::<TeamId>()?;
    let slot = slot
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("Invalid slot index in placement '{}'", spec))?;

    Ok((team, slot, name.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_session_id();
        let id2 = generate_session_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_parse_placement() {
        let (team, slot, name) = parse_placement("a:0:Jane Doe").unwrap();
        assert_eq!(team, TeamId::A);
        assert_eq!(slot, 0);
        assert_eq!(name, "Jane Doe");

        let (team, slot, name) = parse_placement("B: 9 :Odd:Name").unwrap();
        assert_eq!(team, TeamId::B);
        assert_eq!(slot, 9);
        assert_eq!(name, "Odd:Name");
    }

    #[test]
    fn test_parse_placement_errors() {
        assert!(parse_placement("a:0").is_err());
        assert!(parse_placement("a:0:  ").is_err());
        assert!(parse_placement("c:0:Name").is_err());
        assert!(parse_placement("a:x:Name").is_err());
        assert!(parse_placement("a:-1:Name").is_err());
    }
}
