//! Test fixtures and fake roster sources for integration testing

use async_trait::async_trait;
use lineup_builder::error::{LineupError, Result};
use lineup_builder::roster::RosterSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A small roster in spreadsheet query response form.
///
/// Rows 7 and 8 are malformed (no name, no position) and row 9 has a
/// position outside GK/DF/MF/ST.
pub const SHEET_RESPONSE: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","reqId":"0","status":"ok","sig":"1","table":{"cols":[{"id":"A","label":"Name","type":"string"},{"id":"B","label":"Position","type":"string"}],"rows":[
{"c":[{"v":"Gigi Keeper"},{"v":"GK"},{"v":50},{"v":20},{"v":60},{"v":30},{"v":70},{"v":40},{"v":90},null,{"v":2}]},
{"c":[{"v":"Sam Sweeper"},{"v":"GK"},{"v":40},{"v":10},{"v":40},{"v":20},{"v":60},{"v":30},{"v":80},null,{"v":1}]},
{"c":[{"v":"Dani Wall"},{"v":"DF"},{"v":70},{"v":40},{"v":60},{"v":50},{"v":85},{"v":90},null,null,{"v":3}]},
{"c":[{"v":"Rio Back"},{"v":"DF"},{"v":75},{"v":45},{"v":65},{"v":55},{"v":80},{"v":82},null,null,{"v":2}]},
{"c":[{"v":"Mo Engine"},{"v":"MF"},{"v":78},{"v":70},{"v":88},{"v":82},{"v":70},{"v":60},null,null,{"v":4}]},
{"c":[{"v":"Zizou Ten"},{"v":"ST"},{"v":"88"},{"v":92},{"v":75},{"v":86},{"v":78},{"v":35},null,null,{"v":5}]},
{"c":[null,{"v":"MF"},{"v":99},{"v":99},{"v":99},{"v":99},{"v":99},{"v":99}]},
{"c":[{"v":"Nowhere Man"},null,{"v":99}]},
{"c":[{"v":"Lefty Wing"},{"v":"LW"},{"v":90},{"v":80}]}
]}});"#;

/// Names of the valid players in [`SHEET_RESPONSE`], in sheet order
pub const VALID_NAMES: [&str; 6] = [
    "Gigi Keeper",
    "Sam Sweeper",
    "Dani Wall",
    "Rio Back",
    "Mo Engine",
    "Zizou Ten",
];

/// Roster source that serves a fixed body and counts fetches
#[derive(Debug, Default)]
pub struct CountingRosterSource {
    body: String,
    fetches: AtomicUsize,
}

impl CountingRosterSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterSource for CountingRosterSource {
    async fn fetch(&self) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "counting fixture".to_string()
    }
}

/// Roster source that always fails, like an unreachable sheet
#[derive(Debug, Default)]
pub struct FailingRosterSource;

#[async_trait]
impl RosterSource for FailingRosterSource {
    async fn fetch(&self) -> Result<String> {
        Err(LineupError::RosterFetchFailed {
            message: "connection refused".to_string(),
        }
        .into())
    }

    fn describe(&self) -> String {
        "failing fixture".to_string()
    }
}
