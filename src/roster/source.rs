//! Roster sources
//!
//! A source returns the raw body of a spreadsheet query response. It is read
//! once at session start: no retry, no timeout, no partial results.

use crate::error::{LineupError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::path::PathBuf;
use tracing::debug;

/// Provider of the raw roster response
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Read the full response body
    async fn fetch(&self) -> Result<String>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// Reads the roster from a spreadsheet query URL
#[derive(Debug, Clone)]
pub struct HttpRosterSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRosterSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RosterSource for HttpRosterSource {
    async fn fetch(&self) -> Result<String> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            LineupError::RosterFetchFailed {
                message: e.to_string(),
            }
        })?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await.map_err(|e| {
                LineupError::RosterFetchFailed {
                    message: e.to_string(),
                }
            })?),
            status => Err(LineupError::RosterFetchFailed {
                message: format!("unexpected status {} from {}", status, self.url),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a saved query response from disk
#[derive(Debug, Clone)]
pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for FileRosterSource {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            LineupError::RosterFetchFailed {
                message: format!("{}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a fixed response body
#[derive(Debug, Clone, Default)]
pub struct StaticRosterSource {
    body: String,
}

impl StaticRosterSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl RosterSource for StaticRosterSource {
    async fn fetch(&self) -> Result<String> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "static roster".to_string()
    }
}
