//! Error types for talking to the statistics service.

use std::fmt;

/// A request that did not produce a usable response.
///
/// Both variants end in the same "Connection Lost" view. A successful
/// response that carries no data is not an error; see
/// [`StatsOutcome::NoData`](crate::stats::StatsOutcome::NoData).
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read.
    Transport(String),
    /// The body was not JSON, or not shaped like a stats result.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
