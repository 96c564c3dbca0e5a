//! Error Types

use thiserror::Error;

/// Message shown in the error panel for any failed fetch
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch lists. Try again.";

/// Failure while reading the list endpoint
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("list service responded with {0}")]
    Status(reqwest::StatusCode),
}

impl FetchError {
    /// Text for the error panel. Every cause maps to the same message.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

/// Rejected merge initiation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("You should select exactly 2 lists to create a new list")]
    WrongSelectionCount { selected: usize },
}
