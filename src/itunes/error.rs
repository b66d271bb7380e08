use std::fmt;

use reqwest::StatusCode;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch from iTunes API. All access paths failed. \
     Please check your internet connection or try again later.";

/// Why a single access path did not produce a catalog.
#[derive(Debug)]
pub enum AccessPathError {
    Transport(reqwest::Error),
    Status(StatusCode),
    MalformedResponse(serde_json::Error),
    EmptyResult,
}

impl From<reqwest::Error> for AccessPathError {
    fn from(err: reqwest::Error) -> Self {
        AccessPathError::Transport(err)
    }
}

impl From<serde_json::Error> for AccessPathError {
    fn from(err: serde_json::Error) -> Self {
        AccessPathError::MalformedResponse(err)
    }
}

impl fmt::Display for AccessPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessPathError::Transport(e) => write!(f, "request failed: {}", e),
            AccessPathError::Status(status) => write!(f, "HTTP error! status: {}", status),
            AccessPathError::MalformedResponse(e) => write!(f, "malformed response: {}", e),
            AccessPathError::EmptyResult => write!(f, "no results returned from API"),
        }
    }
}

impl std::error::Error for AccessPathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AccessPathError::Transport(e) => Some(e),
            AccessPathError::MalformedResponse(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct FailedAttempt {
    pub access_path: String,
    pub error: AccessPathError,
}

/// Every access path failed. Carries one entry per attempt, in the order
/// the paths were tried.
#[derive(Debug, Default)]
pub struct FetchError {
    pub attempts: Vec<FailedAttempt>,
}

impl FetchError {
    pub fn new(attempts: Vec<FailedAttempt>) -> Self {
        Self { attempts }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", FETCH_FAILED_MESSAGE)
    }
}

impl std::error::Error for FetchError {}
