use super::FetchAction;
use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Failures of the HTTP-backed hydra provider
#[derive(Debug)]
pub enum HydraError {
    // Backend answered, but not with a 2xx
    Status {
        status: StatusCode,
        description: String,
    },
    // Could not reach the backend or read its body
    Transport(reqwest::Error),
    Decode(serde_json::Error),
    Url(String),
    MissingResource(FetchAction),
}

impl fmt::Display for HydraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HydraError::Status {
                status,
                description,
            } => write!(f, "API returned status {}: {}", status, description),
            HydraError::Transport(e) => write!(f, "Transport Error: {}", e),
            HydraError::Decode(e) => write!(f, "Decode Error: {}", e),
            HydraError::Url(e) => write!(f, "Invalid URL: {}", e),
            HydraError::MissingResource(action) => {
                write!(f, "{:?} request needs a resource name", action)
            }
        }
    }
}

impl Error for HydraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HydraError::Transport(e) => Some(e),
            HydraError::Decode(e) => Some(e),
            HydraError::Status { .. } => None,
            HydraError::Url(_) => None,
            HydraError::MissingResource(_) => None,
        }
    }
}

impl From<reqwest::Error> for HydraError {
    fn from(e: reqwest::Error) -> Self {
        HydraError::Transport(e)
    }
}

impl From<serde_json::Error> for HydraError {
    fn from(e: serde_json::Error) -> Self {
        HydraError::Decode(e)
    }
}

impl HydraError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HydraError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
