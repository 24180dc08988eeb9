use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use super::lockfile::LOCKFILE_MIN_FIELDS;

#[derive(Debug, Error)]
pub enum LcuError {
    #[error("Lockfile could not be read at {}, make sure the client is running: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Lockfile invalid: expected at least {} fields, found {fields}", LOCKFILE_MIN_FIELDS)]
    MalformedCredentials { fields: usize },

    #[error("Client not ready: {0}")]
    NotReady(#[source] Box<LcuError>),

    #[error("Client error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    Parse(String),
}

/// Plain error category, for callers that branch on the failure without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    MalformedCredentials,
    NotReady,
    TransportError,
    ParseError,
}

impl LcuError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LcuError::NotFound { .. } => ErrorKind::NotFound,
            LcuError::MalformedCredentials { .. } => ErrorKind::MalformedCredentials,
            LcuError::NotReady(_) => ErrorKind::NotReady,
            LcuError::Transport(_) => ErrorKind::TransportError,
            LcuError::Parse(_) => ErrorKind::ParseError,
        }
    }
}

impl From<json::Error> for LcuError {
    fn from(error: json::Error) -> Self {
        LcuError::Parse(error.to_string())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "NotFound"),
            ErrorKind::MalformedCredentials => write!(f, "MalformedCredentials"),
            ErrorKind::NotReady => write!(f, "NotReady"),
            ErrorKind::TransportError => write!(f, "TransportError"),
            ErrorKind::ParseError => write!(f, "ParseError"),
        }
    }
}
