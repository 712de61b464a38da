//! Read and validate a roster file. The parse/validate split lets the HTTP
//! API reuse the same entry point on request bodies.

use std::fmt;
use std::fs;

use crate::roster::validate::{validate_roster, RosterError, ValidatedRoster};

#[derive(Debug)]
pub enum LoadError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    Roster(RosterError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read roster file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse roster JSON: {err}"),
            Self::Roster(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse raw JSON text and validate it as a roster.
pub fn parse_roster(raw: &str) -> Result<ValidatedRoster, LoadError> {
    let payload: serde_json::Value = serde_json::from_str(raw).map_err(LoadError::Parse)?;
    validate_roster(&payload).map_err(LoadError::Roster)
}

/// Load a roster from disk.
pub fn load_roster_file(path: &str) -> Result<ValidatedRoster, LoadError> {
    let raw = fs::read_to_string(path).map_err(LoadError::Read)?;
    parse_roster(&raw)
}
