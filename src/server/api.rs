use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{select_squad, Rng, SelectionConfig, SelectionError, SQUAD_SIZE};
use crate::export::{build_plan, generation_timestamp, CopilotPlan};
use crate::roster::{validate_roster, RosterError};

#[derive(Debug, Clone, Deserialize)]
pub struct SelectRequest {
    pub roster: serde_json::Value,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub ignore_unleveled: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionSummary {
    pub selected: usize,
    pub six_star_count: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectResponse {
    pub status: &'static str,
    pub summary: SelectionSummary,
    pub diagnostics: Vec<String>,
    pub plan: CopilotPlan,
}

#[derive(Debug)]
pub enum SelectError {
    Parse(serde_json::Error),
    Roster(RosterError),
    Selection(SelectionError),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid request body: {err}"),
            Self::Roster(err) => write!(f, "{err}"),
            Self::Selection(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SelectError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "randops-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn select_payload(body: &str) -> Result<String, SelectError> {
    let request: SelectRequest = serde_json::from_str(body).map_err(SelectError::Parse)?;
    let roster = validate_roster(&request.roster).map_err(SelectError::Roster)?;

    // Resolve the seed before drawing so the response can echo it back for
    // reproducible re-runs.
    let seed = request.seed.unwrap_or_else(|| Rng::from_entropy().next_u64());
    let mut rng = Rng::new(seed);

    let config = SelectionConfig {
        use_level_weighting: request.weighted,
        ignore_unleveled_base: request.ignore_unleveled,
    };
    let selection =
        select_squad(&roster.operators, config, &mut rng).map_err(SelectError::Selection)?;

    let response = SelectResponse {
        status: "ok",
        summary: SelectionSummary {
            selected: selection.len(),
            six_star_count: selection
                .iter()
                .filter(|s| s.operator.rarity == 6)
                .count(),
            seed,
        },
        diagnostics: roster.diagnostics.iter().map(|d| d.to_string()).collect(),
        plan: build_plan(&selection, &generation_timestamp()),
    };
    serde_json::to_string_pretty(&response).map_err(SelectError::Parse)
}

#[derive(Debug)]
pub enum ValidateError {
    Parse(serde_json::Error),
    Roster(RosterError),
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid request body: {err}"),
            Self::Roster(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ValidateError {}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub status: &'static str,
    pub operators: usize,
    pub dropped_entries: usize,
    pub eligible_for_selection: bool,
    pub diagnostics: Vec<String>,
}

pub fn validate_payload(body: &str) -> Result<String, ValidateError> {
    let payload: serde_json::Value = serde_json::from_str(body).map_err(ValidateError::Parse)?;
    let roster = validate_roster(&payload).map_err(ValidateError::Roster)?;

    let response = ValidateResponse {
        status: "ok",
        operators: roster.operators.len(),
        dropped_entries: roster.dropped_entries(),
        eligible_for_selection: roster.operators.len() >= SQUAD_SIZE,
        diagnostics: roster.diagnostics.iter().map(|d| d.to_string()).collect(),
    };
    serde_json::to_string_pretty(&response).map_err(ValidateError::Parse)
}
