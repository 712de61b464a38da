//! Copilot plan serialization. `build_plan` is pure: the same selection and
//! timestamp string always produce the same document. Field order in the
//! emitted JSON follows struct declaration order.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::engine::SelectedOperator;

pub const STAGE_NAME: &str = "1-7";
pub const MINIMUM_REQUIRED: &str = "v4.0.0";
pub const PLAN_TITLE: &str = "随机抽取干员配置";
pub const PLAN_VERSION: u32 = 3;
pub const PLAN_DIFFICULTY: u32 = 3;
pub const DEFAULT_EXPORT_PREFIX: &str = "arknights_selection";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotPlan {
    pub stage_name: String,
    pub minimum_required: String,
    pub doc: PlanDoc,
    pub opers: Vec<PlanOperator>,
    pub groups: Vec<serde_json::Value>,
    pub actions: Vec<serde_json::Value>,
    pub version: u32,
    pub difficulty: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDoc {
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOperator {
    pub name: String,
    pub skill: u8,
    pub requirements: OperatorRequirements,
}

/// Serializes as `{}`. The copilot format reserves this object for elite and
/// level constraints this tool never emits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorRequirements {}

#[derive(Debug)]
pub enum ExportError {
    Serialize(serde_json::Error),
    Write(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize plan: {err}"),
            Self::Write(err) => write!(f, "failed to write plan file: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Builds the fixed-shape copilot document for a selection. `generated_at` is
/// caller-supplied so the serializer stays pure.
pub fn build_plan(selection: &[SelectedOperator], generated_at: &str) -> CopilotPlan {
    CopilotPlan {
        stage_name: STAGE_NAME.to_string(),
        minimum_required: MINIMUM_REQUIRED.to_string(),
        doc: PlanDoc {
            title: PLAN_TITLE.to_string(),
            details: format!(
                "由工具于 {generated_at} 随机生成，共{}名干员",
                selection.len()
            ),
        },
        opers: selection
            .iter()
            .map(|selected| PlanOperator {
                name: selected.operator.name.clone(),
                skill: selected.skill,
                requirements: OperatorRequirements::default(),
            })
            .collect(),
        groups: Vec::new(),
        actions: Vec::new(),
        version: PLAN_VERSION,
        difficulty: PLAN_DIFFICULTY,
    }
}

/// `<prefix>_<ISO-date>.json`.
pub fn export_filename(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{prefix}_{}.json", date.format("%Y-%m-%d"))
}

/// Today's export file name with the default prefix.
pub fn default_export_filename() -> String {
    export_filename(DEFAULT_EXPORT_PREFIX, Utc::now().date_naive())
}

/// Human-readable generation timestamp for the plan details line.
pub fn generation_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Serialize and persist a plan.
pub fn write_plan(path: &Path, plan: &CopilotPlan) -> Result<(), ExportError> {
    let serialized = serde_json::to_string_pretty(plan).map_err(ExportError::Serialize)?;
    fs::write(path, serialized).map_err(ExportError::Write)
}
