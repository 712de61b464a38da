//! Roster validation over raw parsed JSON. Entries with missing or unusable
//! required fields are dropped and reported as diagnostics rather than
//! aborting the whole load.

use std::fmt;

use serde_json::{Map, Value};

use crate::roster::operator::{Operator, DEFAULT_POTENTIAL};

pub const REQUIRED_FIELDS: [&str; 5] = ["id", "name", "elite", "level", "rarity"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// Parsed input was not a JSON array.
    Format,
    /// No entries survived filtering and validation.
    Empty,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "roster JSON must be an array of operator objects"),
            Self::Empty => write!(f, "no operators survived validation"),
        }
    }
}

impl std::error::Error for RosterError {}

/// One dropped-field record. `index` counts owned entries in input order
/// (entries excluded for `own: false` are not counted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiagnostic {
    pub operator: String,
    pub index: usize,
    pub field: &'static str,
}

impl fmt::Display for FieldDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry[{}] operator '{}': missing or invalid field '{}'",
            self.index, self.operator, self.field
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidatedRoster {
    pub operators: Vec<Operator>,
    pub diagnostics: Vec<FieldDiagnostic>,
}

impl ValidatedRoster {
    /// Number of distinct entries that were dropped. Diagnostics for one
    /// entry share an index and are pushed together, so consecutive dedup
    /// is enough.
    pub fn dropped_entries(&self) -> usize {
        let mut indices: Vec<usize> = self.diagnostics.iter().map(|d| d.index).collect();
        indices.dedup();
        indices.len()
    }
}

/// Filters and normalizes a parsed roster. Entries explicitly marked
/// `own: false` are excluded before anything is counted; surviving entries
/// must carry all of `id, name, elite, level, rarity` or are dropped with one
/// diagnostic per missing field. `own` and `potential` are back-filled with
/// defaults on the survivors.
pub fn validate_roster(payload: &Value) -> Result<ValidatedRoster, RosterError> {
    let entries = payload.as_array().ok_or(RosterError::Format)?;

    let mut roster = ValidatedRoster::default();
    let mut index = 0_usize;

    for entry in entries {
        let object = entry.as_object();

        // `own` only excludes when explicitly false; absent or non-bool keeps
        // the entry, mirroring the dataset's `own !== false` convention.
        if object
            .and_then(|obj| obj.get("own"))
            .and_then(Value::as_bool)
            == Some(false)
        {
            continue;
        }

        match validate_entry(object) {
            Ok(operator) => roster.operators.push(operator),
            Err(dropped) => {
                for field in dropped.missing {
                    roster.diagnostics.push(FieldDiagnostic {
                        operator: dropped.operator.clone(),
                        index,
                        field,
                    });
                }
            }
        }

        index += 1;
    }

    if roster.operators.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(roster)
}

struct DroppedEntry {
    operator: String,
    missing: Vec<&'static str>,
}

fn validate_entry(object: Option<&Map<String, Value>>) -> Result<Operator, DroppedEntry> {
    let id = object
        .and_then(|obj| obj.get("id"))
        .filter(|value| !value.is_null());
    let name = object.and_then(|obj| obj.get("name")).and_then(Value::as_str);
    let elite = object.and_then(|obj| obj.get("elite")).and_then(Value::as_u64);
    let level = object.and_then(|obj| obj.get("level")).and_then(Value::as_u64);
    let rarity = object.and_then(|obj| obj.get("rarity")).and_then(Value::as_u64);

    match (id, name, elite, level, rarity) {
        (Some(id), Some(name), Some(elite), Some(level), Some(rarity)) => {
            let obj = object.ok_or_else(|| DroppedEntry {
                operator: "unknown".to_string(),
                missing: REQUIRED_FIELDS.to_vec(),
            })?;
            Ok(Operator {
                id: id.clone(),
                name: name.to_string(),
                elite: elite as u8,
                level: level as u32,
                rarity: rarity as u8,
                own: obj.get("own").and_then(Value::as_bool).unwrap_or(true),
                potential: obj
                    .get("potential")
                    .and_then(Value::as_u64)
                    .map(|p| p as u8)
                    .unwrap_or(DEFAULT_POTENTIAL),
            })
        }
        (id, name, elite, level, rarity) => {
            let mut missing = Vec::new();
            let present = [
                id.is_some(),
                name.is_some(),
                elite.is_some(),
                level.is_some(),
                rarity.is_some(),
            ];
            for (field, present) in REQUIRED_FIELDS.iter().zip(present) {
                if !present {
                    missing.push(*field);
                }
            }
            Err(DroppedEntry {
                operator: name.unwrap_or("unknown").to_string(),
                missing,
            })
        }
    }
}
