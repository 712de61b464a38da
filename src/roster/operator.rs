use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_POTENTIAL: u8 = 6;

/// One roster entry. `id` is carried through untouched (the dataset uses both
/// numeric and string ids depending on the exporter), `name` is the display
/// key and is expected to be unique within a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: Value,
    pub name: String,
    pub elite: u8,
    pub level: u32,
    pub rarity: u8,
    #[serde(default = "default_own")]
    pub own: bool,
    #[serde(default = "default_potential")]
    pub potential: u8,
}

fn default_own() -> bool {
    true
}

fn default_potential() -> u8 {
    DEFAULT_POTENTIAL
}

impl Operator {
    /// True for an unpromoted operator still at level 1, the "fresh pull"
    /// state the ignore-unleveled filter removes.
    pub fn is_unleveled_base(&self) -> bool {
        self.elite == 0 && self.level == 1
    }
}
