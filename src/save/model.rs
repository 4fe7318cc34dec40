use serde::{Deserialize, Serialize};

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveUpgrade {
    pub name: String,
    pub count: u32,
    pub cost: f64,
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveTech {
    pub name: String,
    pub unlocked: bool,
    pub cost: f64,
    pub effect: f64,
}

/// Persisted economy. Every field is required; loading replaces the whole
/// engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveData {
    pub version: u32,
    pub minerals: f64,
    pub energy: f64,
    pub dark_matter: f64,
    pub click_power: u64,
    pub upgrades: Vec<SaveUpgrade>,
    pub tech_tree: Vec<SaveTech>,
}
