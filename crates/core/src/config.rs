//! Engine configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::STANDARD_PLACEMENT;
use crate::error::Result;

/// How the protection line is built after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckLinePolicy {
    /// Walk unit steps from the king towards the checker for every kind of checker.
    /// Knight and pawn checks produce a line that need not contain the checker.
    #[default]
    RayWalk,
    /// Sliders use the walked line; knight and pawn checks only allow capturing
    /// the checker.
    CaptureOnlyForLeapers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub check_line: CheckLinePolicy,
    /// Drop the protection constraint whenever a move executes, before looking
    /// for a new check. When false the constraint stays until a later check
    /// overwrites it.
    pub clear_protection_each_ply: bool,
    /// Placement string the game starts from.
    pub starting_position: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            check_line: CheckLinePolicy::default(),
            clear_protection_each_ply: true,
            starting_position: STANDARD_PLACEMENT.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
