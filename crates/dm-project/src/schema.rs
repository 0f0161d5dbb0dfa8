//! Scenario file schema.

use dm_engine::{EngineConstants, MixingInputs};
use serde::{Deserialize, Serialize};

/// A file of dosing scenarios sharing one set of correlation constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Absent in hand-written files, which then migrate from version 0
    #[serde(default)]
    pub version: u32,
    pub name: String,
    /// Overrides applied to every scenario without its own `constants`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<EngineConstants>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub inputs: MixingInputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<EngineConstants>,
}

impl Project {
    pub fn scenario(&self, id: &str) -> Option<&ScenarioDef> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Constants in force for `scenario`: its own, else the file's, else defaults.
    pub fn constants_for(&self, scenario: &ScenarioDef) -> EngineConstants {
        scenario
            .constants
            .or(self.constants)
            .unwrap_or_default()
    }
}
