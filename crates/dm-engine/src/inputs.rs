//! Caller-supplied input record for one evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed pipe or open channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConduitType {
    #[default]
    Pipe,
    Channel,
}

/// Cross-section shape of the conduit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConduitShape {
    #[default]
    Circular,
    Rectangular,
}

/// In-line mixer fitted downstream of the injection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MixerModel {
    /// No mixer: natural turbulent mixing along the available length.
    #[default]
    None,
    /// Kenics KM helical element mixer.
    KenicsKm,
    /// High-efficiency vortex mixer (tab inserts).
    Hev,
    /// Low-pressure-drop static tube mixer.
    Stm,
}

impl fmt::Display for MixerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::KenicsKm => write!(f, "Kenics KM"),
            Self::Hev => write!(f, "HEV"),
            Self::Stm => write!(f, "STM"),
        }
    }
}

/// Number of injection quills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjectionType {
    #[default]
    Single,
    /// Two opposed quills, each carrying half the injection flow.
    Twin,
}

impl InjectionType {
    pub fn quill_count(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Twin => 2,
        }
    }
}

/// Element pitch (length over diameter) of a helical mixer.
///
/// Carried through to the results but not used by the current correlations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PitchRatio {
    #[default]
    Standard,
    Compact,
}

impl PitchRatio {
    pub fn value(self) -> f64 {
        match self {
            Self::Standard => 1.5,
            Self::Compact => 1.0,
        }
    }
}

/// Full description of one dosing installation.
///
/// Absent numeric fields deserialize as zero except `depth_m` (0.6 m) and
/// `target_cov` (0.05). Nothing here is validated; see [`crate::sanitize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixingInputs {
    // Conduit
    pub conduit_type: ConduitType,
    pub conduit_shape: ConduitShape,
    /// Width, or diameter for circular pipes (m)
    pub dimension_m: f64,
    /// Depth of rectangular ducts and channels (m)
    pub depth_m: f64,
    /// Straight length available for mixing (m)
    pub available_length_m: f64,

    // Carrier
    pub flow_rate_m3h: f64,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,

    // Chemical stream
    pub chemical_flow_lph: f64,
    pub chemical_density_kg_m3: f64,
    pub chemical_viscosity_pa_s: f64,
    pub chemical_dose: f64,
    pub chemical_type: String,
    pub dilution_water_flow_lph: f64,
    /// Informational only
    pub water_temperature_c: f64,

    // Mixer
    pub mixer_model: MixerModel,
    pub num_elements: u32,
    pub injection_type: InjectionType,
    pub pitch_ratio: PitchRatio,

    // Targets
    pub target_cov: f64,
    pub target_mixing_time_s: f64,
}

impl Default for MixingInputs {
    fn default() -> Self {
        Self {
            conduit_type: ConduitType::default(),
            conduit_shape: ConduitShape::default(),
            dimension_m: 0.0,
            depth_m: 0.6,
            available_length_m: 0.0,
            flow_rate_m3h: 0.0,
            density_kg_m3: 0.0,
            viscosity_pa_s: 0.0,
            chemical_flow_lph: 0.0,
            chemical_density_kg_m3: 0.0,
            chemical_viscosity_pa_s: 0.0,
            chemical_dose: 0.0,
            chemical_type: String::new(),
            dilution_water_flow_lph: 0.0,
            water_temperature_c: 0.0,
            mixer_model: MixerModel::default(),
            num_elements: 0,
            injection_type: InjectionType::default(),
            pitch_ratio: PitchRatio::default(),
            target_cov: 0.05,
            target_mixing_time_s: 0.0,
        }
    }
}
