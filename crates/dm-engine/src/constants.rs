//! Fixed bounds and tunable correlation constants.

use serde::{Deserialize, Serialize};

/// Lower bound of the reported mixer CoV.
pub const COV_MIN: f64 = 1e-4;
/// Upper bound of the reported mixer CoV (fully segregated).
pub const COV_MAX: f64 = 1.0;

/// Smallest conduit width, diameter or depth (m).
pub const MIN_DIMENSION_M: f64 = 1e-3;
/// Smallest cross-sectional area used when dividing (m²).
pub const MIN_AREA_M2: f64 = 1e-6;
/// Smallest total injection flow used when dividing (L/h).
pub const MIN_INJECTION_FLOW_LPH: f64 = 1.0;
/// Floor for the viscosity·volume product of the G-value.
pub const MIN_DISSIPATION_VOLUME: f64 = 1e-9;
/// Ceiling of every numeric input, in its own unit.
///
/// Far above any plant value, and low enough that the squared velocity
/// through the smallest floored area stays finite in every stage.
pub const MAX_INPUT_MAGNITUDE: f64 = 1e9;

/// Momentum ratio below which the jet under-penetrates.
pub const MOMENTUM_RATIO_LOW: f64 = 0.16;
/// Momentum ratio above which the jet over-penetrates.
pub const MOMENTUM_RATIO_HIGH: f64 = 0.24;

/// Tunable constants of the natural-mixing and jet correlations.
///
/// The defaults are the published values the correlations were fitted with.
/// None of them has a stated derivation, so they are kept overridable from
/// scenario files for review rather than baked into the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConstants {
    /// Friction factor assumed for an open conduit without a mixer.
    pub natural_friction_factor: f64,
    /// Decay factor of the natural-mixing CoV exponential.
    pub natural_decay_factor: f64,
    /// Prefactor of the natural-mixing CoV correlation.
    pub natural_cov_prefactor: f64,
    /// CoV decay coefficient downstream of the mixer in open channels.
    pub channel_decay: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity_mps2: f64,
    /// Density of dilution water (kg/m³).
    pub water_density_kg_m3: f64,
    /// Viscosity of dilution water (Pa·s).
    pub water_viscosity_pa_s: f64,
    /// Bore radius of the injection quill (m).
    pub quill_radius_m: f64,
    /// Jet reference diameter of the momentum ratio (m).
    pub momentum_reference_diameter_m: f64,
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            natural_friction_factor: 0.02,
            natural_decay_factor: 0.75,
            natural_cov_prefactor: 2.0,
            channel_decay: 0.6,
            gravity_mps2: dm_core::constants::G_MPS2,
            water_density_kg_m3: 1000.0,
            water_viscosity_pa_s: 0.001,
            quill_radius_m: 0.0125,
            momentum_reference_diameter_m: 0.025,
        }
    }
}

impl EngineConstants {
    /// Decay coefficient of CoV per hydraulic diameter in a closed pipe.
    pub fn pipe_decay(&self) -> f64 {
        self.natural_decay_factor * self.natural_friction_factor.sqrt()
    }
}
