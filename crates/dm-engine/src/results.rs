//! Derived performance record returned by one evaluation.

use crate::inputs::{MixerModel, PitchRatio};
use crate::momentum::MomentumRegime;
use dm_core::numeric::ensure_finite;
use dm_core::DmResult;
use serde::{Deserialize, Serialize};

/// Dissolution/saturation limits.
///
/// Fixed placeholders until chemistry modelling is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemistryLimits {
    /// Fraction of the saturation concentration reached at the injection point
    pub saturation_limit: f64,
    /// Time for the injected chemical to dissolve fully (s)
    pub dissolution_time_s: f64,
}

impl Default for ChemistryLimits {
    fn default() -> Self {
        Self {
            saturation_limit: 1.0,
            dissolution_time_s: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    // Conduit
    pub hydraulic_diameter_m: f64,
    pub wetted_area_m2: f64,

    // Carrier flow
    pub velocity_mps: f64,
    pub reynolds: f64,
    pub dilution_ratio: f64,

    // Injected stream
    pub total_injection_flow_lph: f64,
    pub injected_density_kg_m3: f64,
    pub injected_viscosity_pa_s: f64,
    /// Injected over carrier viscosity
    pub viscosity_ratio: f64,

    // Mixer
    pub mixer_model: MixerModel,
    pub pitch_ratio: PitchRatio,
    pub mixer_cov: f64,
    pub friction_factor: f64,
    pub effective_mixing_length_m: f64,

    // Hydraulics
    pub headloss_m: f64,
    pub headloss_kpa: f64,
    /// G-value (1/s)
    pub mixing_intensity_per_s: f64,

    // Targets
    pub mixing_distance_m: f64,
    pub mixing_time_s: f64,
    pub cov_compliant: bool,
    pub time_compliant: bool,

    // Injection jet
    pub momentum_ratio: f64,
    pub momentum_regime: MomentumRegime,

    pub chemistry: ChemistryLimits,
}

impl CalculationResults {
    /// Fails on the first non-finite numeric field.
    pub fn ensure_finite(&self) -> DmResult<()> {
        let fields = [
            (self.hydraulic_diameter_m, "hydraulic_diameter_m"),
            (self.wetted_area_m2, "wetted_area_m2"),
            (self.velocity_mps, "velocity_mps"),
            (self.reynolds, "reynolds"),
            (self.dilution_ratio, "dilution_ratio"),
            (self.total_injection_flow_lph, "total_injection_flow_lph"),
            (self.injected_density_kg_m3, "injected_density_kg_m3"),
            (self.injected_viscosity_pa_s, "injected_viscosity_pa_s"),
            (self.viscosity_ratio, "viscosity_ratio"),
            (self.mixer_cov, "mixer_cov"),
            (self.friction_factor, "friction_factor"),
            (self.effective_mixing_length_m, "effective_mixing_length_m"),
            (self.headloss_m, "headloss_m"),
            (self.headloss_kpa, "headloss_kpa"),
            (self.mixing_intensity_per_s, "mixing_intensity_per_s"),
            (self.mixing_distance_m, "mixing_distance_m"),
            (self.mixing_time_s, "mixing_time_s"),
            (self.momentum_ratio, "momentum_ratio"),
        ];
        for (value, what) in fields {
            ensure_finite(value, what)?;
        }
        Ok(())
    }
}
