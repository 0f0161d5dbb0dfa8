//! Blend of chemical and dilution water into one injected stream.

use crate::constants::EngineConstants;
use crate::sanitize::SanitizedInputs;
use dm_core::units::{Density, DynVisc, kg_per_m3, pa_s};

/// Combined chemical + dilution water stream leaving the quill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectedStream {
    /// Total injection flow (L/h)
    pub total_flow_lph: f64,
    pub density: Density,
    pub viscosity: DynVisc,
}

/// Blend the streams.
///
/// Density is the volume-flow weighted mean. Viscosity uses the logarithmic
/// (Arrhenius) rule, a flow-weighted mean of `ln μ`. With no injection flow
/// at all the stream is the neat chemical.
pub fn blend(inputs: &SanitizedInputs, constants: &EngineConstants) -> InjectedStream {
    let qc = inputs.chemical_flow_lph;
    let qw = inputs.dilution_water_flow_lph;
    let total = qc + qw;

    if total <= 0.0 {
        return InjectedStream {
            total_flow_lph: 0.0,
            density: kg_per_m3(inputs.chemical_density_kg_m3),
            viscosity: pa_s(inputs.chemical_viscosity_pa_s),
        };
    }

    let density = (qc * inputs.chemical_density_kg_m3 + qw * constants.water_density_kg_m3) / total;

    let ln_mu = (qc * inputs.chemical_viscosity_pa_s.ln()
        + qw * constants.water_viscosity_pa_s.ln())
        / total;

    InjectedStream {
        total_flow_lph: total,
        density: kg_per_m3(density),
        viscosity: pa_s(ln_mu.exp()),
    }
}
