//! Bulk velocity, Reynolds number and dilution ratio.

use crate::constants::{MIN_AREA_M2, MIN_INJECTION_FLOW_LPH};
use crate::geometry::Geometry;
use crate::sanitize::SanitizedInputs;
use dm_core::numeric::floor_positive;
use dm_core::units::{Velocity, VolumeRate, flow, m3ps, mps};

/// Bulk state of the carrier flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub volume_rate: VolumeRate,
    pub velocity: Velocity,
    pub reynolds: f64,
    /// Carrier flow over total injection flow (both L/h)
    pub dilution_ratio: f64,
}

pub fn characterize(inputs: &SanitizedInputs, geometry: &Geometry) -> FlowState {
    let q = flow::m3ph_to_m3ps(inputs.flow_rate_m3h);
    let area = floor_positive(geometry.area.value, MIN_AREA_M2);
    let velocity = q / area;

    // viscosity is already floored by sanitize
    let reynolds =
        inputs.density_kg_m3 * velocity * geometry.hydraulic_diameter.value / inputs.viscosity_pa_s;

    let injection = floor_positive(inputs.total_injection_flow_lph(), MIN_INJECTION_FLOW_LPH);
    let dilution_ratio = flow::m3ph_to_lph(inputs.flow_rate_m3h) / injection;

    FlowState {
        volume_rate: m3ps(q),
        velocity: mps(velocity),
        reynolds,
        dilution_ratio,
    }
}
