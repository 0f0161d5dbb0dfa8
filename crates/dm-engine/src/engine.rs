//! Stage orchestration.

use crate::constants::EngineConstants;
use crate::inputs::MixingInputs;
use crate::results::{CalculationResults, ChemistryLimits};
use crate::sanitize::sanitize;
use crate::{distance, flow, geometry, hydraulics, injection, mixer, momentum};
use dm_core::numeric::{EPSILON_DENOMINATOR, floor_positive};
use tracing::debug;

/// Evaluate with the default correlation constants.
pub fn evaluate(inputs: &MixingInputs) -> CalculationResults {
    evaluate_with(inputs, &EngineConstants::default())
}

/// Evaluate one input record.
///
/// Pure and total: the same record always yields the same results, and
/// every denominator is floored so no record divides by zero.
pub fn evaluate_with(raw: &MixingInputs, constants: &EngineConstants) -> CalculationResults {
    let sanitized = sanitize(raw);
    for adjustment in &sanitized.adjustments {
        debug!(%adjustment, "input adjusted");
    }
    let inputs = &sanitized.inputs;

    let geometry = geometry::resolve(
        inputs.conduit_type,
        inputs.conduit_shape,
        inputs.dimension_m,
        inputs.depth_m,
    );
    let flow = flow::characterize(inputs, &geometry);
    let injected = injection::blend(inputs, constants);
    let mixer = mixer::evaluate(inputs, &geometry, &flow, constants);
    let hydraulics = hydraulics::evaluate(inputs, &geometry, &flow, &mixer, constants);
    let target = distance::solve(inputs, &geometry, &flow, &mixer, constants);
    let jet = momentum::evaluate(inputs, &geometry, &flow, &injected, constants);

    debug!(
        mixer = %inputs.mixer_model,
        velocity = flow.velocity.value,
        reynolds = flow.reynolds,
        cov = mixer.cov,
        headloss_m = hydraulics.headloss.value,
        distance_m = target.distance.value,
        momentum_ratio = jet.ratio,
        "evaluated"
    );

    CalculationResults {
        hydraulic_diameter_m: geometry.hydraulic_diameter.value,
        wetted_area_m2: geometry.area.value,
        velocity_mps: flow.velocity.value,
        reynolds: flow.reynolds,
        dilution_ratio: flow.dilution_ratio,
        total_injection_flow_lph: injected.total_flow_lph,
        injected_density_kg_m3: injected.density.value,
        injected_viscosity_pa_s: injected.viscosity.value,
        viscosity_ratio: injected.viscosity.value
            / floor_positive(inputs.viscosity_pa_s, EPSILON_DENOMINATOR),
        mixer_model: inputs.mixer_model,
        pitch_ratio: raw.pitch_ratio,
        mixer_cov: mixer.cov,
        friction_factor: mixer.friction_factor,
        effective_mixing_length_m: mixer.mixing_length.value,
        headloss_m: hydraulics.headloss.value,
        headloss_kpa: hydraulics.pressure_drop_kpa(),
        mixing_intensity_per_s: hydraulics.mixing_intensity,
        mixing_distance_m: target.distance.value,
        mixing_time_s: target.time.value,
        cov_compliant: target.cov_compliant,
        time_compliant: target.time_compliant,
        momentum_ratio: jet.ratio,
        momentum_regime: jet.regime,
        chemistry: ChemistryLimits::default(),
    }
}
