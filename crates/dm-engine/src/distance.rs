//! Distance and time needed to reach the target CoV.

use crate::constants::EngineConstants;
use crate::flow::FlowState;
use crate::geometry::Geometry;
use crate::inputs::ConduitType;
use crate::mixer::MixerPerformance;
use crate::sanitize::SanitizedInputs;
use dm_core::numeric::{EPSILON_DENOMINATOR, floor_positive};
use dm_core::units::{Length, Time, m, s};

/// Where and when the target uniformity is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixingDistance {
    pub distance: Length,
    pub time: Time,
    pub cov_compliant: bool,
    pub time_compliant: bool,
}

/// CoV decay rate per hydraulic diameter downstream of the mixer.
pub fn decay_coefficient(conduit_type: ConduitType, constants: &EngineConstants) -> f64 {
    match conduit_type {
        ConduitType::Pipe => constants.pipe_decay(),
        ConduitType::Channel => constants.channel_decay,
    }
}

/// Extend the mixer's effective length by exponential decay of the
/// remaining non-uniformity until `target_cov` is met.
pub fn solve(
    inputs: &SanitizedInputs,
    geometry: &Geometry,
    flow: &FlowState,
    mixer: &MixerPerformance,
    constants: &EngineConstants,
) -> MixingDistance {
    let target = inputs.target_cov;
    let lm = mixer.mixing_length.value;

    let distance = if mixer.cov <= target {
        lm
    } else {
        let decay = decay_coefficient(inputs.conduit_type, constants);
        let diameters = (mixer.cov / target).ln() / floor_positive(decay, EPSILON_DENOMINATOR);
        lm + diameters * geometry.hydraulic_diameter.value
    };

    let time = distance / floor_positive(flow.velocity.value, EPSILON_DENOMINATOR);

    MixingDistance {
        distance: m(distance),
        time: s(time),
        cov_compliant: mixer.cov <= target,
        time_compliant: time <= inputs.target_mixing_time_s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{MixerModel, MixingInputs};
    use crate::sanitize::sanitize;
    use crate::{flow, geometry, mixer};

    fn run(raw: MixingInputs) -> (MixerPerformance, MixingDistance) {
        let i = sanitize(&raw).inputs;
        let c = EngineConstants::default();
        let g = geometry::resolve(i.conduit_type, i.conduit_shape, i.dimension_m, i.depth_m);
        let f = flow::characterize(&i, &g);
        let mx = mixer::evaluate(&i, &g, &f, &c);
        (mx, solve(&i, &g, &f, &mx, &c))
    }

    fn reference() -> MixingInputs {
        MixingInputs {
            dimension_m: 0.8,
            available_length_m: 10.0,
            flow_rate_m3h: 1500.0,
            density_kg_m3: 1000.0,
            viscosity_pa_s: 0.001,
            chemical_flow_lph: 10.0,
            dilution_water_flow_lph: 200.0,
            target_mixing_time_s: 10.0,
            ..MixingInputs::default()
        }
    }

    #[test]
    fn unmixed_pipe_extends_by_decay() {
        let (_, d) = run(reference());
        assert!((d.distance.value - 32.595_228).abs() < 1e-5);
        assert!((d.time.value - 39.321_956).abs() < 1e-4);
        assert!(!d.cov_compliant);
        assert!(!d.time_compliant);
    }

    #[test]
    fn compliant_mixer_needs_only_its_own_length() {
        let (mx, d) = run(MixingInputs {
            mixer_model: MixerModel::KenicsKm,
            num_elements: 6,
            target_mixing_time_s: 60.0,
            ..reference()
        });
        assert!(mx.cov <= 0.05);
        assert_eq!(d.distance.value, mx.mixing_length.value);
        assert!(d.cov_compliant);
        assert!(d.time_compliant);
    }

    #[test]
    fn channel_decays_faster_than_pipe() {
        let c = EngineConstants::default();
        assert!(decay_coefficient(ConduitType::Channel, &c) > decay_coefficient(ConduitType::Pipe, &c));
    }

    #[test]
    fn stagnant_carrier_gives_finite_time() {
        let (_, d) = run(MixingInputs {
            flow_rate_m3h: 0.0,
            ..reference()
        });
        assert!(d.time.value.is_finite());
    }
}
