//! Headloss across the mixing section and the resulting mixing intensity.

use crate::constants::{EngineConstants, MIN_DISSIPATION_VOLUME};
use crate::flow::FlowState;
use crate::geometry::Geometry;
use crate::mixer::MixerPerformance;
use crate::sanitize::SanitizedInputs;
use dm_core::numeric::{EPSILON_DENOMINATOR, floor_positive};
use dm_core::units::{Length, Pressure, m, pa};
use uom::si::pressure::kilopascal;

/// Energy dissipated by the mixing section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicPerformance {
    /// Headloss as a column of carrier fluid
    pub headloss: Length,
    pub pressure_drop: Pressure,
    /// Root-mean-square velocity gradient, G (1/s)
    pub mixing_intensity: f64,
}

impl HydraulicPerformance {
    pub fn pressure_drop_kpa(&self) -> f64 {
        self.pressure_drop.get::<kilopascal>()
    }
}

/// Darcy–Weisbach headloss with the mixer's friction factor and effective
/// length, and `G = √(P / (μ·V))` over the mixing volume `V = A·Lm`.
pub fn evaluate(
    inputs: &SanitizedInputs,
    geometry: &Geometry,
    flow: &FlowState,
    mixer: &MixerPerformance,
    constants: &EngineConstants,
) -> HydraulicPerformance {
    let g = constants.gravity_mps2;
    let v = flow.velocity.value;
    let dh = floor_positive(geometry.hydraulic_diameter.value, EPSILON_DENOMINATOR);
    let lm = mixer.mixing_length.value;

    let headloss = mixer.friction_factor * lm * v * v / (2.0 * g * dh);
    let dp_pa = headloss * inputs.density_kg_m3 * g;

    let power = dp_pa * flow.volume_rate.value;
    let dissipation_volume = (inputs.viscosity_pa_s * geometry.area.value * lm)
        .max(MIN_DISSIPATION_VOLUME);
    let mixing_intensity = (power / dissipation_volume).sqrt();

    HydraulicPerformance {
        headloss: m(headloss),
        pressure_drop: pa(dp_pa),
        mixing_intensity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{MixerModel, MixingInputs};
    use crate::sanitize::sanitize;
    use crate::{flow, geometry, mixer};

    fn run(raw: MixingInputs) -> HydraulicPerformance {
        let i = sanitize(&raw).inputs;
        let c = EngineConstants::default();
        let g = geometry::resolve(i.conduit_type, i.conduit_shape, i.dimension_m, i.depth_m);
        let f = flow::characterize(&i, &g);
        let mx = mixer::evaluate(&i, &g, &f, &c);
        evaluate(&i, &g, &f, &mx, &c)
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
            ..MixingInputs::default()
        }
    }

    #[test]
    fn natural_mixing_headloss() {
        let h = run(reference());
        assert!((h.headloss.value - 0.008_755_46).abs() < 1e-7);
        assert!((h.pressure_drop_kpa() - 0.085_891).abs() < 1e-5);
        assert!((h.mixing_intensity - 84.379).abs() < 1e-2);
    }

    #[test]
    fn kenics_headloss_scales_with_elements() {
        let h6 = run(MixingInputs {
            mixer_model: MixerModel::KenicsKm,
            num_elements: 6,
            ..reference()
        });
        let h12 = run(MixingInputs {
            mixer_model: MixerModel::KenicsKm,
            num_elements: 12,
            ..reference()
        });
        assert!((h12.headloss.value / h6.headloss.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn no_mixing_length_means_no_loss_and_finite_intensity() {
        let h = run(MixingInputs {
            mixer_model: MixerModel::Hev,
            num_elements: 0,
            ..reference()
        });
        assert_eq!(h.headloss.value, 0.0);
        assert_eq!(h.mixing_intensity, 0.0);
    }
}
