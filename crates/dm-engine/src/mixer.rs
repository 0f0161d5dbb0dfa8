//! Empirical CoV, friction and mixing-length correlations per mixer kind.
//!
//! Static mixers follow manufacturer power-law fits
//! `CoV = k · Re^a · n^b` with a constant friction factor and a mixing length
//! proportional to the element count. Without a mixer, CoV decays
//! exponentially with the available straight length in hydraulic diameters.

use crate::constants::{COV_MAX, COV_MIN, EngineConstants};
use crate::flow::FlowState;
use crate::geometry::Geometry;
use crate::inputs::{InjectionType, MixerModel};
use crate::sanitize::SanitizedInputs;
use dm_core::numeric::{EPSILON_DENOMINATOR, clamp_or_max, floor_positive};
use dm_core::units::{Length, m};

/// Coefficient set of one mixer kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correlation {
    /// `CoV = coefficient · Re^reynolds_exponent · n^element_exponent`,
    /// mixing length `length_per_element · n · Dh`.
    PowerLaw {
        coefficient: f64,
        reynolds_exponent: f64,
        element_exponent: f64,
        friction_factor: f64,
        length_per_element: f64,
    },
    /// `CoV = prefactor · √α · exp(−decay_factor · √f · L/Dh)`,
    /// mixing length is the available length.
    Natural {
        prefactor: f64,
        decay_factor: f64,
        friction_factor: f64,
    },
}

impl MixerModel {
    /// Coefficients for this mixer kind and injection arrangement.
    pub fn correlation(self, injection: InjectionType, constants: &EngineConstants) -> Correlation {
        match self {
            MixerModel::KenicsKm => Correlation::PowerLaw {
                coefficient: match injection {
                    InjectionType::Single => 0.96,
                    InjectionType::Twin => 0.38,
                },
                reynolds_exponent: -0.1,
                element_exponent: -1.9,
                friction_factor: 1.8,
                length_per_element: 1.5,
            },
            MixerModel::Hev => Correlation::PowerLaw {
                coefficient: 31.5,
                reynolds_exponent: -0.2,
                element_exponent: -1.7,
                friction_factor: 0.6,
                length_per_element: 1.0,
            },
            MixerModel::Stm => Correlation::PowerLaw {
                coefficient: 0.29,
                reynolds_exponent: -0.2,
                element_exponent: -0.6,
                friction_factor: 4.15,
                length_per_element: 0.8,
            },
            MixerModel::None => Correlation::Natural {
                prefactor: constants.natural_cov_prefactor,
                decay_factor: constants.natural_decay_factor,
                friction_factor: constants.natural_friction_factor,
            },
        }
    }
}

/// Mixer outcome feeding the hydraulic and distance stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerPerformance {
    /// Clamped to `[COV_MIN, COV_MAX]`
    pub cov: f64,
    pub friction_factor: f64,
    pub mixing_length: Length,
}

pub fn evaluate(
    inputs: &SanitizedInputs,
    geometry: &Geometry,
    flow: &FlowState,
    constants: &EngineConstants,
) -> MixerPerformance {
    let dh = geometry.hydraulic_diameter.value;
    let correlation = inputs
        .mixer_model
        .correlation(inputs.injection_type, constants);

    let (cov, friction_factor, length) = match correlation {
        Correlation::PowerLaw {
            coefficient,
            reynolds_exponent,
            element_exponent,
            friction_factor,
            length_per_element,
        } => {
            let n = f64::from(inputs.num_elements);
            let cov = coefficient
                * flow.reynolds.powf(reynolds_exponent)
                * n.powf(element_exponent);
            (cov, friction_factor, length_per_element * n * dh)
        }
        Correlation::Natural {
            prefactor,
            decay_factor,
            friction_factor,
        } => {
            let l = inputs.available_length_m;
            let diameters = l / floor_positive(dh, EPSILON_DENOMINATOR);
            let cov = prefactor
                * flow.dilution_ratio.sqrt()
                * (-decay_factor * friction_factor.sqrt() * diameters).exp();
            (cov, friction_factor, l)
        }
    };

    MixerPerformance {
        cov: clamp_or_max(cov, COV_MIN, COV_MAX),
        friction_factor,
        mixing_length: m(length),
    }
}
