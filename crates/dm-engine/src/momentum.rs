//! Injection jet momentum ratio and penetration regime.

use crate::constants::{EngineConstants, MOMENTUM_RATIO_HIGH, MOMENTUM_RATIO_LOW};
use crate::flow::FlowState;
use crate::geometry::Geometry;
use crate::injection::InjectedStream;
use crate::sanitize::SanitizedInputs;
use dm_core::numeric::EPSILON_DENOMINATOR;
use dm_core::units::{Velocity, flow as units_flow, mps};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Jet penetration relative to the carrier flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MomentumRegime {
    /// Jet hugs the wall.
    Low,
    Intermediate,
    /// Jet impinges on the opposite wall.
    High,
}

impl MomentumRegime {
    /// Fixed thresholds: `< 0.16` Low, `> 0.24` High, otherwise Intermediate.
    pub fn classify(ratio: f64) -> Self {
        if ratio < MOMENTUM_RATIO_LOW {
            Self::Low
        } else if ratio > MOMENTUM_RATIO_HIGH {
            Self::High
        } else {
            Self::Intermediate
        }
    }
}

impl fmt::Display for MomentumRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JetMomentum {
    /// Exit velocity of one quill
    pub jet_velocity: Velocity,
    pub ratio: f64,
    pub regime: MomentumRegime,
}

pub fn evaluate(
    inputs: &SanitizedInputs,
    geometry: &Geometry,
    flow: &FlowState,
    injected: &InjectedStream,
    constants: &EngineConstants,
) -> JetMomentum {
    let per_quill = units_flow::lph_to_m3ps(injected.total_flow_lph)
        / f64::from(inputs.injection_type.quill_count());
    let bore = PI * constants.quill_radius_m.powi(2);
    let jet_velocity = per_quill / bore;

    let density_ratio = (injected.density.value / inputs.density_kg_m3).sqrt();
    let carrier = (flow.velocity.value * geometry.hydraulic_diameter.value).max(EPSILON_DENOMINATOR);
    let ratio =
        density_ratio * (jet_velocity * constants.momentum_reference_diameter_m / carrier);

    JetMomentum {
        jet_velocity: mps(jet_velocity),
        ratio,
        regime: MomentumRegime::classify(ratio),
    }
}
