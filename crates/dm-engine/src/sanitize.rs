//! One-shot normalization of the input record.
//!
//! Every numeric field is made usable here so the stages can stay free of
//! ad-hoc guards on raw inputs. Invalid values (NaN, infinite, negative)
//! become zero, huge ones are capped, then physical floors apply. Nothing
//! is ever rejected.

use crate::constants::{COV_MIN, MAX_INPUT_MAGNITUDE, MIN_DIMENSION_M};
use crate::inputs::{ConduitShape, ConduitType, InjectionType, MixerModel, MixingInputs};
use dm_core::numeric::{EPSILON_DENOMINATOR, zero_if_invalid};
use std::fmt;

/// A change made to one input field during sanitization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Value was NaN, infinite or negative and was replaced by zero.
    Invalid { field: &'static str, value: f64 },
    /// Value was raised to a physical floor.
    Floored {
        field: &'static str,
        value: f64,
        floor: f64,
    },
    /// Value was lowered to [`MAX_INPUT_MAGNITUDE`].
    Capped {
        field: &'static str,
        value: f64,
        ceiling: f64,
    },
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { field, value } => {
                write!(f, "{field}: invalid value {value} treated as 0")
            }
            Self::Floored {
                field,
                value,
                floor,
            } => write!(f, "{field}: {value} raised to {floor}"),
            Self::Capped {
                field,
                value,
                ceiling,
            } => write!(f, "{field}: {value} lowered to {ceiling}"),
        }
    }
}

/// Input snapshot consumed by all stages.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedInputs {
    pub conduit_type: ConduitType,
    pub conduit_shape: ConduitShape,
    /// >= 1 mm
    pub dimension_m: f64,
    /// >= 1 mm
    pub depth_m: f64,
    pub available_length_m: f64,
    pub flow_rate_m3h: f64,
    /// > 0
    pub density_kg_m3: f64,
    /// > 0
    pub viscosity_pa_s: f64,
    pub chemical_flow_lph: f64,
    pub chemical_density_kg_m3: f64,
    /// > 0
    pub chemical_viscosity_pa_s: f64,
    pub dilution_water_flow_lph: f64,
    pub mixer_model: MixerModel,
    pub num_elements: u32,
    pub injection_type: InjectionType,
    /// >= [`COV_MIN`]
    pub target_cov: f64,
    pub target_mixing_time_s: f64,
}

impl SanitizedInputs {
    /// Chemical plus dilution water flow (L/h).
    pub fn total_injection_flow_lph(&self) -> f64 {
        self.chemical_flow_lph + self.dilution_water_flow_lph
    }
}

/// Sanitized inputs together with the list of changes made.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    pub inputs: SanitizedInputs,
    pub adjustments: Vec<Adjustment>,
}

struct Normalizer {
    adjustments: Vec<Adjustment>,
}

impl Normalizer {
    fn valid(&mut self, field: &'static str, value: f64) -> f64 {
        if let Some(zero) = zero_if_invalid(value) {
            self.adjustments.push(Adjustment::Invalid { field, value });
            zero
        } else if value > MAX_INPUT_MAGNITUDE {
            self.adjustments.push(Adjustment::Capped {
                field,
                value,
                ceiling: MAX_INPUT_MAGNITUDE,
            });
            MAX_INPUT_MAGNITUDE
        } else {
            value
        }
    }

    fn floored(&mut self, field: &'static str, value: f64, floor: f64) -> f64 {
        let value = self.valid(field, value);
        if value < floor {
            self.adjustments.push(Adjustment::Floored {
                field,
                value,
                floor,
            });
            floor
        } else {
            value
        }
    }
}

/// Normalize a raw input record.
pub fn sanitize(raw: &MixingInputs) -> Sanitized {
    let mut n = Normalizer {
        adjustments: Vec::new(),
    };

    let inputs = SanitizedInputs {
        conduit_type: raw.conduit_type,
        conduit_shape: raw.conduit_shape,
        dimension_m: n.floored("dimension_m", raw.dimension_m, MIN_DIMENSION_M),
        depth_m: n.floored("depth_m", raw.depth_m, MIN_DIMENSION_M),
        available_length_m: n.valid("available_length_m", raw.available_length_m),
        flow_rate_m3h: n.valid("flow_rate_m3h", raw.flow_rate_m3h),
        density_kg_m3: n.floored("density_kg_m3", raw.density_kg_m3, EPSILON_DENOMINATOR),
        viscosity_pa_s: n.floored("viscosity_pa_s", raw.viscosity_pa_s, EPSILON_DENOMINATOR),
        chemical_flow_lph: n.valid("chemical_flow_lph", raw.chemical_flow_lph),
        chemical_density_kg_m3: n.valid("chemical_density_kg_m3", raw.chemical_density_kg_m3),
        chemical_viscosity_pa_s: n.floored(
            "chemical_viscosity_pa_s",
            raw.chemical_viscosity_pa_s,
            EPSILON_DENOMINATOR,
        ),
        dilution_water_flow_lph: n.valid("dilution_water_flow_lph", raw.dilution_water_flow_lph),
        mixer_model: raw.mixer_model,
        num_elements: raw.num_elements,
        injection_type: raw.injection_type,
        target_cov: n.floored("target_cov", raw.target_cov, COV_MIN),
        target_mixing_time_s: n.valid("target_mixing_time_s", raw.target_mixing_time_s),
    };

    Sanitized {
        inputs,
        adjustments: n.adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MixingInputs {
        MixingInputs {
            dimension_m: 0.8,
            available_length_m: 10.0,
            flow_rate_m3h: 1500.0,
            density_kg_m3: 1000.0,
            viscosity_pa_s: 0.001,
            chemical_flow_lph: 10.0,
            chemical_density_kg_m3: 1450.0,
            chemical_viscosity_pa_s: 0.015,
            dilution_water_flow_lph: 200.0,
            target_mixing_time_s: 10.0,
            ..MixingInputs::default()
        }
    }

    #[test]
    fn clean_record_passes_through_untouched() {
        let out = sanitize(&reference());
        assert!(out.adjustments.is_empty(), "{:?}", out.adjustments);
        assert_eq!(out.inputs.dimension_m, 0.8);
        assert_eq!(out.inputs.total_injection_flow_lph(), 210.0);
    }

    #[test]
    fn invalid_numbers_become_zero() {
        let raw = MixingInputs {
            flow_rate_m3h: f64::NAN,
            chemical_flow_lph: -5.0,
            available_length_m: f64::INFINITY,
            ..reference()
        };
        let out = sanitize(&raw);
        assert_eq!(out.inputs.flow_rate_m3h, 0.0);
        assert_eq!(out.inputs.chemical_flow_lph, 0.0);
        assert_eq!(out.inputs.available_length_m, 0.0);
        assert_eq!(
            out.adjustments
                .iter()
                .filter(|a| matches!(a, Adjustment::Invalid { .. }))
                .count(),
            3
        );
    }

    #[test]
    fn dimensions_are_floored_to_one_millimetre() {
        let raw = MixingInputs {
            dimension_m: 0.0,
            depth_m: -1.0,
            ..reference()
        };
        let out = sanitize(&raw);
        assert_eq!(out.inputs.dimension_m, MIN_DIMENSION_M);
        assert_eq!(out.inputs.depth_m, MIN_DIMENSION_M);
        assert!(out.adjustments.contains(&Adjustment::Floored {
            field: "dimension_m",
            value: 0.0,
            floor: MIN_DIMENSION_M,
        }));
    }

    #[test]
    fn zero_target_cov_is_raised_to_cov_floor() {
        let raw = MixingInputs {
            target_cov: 0.0,
            ..reference()
        };
        assert_eq!(sanitize(&raw).inputs.target_cov, COV_MIN);
    }

    #[test]
    fn huge_values_are_capped() {
        let raw = MixingInputs {
            flow_rate_m3h: 1e300,
            chemical_flow_lph: f64::MAX,
            ..reference()
        };
        let out = sanitize(&raw);
        assert_eq!(out.inputs.flow_rate_m3h, MAX_INPUT_MAGNITUDE);
        assert_eq!(out.inputs.chemical_flow_lph, MAX_INPUT_MAGNITUDE);
        assert!(out.adjustments.contains(&Adjustment::Capped {
            field: "flow_rate_m3h",
            value: 1e300,
            ceiling: MAX_INPUT_MAGNITUDE,
        }));
        assert_eq!(out.adjustments.len(), 2);
    }

    #[test]
    fn adjustment_display_names_field() {
        let adj = Adjustment::Invalid {
            field: "flow_rate_m3h",
            value: -1.0,
        };
        assert!(adj.to_string().contains("flow_rate_m3h"));
    }
}
