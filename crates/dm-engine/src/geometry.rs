//! Cross-section area and hydraulic diameter of the conduit.

use crate::inputs::{ConduitShape, ConduitType};
use dm_core::units::{Area, Length, m, m2};
use std::f64::consts::PI;

/// Flow cross-section of the conduit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Wetted cross-sectional area
    pub area: Area,
    /// 4 · area / wetted perimeter
    pub hydraulic_diameter: Length,
}

/// Resolve the cross-section from sanitized dimensions (both >= 1 mm).
///
/// - Circular pipe: `d` is the diameter.
/// - Rectangular duct: `d × h`, all four sides wetted.
/// - Open channel (any shape): `d × h`, free surface not wetted.
pub fn resolve(
    conduit_type: ConduitType,
    conduit_shape: ConduitShape,
    dimension_m: f64,
    depth_m: f64,
) -> Geometry {
    let d = dimension_m;
    let h = depth_m;

    let (area, dh) = match (conduit_type, conduit_shape) {
        (ConduitType::Pipe, ConduitShape::Circular) => (PI * (d / 2.0).powi(2), d),
        (ConduitType::Pipe, ConduitShape::Rectangular) => (d * h, 2.0 * d * h / (d + h)),
        (ConduitType::Channel, _) => {
            let area = d * h;
            (area, 4.0 * area / (d + 2.0 * h))
        }
    };

    Geometry {
        area: m2(area),
        hydraulic_diameter: m(dh),
    }
}
