//! SI quantities carried between the engine stages.
//!
//! Inputs arrive in plant units (m³/h, L/h); [`flow`] converts them before
//! they become quantities.

pub use uom::si::f64::{
    Area, DynamicViscosity as DynVisc, Length, MassDensity as Density, Pressure, Time, Velocity,
    VolumeRate,
};

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Conversions between the plant units used on dosing data sheets and SI.
pub mod flow {
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const LITRES_PER_M3: f64 = 1000.0;

    /// m³/h → m³/s
    #[inline]
    pub fn m3ph_to_m3ps(v: f64) -> f64 {
        v / SECONDS_PER_HOUR
    }

    /// L/h → m³/s
    #[inline]
    pub fn lph_to_m3ps(v: f64) -> f64 {
        v / LITRES_PER_M3 / SECONDS_PER_HOUR
    }

    /// m³/h → L/h
    #[inline]
    pub fn m3ph_to_lph(v: f64) -> f64 {
        v * LITRES_PER_M3
    }
}

pub mod constants {
    /// Gravity as used by the hydraulic correlations (rounded, not standard g0).
    pub const G_MPS2: f64 = 9.81;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_quantities_carry_si_units() {
        use uom::si::velocity::meter_per_second;
        let q = m3ps(flow::m3ph_to_m3ps(1800.0));
        let v: Velocity = q / m2(0.25);
        assert!((v.get::<meter_per_second>() - 2.0).abs() < 1e-12);

        let nu = pa_s(0.001) / kg_per_m3(1000.0);
        assert!((nu.value - 1e-6).abs() < 1e-18);
        assert_eq!(s(10.0).value * mps(1.5).value, m(15.0).value);
    }

    #[test]
    fn flow_conversions() {
        assert!((flow::m3ph_to_m3ps(3600.0) - 1.0).abs() < 1e-12);
        assert!((flow::lph_to_m3ps(3_600_000.0) - 1.0).abs() < 1e-12);
        assert!((flow::m3ph_to_lph(1.5) - 1500.0).abs() < 1e-12);
    }

    #[test]
    fn quantities_keep_si_values() {
        use uom::si::length::millimeter;
        assert!((m(0.0125).get::<millimeter>() - 12.5).abs() < 1e-9);
        assert_eq!(pa(85.0).value, 85.0);
    }
}
