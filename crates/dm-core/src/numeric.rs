use crate::DmError;

/// Floating point type used throughout system
pub type Real = f64;

/// Smallest value any physical denominator may take.
pub const EPSILON_DENOMINATOR: Real = 1e-6;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DmError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DmError::NonFinite { what, value: v })
    }
}

/// Floor a value to a strictly positive minimum.
///
/// NaN maps to the floor as well, so the result is always safe to divide by.
#[inline]
pub fn floor_positive(v: Real, min: Real) -> Real {
    debug_assert!(min > 0.0);
    if v.is_nan() { min } else { v.max(min) }
}

/// Replace NaN, infinities and negative values by zero.
///
/// Returns `None` when the value was already usable.
#[inline]
pub fn zero_if_invalid(v: Real) -> Option<Real> {
    if v.is_finite() && v >= 0.0 {
        None
    } else {
        Some(0.0)
    }
}

/// Clamp into `[min, max]`, sending NaN to `max`.
#[inline]
pub fn clamp_or_max(v: Real, min: Real, max: Real) -> Real {
    if v.is_nan() { max } else { v.clamp(min, max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn floor_positive_handles_zero_negative_and_nan() {
        assert_eq!(floor_positive(0.0, 1e-6), 1e-6);
        assert_eq!(floor_positive(-3.0, 1e-6), 1e-6);
        assert_eq!(floor_positive(Real::NAN, 1e-6), 1e-6);
        assert_eq!(floor_positive(2.5, 1e-6), 2.5);
    }

    #[test]
    fn zero_if_invalid_flags_bad_values() {
        assert_eq!(zero_if_invalid(1.0), None);
        assert_eq!(zero_if_invalid(0.0), None);
        assert_eq!(zero_if_invalid(-1.0), Some(0.0));
        assert_eq!(zero_if_invalid(Real::INFINITY), Some(0.0));
        assert_eq!(zero_if_invalid(Real::NAN), Some(0.0));
    }

    #[test]
    fn clamp_or_max_sends_nan_to_ceiling() {
        assert_eq!(clamp_or_max(Real::NAN, 0.0001, 1.0), 1.0);
        assert_eq!(clamp_or_max(Real::INFINITY, 0.0001, 1.0), 1.0);
        assert_eq!(clamp_or_max(0.0, 0.0001, 1.0), 0.0001);
        assert_eq!(clamp_or_max(0.3, 0.0001, 1.0), 0.3);
    }
}
