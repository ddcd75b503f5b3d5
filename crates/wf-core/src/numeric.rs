use crate::WfError;

/// Degrees per radian; blade pitch, twist and angle of attack are carried in
/// degrees (airfoil-table convention), all other angles in radians.
pub const DEG_PER_RAD: f64 = 180.0 / std::f64::consts::PI;

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * DEG_PER_RAD
}

/// Absolute/relative tolerance pair for iterate and value comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}
