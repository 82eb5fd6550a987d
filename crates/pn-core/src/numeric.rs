//! Float helpers shared by the screening calculations.

use crate::PnError;

pub type Real = f64;

/// Absolute and relative tolerance for comparing computed quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    /// `a` and `b` agree within `abs`, or within `rel` of the larger magnitude.
    pub fn approx_eq(self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    tol.approx_eq(a, b)
}

/// Pass `v` through, or report which quantity went non-finite.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PnError> {
    v.is_finite()
        .then_some(v)
        .ok_or(PnError::NonFinite { what, value: v })
}

/// `Some(v)` when `v` is finite and strictly positive.
///
/// Absent or non-positive inputs mean "not evaluable", never zero.
pub fn positive(v: Real) -> Option<Real> {
    (v.is_finite() && v > 0.0).then_some(v)
}
