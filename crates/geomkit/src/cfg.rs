//! Shared numeric tolerance.
//!
//! Every approximate comparison in the kernel (orientation sign, parametric
//! intersection, closest-approach clamping, pivot checks) routes through this
//! module so that all predicates agree on what "zero" means. Exact equality
//! on the value types (`Eq`/`Hash`) deliberately bypasses it: bitwise
//! identity is for container semantics, tolerance is for geometry.

/// Margin of error for comparing `f64` values across the kernel.
pub const EPSILON: f64 = 1e-7;

/// Tolerance value for callers that need a margin other than [`EPSILON`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// `|x| <= eps`.
    #[inline]
    pub fn near_zero(&self, x: f64) -> bool {
        x.abs() <= self.eps
    }

    /// `|a - b| <= eps`.
    #[inline]
    pub fn near_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }
}
