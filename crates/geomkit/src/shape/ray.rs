//! Parametrized half-lines over a bounded segment.
//!
//! A `Ray` is an origin plus an offset displacement; `at(t)` evaluates the
//! parametrized point for any real `t`, while the distance queries clamp to
//! the bounded `[0, 1]` extent. Composition, not inheritance: a `Ray` is not
//! a `Line`, it converts via [`Ray::to_line`] when segment semantics are
//! needed.

use tracing::trace;

use crate::cfg::Tolerance;
use crate::error::{GeomError, Result};
use crate::shape::Line;
use crate::space::{Point, Vector};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ray {
    origin: Point,
    offset: Vector,
}

impl Ray {
    /// Builds a ray from an origin and a displacement. The offset must not
    /// be within tolerance of zero: its squared norm is the divisor of every
    /// closest-approach projection.
    pub fn from_offset(origin: Point, offset: Vector) -> Result<Self> {
        if origin.rank() != offset.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: origin.rank(),
                actual: offset.rank(),
            });
        }
        if Tolerance::default().near_zero(offset.norm_sq()) {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self { origin, offset })
    }

    /// Builds a ray spanning two distinct points.
    pub fn between(origin: Point, terminus: Point) -> Result<Self> {
        let offset = terminus.subtract(&origin)?.to_vector();
        Self::from_offset(origin, offset)
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn offset(&self) -> &Vector {
        &self.offset
    }

    pub fn terminus(&self) -> Point {
        self.at(1.0)
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.origin.rank()
    }

    /// The bounded segment covered by `t` in `[0, 1]`.
    pub fn to_line(&self) -> Line {
        Line::new_unchecked(self.origin.clone(), self.terminus())
    }

    /// Evaluates `origin + t * offset` for any real `t` (unbounded).
    pub fn at(&self, t: f64) -> Point {
        Point::from_dvector(self.origin.raw() + self.offset.raw() * t)
    }

    /// Parametric position on the bounded segment nearest to the point:
    /// `(point - origin) . offset / (offset . offset)`, clamped to `[0, 1]`
    /// with tolerance at the clamp boundaries.
    pub fn closest_approach(&self, point: &Point) -> Result<f64> {
        self.ensure_same_rank(point)?;
        Ok(self.closest_approach_unchecked(point))
    }

    fn closest_approach_unchecked(&self, point: &Point) -> f64 {
        let tol = Tolerance::default();
        let displacement = point.raw() - self.origin.raw();
        let t = displacement.dot(self.offset.raw()) / self.offset.norm_sq();
        if t >= 1.0 - tol.eps {
            1.0
        } else if t <= tol.eps {
            0.0
        } else {
            t
        }
    }

    /// Squared distance from the point to the nearest point on the bounded
    /// segment. Callers needing the literal distance take the square root.
    pub fn distance_sq(&self, point: &Point) -> Result<f64> {
        self.ensure_same_rank(point)?;
        Ok(self.distance_sq_unchecked(point))
    }

    fn distance_sq_unchecked(&self, point: &Point) -> f64 {
        let t = self.closest_approach_unchecked(point);
        let diff = (point.raw() - self.origin.raw()) - self.offset.raw() * t;
        diff.norm_squared()
    }

    /// All points of the input at minimal squared distance to the segment,
    /// ties within tolerance included, in encounter order.
    pub fn find_nearest(&self, points: &[Point]) -> Result<Vec<Point>> {
        if points.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        for point in points {
            self.ensure_same_rank(point)?;
        }
        let tol = Tolerance::default();
        let mut minimum = f64::MAX;
        let mut nearest: Vec<Point> = Vec::with_capacity(1);
        for point in points {
            let distance = self.distance_sq_unchecked(point);
            trace!(distance, "nearest-point candidate");
            if distance < minimum - tol.eps {
                minimum = distance;
                nearest.clear();
                nearest.push(point.clone());
            } else if tol.near_eq(distance, minimum) {
                nearest.push(point.clone());
            }
        }
        Ok(nearest)
    }

    fn ensure_same_rank(&self, point: &Point) -> Result<()> {
        if point.rank() != self.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: point.rank(),
            });
        }
        Ok(())
    }
}
