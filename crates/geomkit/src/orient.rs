//! Shared turn-direction predicate.
//!
//! Hull sorting, the scan sweep, and the triangle half-plane tests all
//! classify turns through this one primitive so their tie-break behavior is
//! identical under the shared tolerance.

use crate::cfg::Tolerance;
use crate::error::{GeomError, Result};
use crate::space::Point;

/// Rank required by the planar predicates (orientation, segment
/// intersection, containment, hulls).
pub const PLANAR_RANK: usize = 2;

/// Rotational sense of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Signed parallelogram area of `(a - reference) x (b - reference)`.
/// Positive for a counter-clockwise turn, negative for clockwise.
pub fn turn(reference: &Point, a: &Point, b: &Point) -> Result<f64> {
    ensure_planar(reference)?;
    ensure_planar(a)?;
    ensure_planar(b)?;
    Ok(turn_unchecked(reference, a, b))
}

/// Classifies the turn with the default tolerance.
pub fn orient(reference: &Point, a: &Point, b: &Point) -> Result<Orientation> {
    orient_eps(reference, a, b, Tolerance::default())
}

/// Classifies the turn; areas within `tol` of zero are collinear.
pub fn orient_eps(
    reference: &Point,
    a: &Point,
    b: &Point,
    tol: Tolerance,
) -> Result<Orientation> {
    let area = turn(reference, a, b)?;
    Ok(if tol.near_zero(area) {
        Orientation::Collinear
    } else if area > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    })
}

#[inline]
pub(crate) fn turn_unchecked(reference: &Point, a: &Point, b: &Point) -> f64 {
    (a.x() - reference.x()) * (b.y() - reference.y())
        - (a.y() - reference.y()) * (b.x() - reference.x())
}

pub(crate) fn ensure_planar(p: &Point) -> Result<()> {
    if p.rank() != PLANAR_RANK {
        return Err(GeomError::DimensionMismatch {
            expected: PLANAR_RANK,
            actual: p.rank(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::create(&[x, y]).unwrap()
    }

    #[test]
    fn classifies_the_three_senses() {
        let origin = p(0.0, 0.0);
        assert_eq!(
            orient(&origin, &p(1.0, 0.0), &p(0.0, 1.0)).unwrap(),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orient(&origin, &p(0.0, 1.0), &p(1.0, 0.0)).unwrap(),
            Orientation::Clockwise
        );
        assert_eq!(
            orient(&origin, &p(1.0, 1.0), &p(2.0, 2.0)).unwrap(),
            Orientation::Collinear
        );
    }

    #[test]
    fn swapping_operands_flips_the_sense() {
        let r = p(0.5, -0.25);
        let a = p(3.0, 1.0);
        let b = p(-2.0, 4.0);
        let forward = turn(&r, &a, &b).unwrap();
        let backward = turn(&r, &b, &a).unwrap();
        assert_eq!(forward, -backward);
        assert_eq!(orient(&r, &a, &b).unwrap(), Orientation::CounterClockwise);
        assert_eq!(orient(&r, &b, &a).unwrap(), Orientation::Clockwise);
    }

    #[test]
    fn rejects_non_planar_points() {
        let spatial = Point::create(&[1.0, 2.0, 3.0]).unwrap();
        let err = orient(&spatial, &p(0.0, 0.0), &p(1.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            GeomError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }
}
