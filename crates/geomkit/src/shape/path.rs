//! Contiguous waypoint sequences.

use crate::error::{GeomError, Result};
use crate::shape::Ray;
use crate::space::Point;

/// An ordered sequence of two or more same-rank waypoints, consecutive
/// waypoints distinct. Immutable; insertion returns a fresh path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    waypoints: Vec<Point>,
}

impl Path {
    pub fn of(waypoints: Vec<Point>) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        if waypoints.len() < 2 {
            return Err(GeomError::InvalidShape(
                "a path requires at least two waypoints",
            ));
        }
        let rank = waypoints[0].rank();
        for pair in waypoints.windows(2) {
            if pair[1].rank() != rank {
                return Err(GeomError::DimensionMismatch {
                    expected: rank,
                    actual: pair[1].rank(),
                });
            }
            if pair[0] == pair[1] {
                return Err(GeomError::InvalidShape(
                    "consecutive waypoints must be distinct",
                ));
            }
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.waypoints[0].rank()
    }

    /// Index of the segment (waypoint `i` to `i + 1`) nearest to the point
    /// by squared closest-approach distance.
    pub fn nearest_segment(&self, point: &Point) -> Result<usize> {
        if point.rank() != self.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: point.rank(),
            });
        }
        let mut best = (0usize, f64::MAX);
        for i in 0..self.waypoints.len() - 1 {
            let segment = Ray::between(self.waypoints[i].clone(), self.waypoints[i + 1].clone())?;
            let distance = segment.distance_sq(point)?;
            if distance < best.1 {
                best = (i, distance);
            }
        }
        Ok(best.0)
    }

    /// Returns a new path with the point spliced in after the nearest
    /// segment's origin waypoint. Rejects a point that duplicates either
    /// neighbor of the chosen segment.
    pub fn insert(&self, point: Point) -> Result<Path> {
        let i = self.nearest_segment(&point)?;
        if point == self.waypoints[i] || point == self.waypoints[i + 1] {
            return Err(GeomError::InvalidShape(
                "inserted waypoint duplicates an adjacent waypoint",
            ));
        }
        let mut waypoints = self.waypoints.clone();
        waypoints.insert(i + 1, point);
        Ok(Self { waypoints })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.waypoints.iter()
    }
}
