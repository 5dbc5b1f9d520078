//! Convex hulls of planar point sets (Graham scan).
//!
//! Purpose
//! - Deduplicate the input (exact-bitwise set semantics), pick the centroid
//!   as the interior reference point, sort counter-clockwise around it, and
//!   sweep the sorted order with the classic pop-while-not-left-turn stack.
//!
//! Design notes
//! - The angular comparator splits on the reference horizon first, then uses
//!   the shared turn predicate within a half, then centroid distance for
//!   collinear pairs (nearer first, so the sweep keeps only the farthest).
//! - The sweep starts at the point farthest from the reference, which is
//!   always a hull vertex, and finishes with a seam pass closing the cycle.
//! - The hull path is computed once on demand and cached behind `OnceLock`,
//!   so a built hull stays shareable across threads without locking.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

use nalgebra::DVector;
use tracing::debug;

use crate::cfg::EPSILON;
use crate::error::{GeomError, Result};
use crate::orient::{ensure_planar, turn_unchecked, PLANAR_RANK};
use crate::space::{dist_sq, Point};

#[derive(Clone, Debug)]
pub struct ConvexHull {
    points: Vec<Point>,
    median: Point,
    path: OnceLock<Vec<Point>>,
}

impl ConvexHull {
    /// Validates and deduplicates the input and computes the centroid
    /// reference point. The hull itself is computed lazily by
    /// [`ConvexHull::graham_scan`].
    pub fn create(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        for point in points {
            ensure_planar(point)?;
        }
        let mut seen = HashSet::with_capacity(points.len());
        let mut distinct = Vec::with_capacity(points.len());
        for point in points {
            if seen.insert(point.clone()) {
                distinct.push(point.clone());
            }
        }
        let mut accumulator = DVector::zeros(PLANAR_RANK);
        for point in &distinct {
            accumulator += point.raw();
        }
        let median = Point::from_dvector(accumulator / distinct.len() as f64);
        debug!(
            input = points.len(),
            distinct = distinct.len(),
            "convex hull created"
        );
        Ok(Self {
            points: distinct,
            median,
            path: OnceLock::new(),
        })
    }

    /// The deduplicated input set, in first-seen order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The centroid reference point the angular sort pivots on.
    pub fn median(&self) -> &Point {
        &self.median
    }

    /// The hull boundary in counter-clockwise order, computed on first call
    /// and cached. Fewer than three distinct points hull to themselves; a
    /// fully collinear set hulls to its two extremes.
    pub fn graham_scan(&self) -> &[Point] {
        self.path.get_or_init(|| {
            let path = self.compute_path();
            debug!(hull = path.len(), "convex hull path computed");
            path
        })
    }

    fn compute_path(&self) -> Vec<Point> {
        if self.points.len() < 3 {
            return self.points.clone();
        }
        if let Some(extremes) = self.collinear_extremes() {
            return extremes;
        }

        // The reference itself is strictly interior here (the set is not
        // collinear), so a point coinciding with it can never be on the hull.
        let mut sorted: Vec<Point> = self
            .points
            .iter()
            .filter(|p| **p != self.median)
            .cloned()
            .collect();
        sorted.sort_by(|a, b| self.angular_order(a, b));
        if sorted.len() < 3 {
            return sorted;
        }

        let start = farthest_index(&self.median, &sorted);
        sorted.rotate_left(start);

        let mut path: Vec<Point> = Vec::with_capacity(sorted.len());
        for candidate in sorted {
            while path.len() >= 2
                && turn_unchecked(&path[path.len() - 2], &path[path.len() - 1], &candidate)
                    <= EPSILON
            {
                path.pop();
            }
            path.push(candidate);
        }
        while path.len() >= 3
            && turn_unchecked(&path[path.len() - 2], &path[path.len() - 1], &path[0]) <= EPSILON
        {
            path.pop();
        }

        // Lead with the angular-first hull vertex so the boundary starts at
        // the reference's angular origin.
        if let Some(first) = path
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| self.angular_order(a, b))
            .map(|(i, _)| i)
        {
            path.rotate_left(first);
        }
        path
    }

    /// The two lexicographic extremes when every point lies on one line,
    /// `None` otherwise.
    fn collinear_extremes(&self) -> Option<Vec<Point>> {
        let a = &self.points[0];
        let b = &self.points[1];
        let collinear = self.points[2..]
            .iter()
            .all(|p| turn_unchecked(a, b, p).abs() <= EPSILON);
        if !collinear {
            return None;
        }
        let min = self
            .points
            .iter()
            .min_by(|a, b| lex_order((a.x(), a.y()), (b.x(), b.y())))?;
        let max = self
            .points
            .iter()
            .max_by(|a, b| lex_order((a.x(), a.y()), (b.x(), b.y())))?;
        Some(vec![min.clone(), max.clone()])
    }

    /// Counter-clockwise angular order around the reference, starting at the
    /// positive-x horizon. Collinear pairs order by distance, nearer first.
    fn angular_order(&self, a: &Point, b: &Point) -> Ordering {
        let ha = self.half(a);
        let hb = self.half(b);
        if ha != hb {
            return ha.cmp(&hb);
        }
        let area = turn_unchecked(&self.median, a, b);
        if area > EPSILON {
            Ordering::Less
        } else if area < -EPSILON {
            Ordering::Greater
        } else {
            dist_sq(&self.median, a)
                .partial_cmp(&dist_sq(&self.median, b))
                .unwrap_or(Ordering::Equal)
        }
    }

    /// 0 for angles in `[0, pi)` around the reference, 1 for `[pi, 2pi)`.
    fn half(&self, p: &Point) -> u8 {
        let dx = p.x() - self.median.x();
        let dy = p.y() - self.median.y();
        if dy > 0.0 || (dy == 0.0 && dx > 0.0) {
            0
        } else {
            1
        }
    }

}

fn farthest_index(reference: &Point, points: &[Point]) -> usize {
    let mut best = (0usize, f64::MIN);
    for (i, point) in points.iter().enumerate() {
        let distance = dist_sq(reference, point);
        if distance > best.1 {
            best = (i, distance);
        }
    }
    best.0
}

fn lex_order(a: (f64, f64), b: (f64, f64)) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orient::{orient, Orientation};

    fn p(x: f64, y: f64) -> Point {
        Point::create(&[x, y]).unwrap()
    }

    fn assert_ccw(path: &[Point]) {
        assert!(path.len() >= 3);
        for i in 0..path.len() {
            let a = &path[i];
            let b = &path[(i + 1) % path.len()];
            let c = &path[(i + 2) % path.len()];
            assert_eq!(
                orient(a, b, c).unwrap(),
                Orientation::CounterClockwise,
                "hull boundary must turn counter-clockwise at every vertex"
            );
        }
    }

    #[test]
    fn square_with_interior_point_hulls_to_the_corners() {
        let points = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 4.0),
            p(0.0, 4.0),
            p(2.0, 2.0),
        ];
        let hull = ConvexHull::create(&points).unwrap();
        let path = hull.graham_scan();
        assert_eq!(path.len(), 4);
        assert!(!path.contains(&p(2.0, 2.0)));
        for corner in &points[..4] {
            assert!(path.contains(corner));
        }
        assert_ccw(path);
    }

    #[test]
    fn median_is_the_centroid_of_the_distinct_points() {
        let hull = ConvexHull::create(&[p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)]).unwrap();
        assert_eq!(hull.median(), &p(2.0, 1.0));
    }

    #[test]
    fn duplicate_points_collapse_before_the_scan() {
        let hull = ConvexHull::create(&[p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)]).unwrap();
        assert_eq!(hull.points().len(), 1);
        assert_eq!(hull.graham_scan(), &[p(1.0, 1.0)]);
    }

    #[test]
    fn one_and_two_point_inputs_hull_to_themselves() {
        let single = ConvexHull::create(&[p(3.0, -1.0)]).unwrap();
        assert_eq!(single.graham_scan(), &[p(3.0, -1.0)]);

        let pair = ConvexHull::create(&[p(0.0, 0.0), p(5.0, 5.0)]).unwrap();
        assert_eq!(pair.graham_scan(), &[p(0.0, 0.0), p(5.0, 5.0)]);
    }

    #[test]
    fn collinear_input_hulls_to_the_two_extremes() {
        let points = vec![p(2.0, 2.0), p(0.0, 0.0), p(3.0, 3.0), p(1.0, 1.0)];
        let hull = ConvexHull::create(&points).unwrap();
        assert_eq!(hull.graham_scan(), &[p(0.0, 0.0), p(3.0, 3.0)]);
    }

    #[test]
    fn interior_points_never_reach_the_boundary() {
        let mut points = vec![
            p(0.0, 0.0),
            p(1000.0, 0.0),
            p(1000.0, 1000.0),
            p(0.0, 1000.0),
        ];
        let interior = crate::sample::draw_points(
            200,
            crate::sample::RegionCfg::default(),
            crate::sample::ReplayToken { seed: 11, index: 0 },
        )
        .unwrap();
        points.extend(interior);
        let hull = ConvexHull::create(&points).unwrap();
        let path = hull.graham_scan();
        assert_eq!(path.len(), 4);
        assert_ccw(path);
    }

    #[test]
    fn rejects_empty_and_non_planar_input() {
        assert_eq!(ConvexHull::create(&[]).unwrap_err(), GeomError::EmptyInput);
        let spatial = Point::create(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            ConvexHull::create(&[spatial]).unwrap_err(),
            GeomError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }
}
