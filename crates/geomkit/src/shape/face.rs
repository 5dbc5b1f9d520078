//! Planar triangles.
//!
//! A `Face` is three rank-2 points plus the three boundary segments built
//! once at construction. Containment is a strict-interior test: points on an
//! edge or vertex are outside. That boundary policy is deliberate, so that a
//! shared edge between two adjacent triangles belongs to neither interior.

use crate::cfg::EPSILON;
use crate::error::Result;
use crate::orient::ensure_planar;
use crate::shape::Line;
use crate::space::Point;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    p1: Point,
    p2: Point,
    p3: Point,
    segments: [Line; 3],
}

impl Face {
    pub fn create(p1: Point, p2: Point, p3: Point) -> Result<Self> {
        ensure_planar(&p1)?;
        ensure_planar(&p2)?;
        ensure_planar(&p3)?;
        let segments = [
            Line::new_unchecked(p1.clone(), p2.clone()),
            Line::new_unchecked(p2.clone(), p3.clone()),
            Line::new_unchecked(p3.clone(), p1.clone()),
        ];
        Ok(Self { p1, p2, p3, segments })
    }

    pub fn p1(&self) -> &Point {
        &self.p1
    }

    pub fn p2(&self) -> &Point {
        &self.p2
    }

    pub fn p3(&self) -> &Point {
        &self.p3
    }

    /// The boundary segments p1->p2, p2->p3, p3->p1.
    pub fn segments(&self) -> &[Line; 3] {
        &self.segments
    }

    /// Strict interior containment: the point's half-plane sign must be
    /// strictly the same against all three boundary segments, which makes
    /// the test independent of vertex winding. Edge and vertex points are
    /// outside.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        ensure_planar(point)?;
        Ok(self.contains_planar(point))
    }

    pub(crate) fn contains_planar(&self, point: &Point) -> bool {
        let s1 = self.segments[0].sign_planar(point);
        let s2 = self.segments[1].sign_planar(point);
        let s3 = self.segments[2].sign_planar(point);
        (s1 > EPSILON && s2 > EPSILON && s3 > EPSILON)
            || (s1 < -EPSILON && s2 < -EPSILON && s3 < -EPSILON)
    }

    /// Whether the two triangles touch: any of the nine pairwise boundary
    /// crossings, or a vertex of either strictly inside the other (covers
    /// full containment where no edges cross). An axis-aligned bounding-box
    /// check short-circuits the common disjoint case.
    pub fn intersects(&self, other: &Face) -> bool {
        if !self.bbox_overlaps(other) {
            return false;
        }
        for ours in &self.segments {
            for theirs in &other.segments {
                if ours.crosses_planar(theirs) {
                    return true;
                }
            }
        }
        self.contains_planar(&other.p1)
            || self.contains_planar(&other.p2)
            || self.contains_planar(&other.p3)
            || other.contains_planar(&self.p1)
            || other.contains_planar(&self.p2)
            || other.contains_planar(&self.p3)
    }

    fn bbox(&self) -> [f64; 4] {
        let xs = [self.p1.x(), self.p2.x(), self.p3.x()];
        let ys = [self.p1.y(), self.p2.y(), self.p3.y()];
        [
            xs.iter().fold(f64::MAX, |a, &b| a.min(b)),
            ys.iter().fold(f64::MAX, |a, &b| a.min(b)),
            xs.iter().fold(f64::MIN, |a, &b| a.max(b)),
            ys.iter().fold(f64::MIN, |a, &b| a.max(b)),
        ]
    }

    fn bbox_overlaps(&self, other: &Face) -> bool {
        let a = self.bbox();
        let b = other.bbox();
        a[2] + EPSILON >= b[0]
            && b[2] + EPSILON >= a[0]
            && a[3] + EPSILON >= b[1]
            && b[3] + EPSILON >= a[1]
    }
}
