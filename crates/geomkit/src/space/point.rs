//! Locations in Euclidean space.
//!
//! A `Point` carries the same coordinate storage as [`Vector`] but denotes a
//! position rather than a displacement; the two convert explicitly via
//! [`Point::to_vector`] / [`Vector::to_point`].

use std::hash::{Hash, Hasher};

use nalgebra::DVector;

use crate::error::{GeomError, Result};
use crate::space::{Matrix, Vector};

#[derive(Clone, Debug)]
pub struct Point {
    coords: DVector<f64>,
}

impl Point {
    /// Builds a point from a non-empty coordinate slice.
    pub fn create(coords: &[f64]) -> Result<Self> {
        if coords.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        Ok(Self {
            coords: DVector::from_column_slice(coords),
        })
    }

    pub(crate) fn from_dvector(coords: DVector<f64>) -> Self {
        debug_assert!(coords.len() > 0);
        Self { coords }
    }

    pub(crate) fn raw(&self) -> &DVector<f64> {
        &self.coords
    }

    /// First coordinate; callers validate planarity first.
    #[inline]
    pub(crate) fn x(&self) -> f64 {
        self.coords[0]
    }

    /// Second coordinate; callers validate planarity first.
    #[inline]
    pub(crate) fn y(&self) -> f64 {
        self.coords[1]
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.coords.len()
    }

    /// 1-indexed coordinate accessor; valid indices are `[1, rank]`.
    pub fn d(&self, dimension: usize) -> Result<f64> {
        if dimension == 0 || dimension > self.rank() {
            return Err(GeomError::IndexOutOfRange {
                index: dimension,
                max: self.rank(),
            });
        }
        Ok(self.coords[dimension - 1])
    }

    /// Coordinate-wise sum.
    pub fn add(&self, other: &Point) -> Result<Point> {
        self.ensure_same_rank(other)?;
        Ok(Self::from_dvector(&self.coords + &other.coords))
    }

    /// Coordinate-wise difference.
    pub fn subtract(&self, other: &Point) -> Result<Point> {
        self.ensure_same_rank(other)?;
        Ok(Self::from_dvector(&self.coords - &other.coords))
    }

    /// The point shifted by a displacement.
    pub fn translate(&self, offset: &Vector) -> Result<Point> {
        if self.rank() != offset.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: offset.rank(),
            });
        }
        Ok(Self::from_dvector(&self.coords + offset.raw()))
    }

    /// Row-point times matrix: `p^T · M`, requiring `rank == matrix.rows()`.
    pub fn transform(&self, matrix: &Matrix) -> Result<Point> {
        if matrix.rows() != self.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: matrix.rows(),
            });
        }
        let row = self.coords.transpose() * matrix.raw();
        Ok(Self::from_dvector(row.transpose()))
    }

    pub fn to_vector(&self) -> Vector {
        Vector::from_dvector(self.coords.clone())
    }

    fn ensure_same_rank(&self, other: &Point) -> Result<()> {
        if self.rank() != other.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: other.rank(),
            });
        }
        Ok(())
    }
}

pub(crate) fn dist_sq(a: &Point, b: &Point) -> f64 {
    (a.raw() - b.raw()).norm_squared()
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords.len() == other.coords.len()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.len().hash(state);
        for x in self.coords.iter() {
            x.to_bits().hash(state);
        }
    }
}
