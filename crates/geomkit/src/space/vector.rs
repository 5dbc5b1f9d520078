//! Fixed-rank displacement vectors.
//!
//! A `Vector` is an immutable, non-empty sequence of `f64` coordinates. The
//! public coordinate accessor [`Vector::d`] is 1-indexed; storage is a plain
//! `nalgebra::DVector`. Binary operations require equal rank and fail with
//! [`GeomError::DimensionMismatch`] otherwise.

use std::hash::{Hash, Hasher};

use nalgebra::DVector;

use crate::cfg::Tolerance;
use crate::error::{GeomError, Result};
use crate::space::{Matrix, Point};

#[derive(Clone, Debug)]
pub struct Vector {
    elems: DVector<f64>,
}

impl Vector {
    /// Builds a vector from a non-empty coordinate slice.
    pub fn create(coords: &[f64]) -> Result<Self> {
        if coords.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        Ok(Self {
            elems: DVector::from_column_slice(coords),
        })
    }

    pub(crate) fn from_dvector(elems: DVector<f64>) -> Self {
        debug_assert!(elems.len() > 0);
        Self { elems }
    }

    pub(crate) fn raw(&self) -> &DVector<f64> {
        &self.elems
    }

    /// Number of dimensions, fixed at construction.
    #[inline]
    pub fn rank(&self) -> usize {
        self.elems.len()
    }

    /// 1-indexed coordinate accessor; valid indices are `[1, rank]`.
    pub fn d(&self, dimension: usize) -> Result<f64> {
        if dimension == 0 || dimension > self.rank() {
            return Err(GeomError::IndexOutOfRange {
                index: dimension,
                max: self.rank(),
            });
        }
        Ok(self.elems[dimension - 1])
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_rank(other)?;
        Ok(Self::from_dvector(&self.elems + &other.elems))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_rank(other)?;
        Ok(Self::from_dvector(&self.elems - &other.elems))
    }

    pub fn negate(&self) -> Vector {
        Self::from_dvector(-&self.elems)
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        Self::from_dvector(&self.elems * scalar)
    }

    /// Fails with [`GeomError::DivisionByZero`] when the scalar is within
    /// tolerance of zero.
    pub fn divide(&self, scalar: f64) -> Result<Vector> {
        if Tolerance::default().near_zero(scalar) {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self::from_dvector(&self.elems / scalar))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_rank(other)?;
        Ok(self.elems.dot(&other.elems))
    }

    /// Row-vector times matrix: `v^T · M`, requiring `rank == matrix.rows()`.
    /// The result has the matrix's column count as its rank.
    pub fn dot_matrix(&self, matrix: &Matrix) -> Result<Vector> {
        if matrix.rows() != self.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: matrix.rows(),
            });
        }
        let row = self.elems.transpose() * matrix.raw();
        Ok(Self::from_dvector(row.transpose()))
    }

    /// Planar perpendicular `(y, -x)`; defined for rank 2 only.
    pub fn cross_2d(&self) -> Result<Vector> {
        if self.rank() != 2 {
            return Err(GeomError::DimensionMismatch {
                expected: 2,
                actual: self.rank(),
            });
        }
        Ok(Self::from_dvector(DVector::from_column_slice(&[
            self.elems[1],
            -self.elems[0],
        ])))
    }

    /// Spatial cross product; defined for rank 3 only. The generalized
    /// n-ary cross product over rank-1 minors is not supported.
    pub fn cross_3d(&self, other: &Vector) -> Result<Vector> {
        if self.rank() != 3 {
            return Err(GeomError::DimensionMismatch {
                expected: 3,
                actual: self.rank(),
            });
        }
        self.ensure_same_rank(other)?;
        let (a, b) = (&self.elems, &other.elems);
        Ok(Self::from_dvector(DVector::from_column_slice(&[
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])))
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.elems.norm_squared()
    }

    /// Reinterprets the displacement as a location.
    pub fn to_point(&self) -> Point {
        Point::from_dvector(self.elems.clone())
    }

    fn ensure_same_rank(&self, other: &Vector) -> Result<()> {
        if self.rank() != other.rank() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rank(),
                actual: other.rank(),
            });
        }
        Ok(())
    }
}

// Exact-bitwise value identity; geometric closeness goes through predicates.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.elems.len() == other.elems.len()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elems.len().hash(state);
        for x in self.elems.iter() {
            x.to_bits().hash(state);
        }
    }
}
