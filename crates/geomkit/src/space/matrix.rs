//! Immutable row-major matrices.
//!
//! Purpose
//! - Construction from literal rows, column vectors, or as an identity, with
//!   eager shape validation.
//! - Elementwise and product arithmetic, plus the classic direct algorithms:
//!   determinant by cofactor expansion over submatrices, inverse by
//!   Gauss-Jordan elimination with partial pivoting, and linear-algebraic
//!   rank by row-echelon pivot counting.
//! - Homogeneous affine constructors (translation/scaling/rotation/shearing)
//!   that compose under [`Matrix::dot`].
//!
//! The linear-algebraic rank computed by [`Matrix::rank`] is a different
//! concept from the dimension-count rank carried by `Vector`/`Point`; the
//! two are never conflated.

use std::hash::{Hash, Hasher};

use nalgebra::DMatrix;

use crate::cfg::{Tolerance, EPSILON};
use crate::error::{GeomError, Result};
use crate::space::{Point, Vector};

#[derive(Clone, Debug)]
pub struct Matrix {
    elems: DMatrix<f64>,
}

impl Matrix {
    /// Builds a matrix from literal rows. Rows must be non-empty, uniform in
    /// length, and have at least one column.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        if rows.is_empty() {
            return Err(GeomError::InvalidShape("a matrix requires at least one row"));
        }
        let columns = rows[0].as_ref().len();
        if columns == 0 {
            return Err(GeomError::InvalidShape(
                "a matrix requires at least one column",
            ));
        }
        for row in rows {
            if row.as_ref().len() != columns {
                return Err(GeomError::InvalidShape(
                    "all rows must have the same number of columns",
                ));
            }
        }
        let mut elems = DMatrix::zeros(rows.len(), columns);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.as_ref().iter().enumerate() {
                elems[(i, j)] = value;
            }
        }
        Ok(Self { elems })
    }

    /// Builds a matrix whose columns are the given same-rank vectors.
    pub fn from_columns(columns: &[Vector]) -> Result<Self> {
        if columns.is_empty() {
            return Err(GeomError::InvalidShape(
                "a matrix requires at least one column",
            ));
        }
        let rows = columns[0].rank();
        for column in columns {
            if column.rank() != rows {
                return Err(GeomError::InvalidShape(
                    "all columns must have the same rank",
                ));
            }
        }
        let mut elems = DMatrix::zeros(rows, columns.len());
        for (j, column) in columns.iter().enumerate() {
            for i in 0..rows {
                elems[(i, j)] = column.raw()[i];
            }
        }
        Ok(Self { elems })
    }

    /// Square identity of the given positive size.
    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GeomError::InvalidShape(
                "an identity matrix requires a positive size",
            ));
        }
        Ok(Self {
            elems: DMatrix::identity(size, size),
        })
    }

    pub(crate) fn raw(&self) -> &DMatrix<f64> {
        &self.elems
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.elems.nrows()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.elems.ncols()
    }

    /// 1-indexed element accessor.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        if row == 0 || row > self.rows() {
            return Err(GeomError::IndexOutOfRange {
                index: row,
                max: self.rows(),
            });
        }
        if column == 0 || column > self.columns() {
            return Err(GeomError::IndexOutOfRange {
                index: column,
                max: self.columns(),
            });
        }
        Ok(self.elems[(row - 1, column - 1)])
    }

    pub fn transpose(&self) -> Matrix {
        Self {
            elems: self.elems.transpose(),
        }
    }

    /// All rows and columns except the given 1-indexed row and column.
    /// Requires more than one row and more than one column.
    pub fn sub_matrix(&self, exclude_row: usize, exclude_column: usize) -> Result<Matrix> {
        if self.rows() < 2 || self.columns() < 2 {
            return Err(GeomError::InvalidShape(
                "a submatrix requires more than one row and column",
            ));
        }
        if exclude_row == 0 || exclude_row > self.rows() {
            return Err(GeomError::IndexOutOfRange {
                index: exclude_row,
                max: self.rows(),
            });
        }
        if exclude_column == 0 || exclude_column > self.columns() {
            return Err(GeomError::IndexOutOfRange {
                index: exclude_column,
                max: self.columns(),
            });
        }
        Ok(self.minor(exclude_row - 1, exclude_column - 1))
    }

    fn minor(&self, row: usize, column: usize) -> Matrix {
        Self {
            elems: self.elems.clone().remove_row(row).remove_column(column),
        }
    }

    /// Determinant by cofactor expansion along the first row, recursing over
    /// submatrices. Requires a square matrix.
    pub fn determinant(&self) -> Result<f64> {
        if self.rows() != self.columns() {
            return Err(GeomError::InvalidShape(
                "the determinant requires a square matrix",
            ));
        }
        Ok(self.det_rec())
    }

    fn det_rec(&self) -> f64 {
        let n = self.rows();
        match n {
            1 => self.elems[(0, 0)],
            2 => {
                self.elems[(0, 0)] * self.elems[(1, 1)]
                    - self.elems[(0, 1)] * self.elems[(1, 0)]
            }
            _ => {
                let mut acc = 0.0;
                for j in 0..n {
                    let entry = self.elems[(0, j)];
                    if entry == 0.0 {
                        continue;
                    }
                    let cofactor = if j % 2 == 0 { 1.0 } else { -1.0 };
                    acc += cofactor * entry * self.minor(0, j).det_rec();
                }
                acc
            }
        }
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting. Fails with
    /// [`GeomError::Singular`] when a pivot magnitude falls within tolerance
    /// of zero.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.rows();
        if n != self.columns() {
            return Err(GeomError::InvalidShape(
                "the inverse requires a square matrix",
            ));
        }
        let mut work = self.elems.clone();
        let mut inv = DMatrix::identity(n, n);
        for col in 0..n {
            let mut pivot_row = col;
            let mut best = work[(col, col)].abs();
            for r in col + 1..n {
                let candidate = work[(r, col)].abs();
                if candidate > best {
                    best = candidate;
                    pivot_row = r;
                }
            }
            if best <= EPSILON {
                return Err(GeomError::Singular);
            }
            if pivot_row != col {
                work.swap_rows(col, pivot_row);
                inv.swap_rows(col, pivot_row);
            }
            let pivot = work[(col, col)];
            for j in 0..n {
                work[(col, j)] /= pivot;
                inv[(col, j)] /= pivot;
            }
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = work[(r, col)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    work[(r, j)] -= factor * work[(col, j)];
                    inv[(r, j)] -= factor * inv[(col, j)];
                }
            }
        }
        Ok(Self { elems: inv })
    }

    /// Linear-algebraic rank: row-echelon reduction with partial pivoting,
    /// counting non-zero pivot rows.
    pub fn rank(&self) -> usize {
        let mut work = self.elems.clone();
        let (rows, columns) = work.shape();
        let mut rank = 0;
        let mut row = 0;
        for col in 0..columns {
            if row >= rows {
                break;
            }
            let mut pivot_row = row;
            let mut best = work[(row, col)].abs();
            for r in row + 1..rows {
                let candidate = work[(r, col)].abs();
                if candidate > best {
                    best = candidate;
                    pivot_row = r;
                }
            }
            if best <= EPSILON {
                continue;
            }
            work.swap_rows(row, pivot_row);
            for r in row + 1..rows {
                let factor = work[(r, col)] / work[(row, col)];
                if factor == 0.0 {
                    continue;
                }
                for j in col..columns {
                    work[(r, j)] -= factor * work[(row, j)];
                }
            }
            rank += 1;
            row += 1;
        }
        rank
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other)?;
        Ok(Self {
            elems: &self.elems + &other.elems,
        })
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other)?;
        Ok(Self {
            elems: &self.elems - &other.elems,
        })
    }

    pub fn negate(&self) -> Matrix {
        Self {
            elems: -&self.elems,
        }
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        Self {
            elems: &self.elems * scalar,
        }
    }

    pub fn divide(&self, scalar: f64) -> Result<Matrix> {
        if Tolerance::default().near_zero(scalar) {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self {
            elems: &self.elems / scalar,
        })
    }

    /// Matrix product; requires `self.columns() == other.rows()`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns() != other.rows() {
            return Err(GeomError::DimensionMismatch {
                expected: self.columns(),
                actual: other.rows(),
            });
        }
        Ok(Self {
            elems: &self.elems * &other.elems,
        })
    }

    /// `M · v`; requires `vector.rank() == self.columns()`.
    pub fn dot_vector(&self, vector: &Vector) -> Result<Vector> {
        if vector.rank() != self.columns() {
            return Err(GeomError::DimensionMismatch {
                expected: self.columns(),
                actual: vector.rank(),
            });
        }
        Ok(Vector::from_dvector(&self.elems * vector.raw()))
    }

    /// `M · p`; requires `point.rank() == self.columns()`.
    pub fn dot_point(&self, point: &Point) -> Result<Point> {
        if point.rank() != self.columns() {
            return Err(GeomError::DimensionMismatch {
                expected: self.columns(),
                actual: point.rank(),
            });
        }
        Ok(Point::from_dvector(&self.elems * point.raw()))
    }

    /// Homogeneous `(n+1) x (n+1)` translation by the given offset.
    pub fn translation(offset: &Vector) -> Matrix {
        let n = offset.rank();
        let mut elems = DMatrix::identity(n + 1, n + 1);
        for i in 0..n {
            elems[(i, n)] = offset.raw()[i];
        }
        Self { elems }
    }

    /// Homogeneous `(n+1) x (n+1)` axis-aligned scaling.
    pub fn scaling(factors: &Vector) -> Matrix {
        let n = factors.rank();
        let mut elems = DMatrix::identity(n + 1, n + 1);
        for i in 0..n {
            elems[(i, i)] = factors.raw()[i];
        }
        Self { elems }
    }

    /// Homogeneous rotation. A rank-1 angle vector yields the planar
    /// rotation (3x3); a rank-3 vector of per-axis angles yields the
    /// composed spatial rotation `Rz · Ry · Rx` (4x4).
    pub fn rotation(angles: &Vector) -> Result<Matrix> {
        match angles.rank() {
            1 => {
                let theta = angles.raw()[0];
                let (s, c) = theta.sin_cos();
                Matrix::from_rows(&[[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
            }
            3 => {
                let (sx, cx) = angles.raw()[0].sin_cos();
                let (sy, cy) = angles.raw()[1].sin_cos();
                let (sz, cz) = angles.raw()[2].sin_cos();
                let rx = Matrix::from_rows(&[
                    [1.0, 0.0, 0.0, 0.0],
                    [0.0, cx, -sx, 0.0],
                    [0.0, sx, cx, 0.0],
                    [0.0, 0.0, 0.0, 1.0],
                ])?;
                let ry = Matrix::from_rows(&[
                    [cy, 0.0, sy, 0.0],
                    [0.0, 1.0, 0.0, 0.0],
                    [-sy, 0.0, cy, 0.0],
                    [0.0, 0.0, 0.0, 1.0],
                ])?;
                let rz = Matrix::from_rows(&[
                    [cz, -sz, 0.0, 0.0],
                    [sz, cz, 0.0, 0.0],
                    [0.0, 0.0, 1.0, 0.0],
                    [0.0, 0.0, 0.0, 1.0],
                ])?;
                rz.dot(&ry)?.dot(&rx)
            }
            _ => Err(GeomError::InvalidShape(
                "rotation takes one (planar) or three (spatial) angles",
            )),
        }
    }

    /// Homogeneous shear: identity plus the strictly off-diagonal entries of
    /// the given coefficient columns. Requires `n` columns of rank `n`.
    pub fn shearing(coeffs: &[Vector]) -> Result<Matrix> {
        if coeffs.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        let n = coeffs.len();
        for column in coeffs {
            if column.rank() != n {
                return Err(GeomError::DimensionMismatch {
                    expected: n,
                    actual: column.rank(),
                });
            }
        }
        let mut elems = DMatrix::identity(n + 1, n + 1);
        for (j, column) in coeffs.iter().enumerate() {
            for i in 0..n {
                if i != j {
                    elems[(i, j)] = column.raw()[i];
                }
            }
        }
        Ok(Self { elems })
    }

    /// Applies a homogeneous `(n+1) x (n+1)` transform to a rank-`n` point:
    /// extends with a trailing 1, multiplies, and projects back.
    pub fn apply_affine(&self, point: &Point) -> Result<Point> {
        let n = point.rank();
        if self.rows() != self.columns() {
            return Err(GeomError::InvalidShape(
                "an affine transform requires a square matrix",
            ));
        }
        if self.rows() != n + 1 {
            return Err(GeomError::DimensionMismatch {
                expected: n + 1,
                actual: self.rows(),
            });
        }
        let mut homogeneous = nalgebra::DVector::zeros(n + 1);
        homogeneous.rows_mut(0, n).copy_from(point.raw());
        homogeneous[n] = 1.0;
        let image = &self.elems * homogeneous;
        let w = image[n];
        if Tolerance::default().near_zero(w) {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Point::from_dvector(image.rows(0, n).into_owned() / w))
    }

    fn ensure_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.rows() != other.rows() {
            return Err(GeomError::DimensionMismatch {
                expected: self.rows(),
                actual: other.rows(),
            });
        }
        if self.columns() != other.columns() {
            return Err(GeomError::DimensionMismatch {
                expected: self.columns(),
                actual: other.columns(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.elems.shape() == other.elems.shape()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Matrix {}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elems.nrows().hash(state);
        self.elems.ncols().hash(state);
        for x in self.elems.iter() {
            x.to_bits().hash(state);
        }
    }
}
