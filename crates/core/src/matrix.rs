use std::ops::{Add, Mul};

use thiserror::Error;

use crate::Vec2;

/// The matrix has a zero determinant and cannot be inverted.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("matrix is singular (determinant = {det})")]
pub struct SingularMatrixError {
    /// The offending determinant (zero or non-finite).
    pub det: f64,
}

/// A fixed 2×2 real matrix, stored row-major.
///
/// Used for Hessians and their inverses in the Newton-type solvers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2 {
    rows: [[f64; 2]; 2],
}

impl Matrix2 {
    /// The 2×2 identity matrix.
    pub const IDENTITY: Self = Self::new([[1.0, 0.0], [0.0, 1.0]]);

    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Returns the 2×2 identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the outer product `u·vᵀ`.
    #[must_use]
    pub fn outer(u: Vec2, v: Vec2) -> Self {
        Self::new([[u.x1 * v.x1, u.x1 * v.x2], [u.x2 * v.x1, u.x2 * v.x2]])
    }

    /// Creates a symmetric matrix `[[a, b], [b, c]]`.
    #[must_use]
    pub const fn symmetric(a: f64, b: f64, c: f64) -> Self {
        Self::new([[a, b], [b, c]])
    }

    /// Returns the rows of the matrix.
    #[must_use]
    pub fn rows(&self) -> [[f64; 2]; 2] {
        self.rows
    }

    /// Returns the entry at `(row, col)`, both zero-based.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 1.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Returns the determinant `m00·m11 − m01·m10`.
    #[must_use]
    pub fn det(&self) -> f64 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::new([[a, c], [b, d]])
    }

    /// Returns the matrix of cofactors (algebraic complements).
    ///
    /// Entry `(i, j)` is `(−1)^(i+j)` times the minor obtained by deleting
    /// row `i` and column `j`.
    #[must_use]
    pub fn cofactor(&self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::new([[d, -c], [-b, a]])
    }

    /// Returns the adjugate, the transpose of the cofactor matrix.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        self.cofactor().transpose()
    }

    /// Returns `self` scaled by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::new([[a * factor, b * factor], [c * factor, d * factor]])
    }

    /// Returns the inverse `adj(M) / det(M)`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularMatrixError`] if the determinant is zero or not finite.
    pub fn inverse(&self) -> Result<Self, SingularMatrixError> {
        let det = self.det();
        #[allow(clippy::float_cmp)]
        if det == 0.0 || !det.is_finite() {
            return Err(SingularMatrixError { det });
        }
        Ok(self.adjugate().scale(1.0 / det))
    }
}

impl From<[[f64; 2]; 2]> for Matrix2 {
    fn from(rows: [[f64; 2]; 2]) -> Self {
        Self::new(rows)
    }
}

impl Add for Matrix2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        let [[e, f], [g, h]] = rhs.rows;
        Self::new([[a + e, b + f], [c + g, d + h]])
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        let [[e, f], [g, h]] = rhs.rows;
        Self::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }
}

impl Mul<Vec2> for Matrix2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        let [[a, b], [c, d]] = self.rows;
        Vec2::new(a * rhs.x1 + b * rhs.x2, c * rhs.x1 + d * rhs.x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_matrix_eq(actual: Matrix2, expected: [[f64; 2]; 2]) {
        for (row, expected_row) in expected.iter().enumerate() {
            for (col, expected_value) in expected_row.iter().enumerate() {
                assert_relative_eq!(actual.get(row, col), *expected_value, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn determinant() {
        let m = Matrix2::new([[10.0, 44.0], [55.0, 77.0]]);
        assert_relative_eq!(m.det(), -1650.0);
    }

    #[test]
    fn transpose_swaps_off_diagonal() {
        let m = Matrix2::new([[10.0, 44.0], [55.0, 77.0]]);
        assert_eq!(m.transpose(), Matrix2::new([[10.0, 55.0], [44.0, 77.0]]));

        let a = Matrix2::new([[1.0, -1.0], [0.0, 2.0]]);
        assert_eq!(a.transpose(), Matrix2::new([[1.0, 0.0], [-1.0, 2.0]]));
    }

    #[test]
    fn cofactor_matrix() {
        let m = Matrix2::new([[1.0, -1.0], [0.0, 2.0]]);
        assert_matrix_eq(m.cofactor(), [[2.0, 0.0], [1.0, 1.0]]);
        assert_matrix_eq(m.adjugate(), [[2.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn inverse_matches_known_values() {
        let a = Matrix2::new([[1.0, -1.0], [0.0, 2.0]]);
        assert_matrix_eq(a.inverse().unwrap(), [[1.0, 0.5], [0.0, 0.5]]);

        let m = Matrix2::new([[4.0, 8.0], [9.0, 3.0]]);
        assert_matrix_eq(
            m.inverse().unwrap(),
            [[-1.0 / 20.0, 2.0 / 15.0], [3.0 / 20.0, -1.0 / 15.0]],
        );
    }

    #[test]
    fn product_with_inverse_is_identity() {
        let m = Matrix2::new([[10.0, 44.0], [55.0, 77.0]]);
        let inv = m.inverse().expect("non-singular");

        assert_matrix_eq(m * inv, Matrix2::identity().rows());
        assert_matrix_eq(inv * m, Matrix2::identity().rows());
    }

    #[test]
    fn sum_and_outer_product() {
        let g = Vec2::new(8.0, 1.0);
        let h = Matrix2::symmetric(12.0, 0.0, 4.0) + Matrix2::outer(g, g).scale(0.5);
        assert_eq!(h, Matrix2::new([[44.0, 4.0], [4.0, 4.5]]));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = Matrix2::new([[1.0, 2.0], [2.0, 4.0]]);
        let err = m.inverse().unwrap_err();
        assert_relative_eq!(err.det, 0.0);
    }

    #[test]
    fn matrix_vector_product() {
        let m = Matrix2::symmetric(2.0, 0.6, 12.0);
        let v = m * Vec2::new(1.0, -1.0);
        assert_relative_eq!(v.x1, 1.4);
        assert_relative_eq!(v.x2, -11.4);
    }
}
