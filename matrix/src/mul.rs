use core::ops::Mul;

use dmat_scalar::Scalar;
use itertools::iproduct;
use tracing::{debug, instrument};

use crate::dense::Matrix;
use crate::error::{MatrixError, MatrixResult, checked_area};

impl<T: Scalar> Matrix<T> {
    /// Compute `C = A * B` with the textbook triple loop.
    ///
    /// `C[i][j]` is the sum over `n` of `A[i][n] * B[n][j]`, accumulated in `T` and read
    /// through the bounds-checked accessors.
    #[instrument(skip_all, fields(lhs = %self.dimensions(), rhs = %other.dimensions()))]
    pub fn try_mul(&self, other: &Self) -> MatrixResult<Self> {
        if self.columns() != other.rows() {
            let err = MatrixError::MulShapeMismatch {
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            };
            debug!(%err, "rejected multiplication");
            return Err(err);
        }
        let (rows, columns) = (self.rows(), other.columns());
        // An `m x 0` by `0 x n` product may have more cells than memory can address.
        checked_area(rows, columns)?;

        let data = iproduct!(0..rows, 0..columns)
            .map(|(i, j)| {
                (0..self.columns()).fold(T::ZERO, |acc, n| {
                    acc.wrapping_add(self.at(i, n).wrapping_mul(other.at(n, j)))
                })
            })
            .collect();
        Ok(Self::from_values(rows, columns, data))
    }

    /// Compute `C = A * B`, see [`Matrix::try_mul`].
    ///
    /// # Panics
    /// Panics if `self.columns() != other.rows()`.
    #[must_use]
    #[track_caller]
    pub fn must_mul(&self, other: &Self) -> Self {
        self.try_mul(other).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: Self) -> Matrix<T> {
        self.must_mul(rhs)
    }
}
