//! Element-wise arithmetic, the Euclidean norm and the dot product.
//!
//! All accumulation happens in the element type with its native semantics, so integer
//! matrices wrap on overflow and float matrices round as IEEE-754 does.

use core::ops::{Add, Mul};

use dmat_scalar::Scalar;
use itertools::izip;
use tracing::{debug, instrument};

use crate::dense::Matrix;
use crate::error::{MatrixError, MatrixResult};

impl<T: Scalar> Matrix<T> {
    /// A new matrix of the same shape with every element multiplied by `s`.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(dims = %self.dimensions()))]
    pub fn scale(&self, s: T) -> Self {
        self.map(|v| v.wrapping_mul(s))
    }

    fn expect_column_vector(&self, operation: &'static str) -> MatrixResult<()> {
        if self.is_column_vector() {
            return Ok(());
        }
        let err = MatrixError::NotColumnVector {
            operation,
            dimensions: self.dimensions(),
        };
        debug!(%err, "rejected non column vector");
        Err(err)
    }

    /// The Euclidean norm of a column vector.
    ///
    /// The sum of squares is accumulated in `T`; its square root is taken in double precision
    /// and converted back, truncating for integer kinds.
    pub fn try_len(&self) -> MatrixResult<T> {
        self.expect_column_vector("len")?;
        let sum = self
            .values()
            .iter()
            .fold(T::ZERO, |acc, &v| acc.wrapping_add(v.square()));
        Ok(sum.sqrt())
    }

    /// The Euclidean norm of a column vector, see [`Matrix::try_len`].
    ///
    /// # Panics
    /// Panics if the matrix does not have exactly one column.
    #[must_use]
    #[track_caller]
    pub fn len(&self) -> T {
        self.try_len().unwrap_or_else(|err| panic!("{err}"))
    }

    /// The dot product of two column vectors.
    ///
    /// Each element of `self` is paired with the element of `other` at the same position.
    /// `other` may be longer, in which case its trailing elements are ignored, but not shorter.
    pub fn try_dot_product(&self, other: &Self) -> MatrixResult<T> {
        self.expect_column_vector("dot product")?;
        other.expect_column_vector("dot product")?;

        let (lhs, rhs) = (self.values(), other.values());
        if rhs.len() < lhs.len() {
            let err = MatrixError::DotLengthMismatch {
                lhs_len: lhs.len(),
                rhs_len: rhs.len(),
            };
            debug!(%err, "rejected dot product");
            return Err(err);
        }

        Ok(izip!(lhs, rhs).fold(T::ZERO, |acc, (&a, &b)| {
            acc.wrapping_add(a.wrapping_mul(b))
        }))
    }

    /// The dot product of two column vectors, see [`Matrix::try_dot_product`].
    ///
    /// # Panics
    /// Panics if either operand does not have exactly one column, or if `other` has fewer
    /// elements than `self`.
    #[must_use]
    #[track_caller]
    pub fn dot_product(&self, other: &Self) -> T {
        self.try_dot_product(other)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// The element-wise sum of two matrices of equal shape.
    #[instrument(level = "debug", skip_all, fields(dims = %self.dimensions()))]
    pub fn try_add(&self, other: &Self) -> MatrixResult<Self> {
        if self.dimensions() != other.dimensions() {
            let err = MatrixError::AddShapeMismatch {
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            };
            debug!(%err, "rejected addition");
            return Err(err);
        }

        let data = izip!(self.values(), other.values())
            .map(|(&a, &b)| a.wrapping_add(b))
            .collect();
        Ok(Self::from_values(self.rows(), self.columns(), data))
    }

    /// The element-wise sum of two matrices, see [`Matrix::try_add`].
    ///
    /// # Panics
    /// Panics if the shapes differ.
    #[must_use]
    #[track_caller]
    pub fn must_add(&self, other: &Self) -> Self {
        self.try_add(other).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Matrix<T> {
        self.must_add(rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::Dimensions;

    #[test]
    fn test_scale() {
        let m = Matrix::new(2, 2, [1, -2, 3, 4]);
        let scaled = m.scale(3);
        assert_eq!(scaled.values(), &[3, -6, 9, 12]);
        assert_eq!(scaled.dimensions(), m.dimensions());
        // The input is untouched.
        assert_eq!(m.values(), &[1, -2, 3, 4]);
        assert_eq!(&m * 3, scaled);
    }

    #[test]
    fn test_scale_wraps() {
        let m = Matrix::new(1, 2, [100u8, 2]);
        assert_eq!(m.scale(3).values(), &[44, 6]);
    }

    #[test]
    fn test_scale_empty() {
        let m = Matrix::<f64>::zeros(0, 3);
        let scaled = m.scale(2.0);
        assert!(scaled.is_empty());
        assert_eq!(scaled.dimensions(), Dimensions { rows: 0, columns: 3 });
    }

    #[test]
    fn test_len() {
        let v = Matrix::new(2, 1, [3, 4]);
        assert_eq!(v.len(), 5);

        let v = Matrix::new(2, 1, [3.0f64, 4.0]);
        assert_eq!(v.len(), 5.0);
    }

    #[test]
    fn test_len_truncates_for_integers() {
        // sqrt(1 + 4) = 2.236...
        let v = Matrix::new_col(vec![1u32, 2]);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_len_accumulates_in_element_type() {
        // 20^2 + 20^2 = 800 wraps to 32 in a u8, and sqrt(32) truncates to 5.
        let v = Matrix::new_col(vec![20u8, 20]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_len_of_empty_column() {
        let v = Matrix::<i32>::zeros(0, 1);
        assert_eq!(v.len(), 0);
    }

    #[test]
    #[should_panic(expected = "matrix size for len must have 1 column")]
    fn test_len_requires_column_vector() {
        let _ = Matrix::new(1, 2, [3, 4]).len();
    }

    #[test]
    fn test_dot_product() {
        let a = Matrix::new(3, 1, [1, 2, 3]);
        let b = Matrix::new(3, 1, [4, 5, 6]);
        assert_eq!(a.dot_product(&b), 32);
        assert_eq!(b.dot_product(&a), 32);
    }

    #[test]
    fn test_dot_product_ignores_trailing_elements() {
        let a = Matrix::new_col(vec![1i64, 2]);
        let b = Matrix::new_col(vec![4i64, 5, 100]);
        assert_eq!(a.dot_product(&b), 14);
    }

    #[test]
    fn test_dot_product_shorter_other() {
        let a = Matrix::new_col(vec![1i64, 2, 3]);
        let b = Matrix::new_col(vec![4i64, 5]);
        assert_eq!(
            a.try_dot_product(&b),
            Err(MatrixError::DotLengthMismatch {
                lhs_len: 3,
                rhs_len: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "dot product operand has 2 elements")]
    fn test_dot_product_shorter_other_panics() {
        let a = Matrix::new_col(vec![1.0f32, 2.0, 3.0]);
        let b = Matrix::new_col(vec![4.0f32, 5.0]);
        let _ = a.dot_product(&b);
    }

    #[test]
    #[should_panic(expected = "matrix size for dot product must have 1 column")]
    fn test_dot_product_requires_column_vectors() {
        let a = Matrix::new_col(vec![1, 2]);
        let b = Matrix::new(1, 2, [1, 2]);
        let _ = a.dot_product(&b);
    }

    #[test]
    fn test_add() {
        let a = Matrix::new(2, 2, [1, 2, 3, 4]);
        let b = Matrix::new(2, 2, [10, 20, 30, 40]);
        let sum = a.must_add(&b);
        assert_eq!(sum.values(), &[11, 22, 33, 44]);
        assert_eq!(&a + &b, sum);
    }

    #[test]
    fn test_add_wraps() {
        let a = Matrix::new(1, 1, [i16::MAX]);
        let b = Matrix::new(1, 1, [1i16]);
        assert_eq!(a.must_add(&b).at(0, 0), i16::MIN);
    }

    #[test]
    fn test_add_is_commutative() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let rows = rng.random_range(0..6);
            let columns = rng.random_range(0..6);
            let a = Matrix::<i32>::rand(&mut rng, rows, columns);
            let b = Matrix::<i32>::rand(&mut rng, rows, columns);
            assert_eq!(a.must_add(&b), b.must_add(&a));
        }
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix::<u8>::zeros(2, 3);
        let b = Matrix::<u8>::zeros(3, 2);
        assert_eq!(
            a.try_add(&b),
            Err(MatrixError::AddShapeMismatch {
                lhs: a.dimensions(),
                rhs: b.dimensions(),
            })
        );
    }

    #[test]
    #[should_panic(expected = "matrix sizes are incompatible for addition")]
    fn test_add_shape_mismatch_panics() {
        let a = Matrix::<f64>::zeros(1, 3);
        let b = Matrix::<f64>::zeros(1, 2);
        let _ = &a + &b;
    }
}
