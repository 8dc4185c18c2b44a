use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
use core::ops::{Index, IndexMut};

use dmat_scalar::Scalar;
use itertools::Itertools;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::Dimensions;
use crate::error::{MatrixError, MatrixResult, checked_area};

/// A dense matrix stored in row-major form.
///
/// Element `(r, c)` lives at linear index `r * columns + c`, and the backing storage always
/// holds exactly `rows * columns` values. Shape is fixed for the lifetime of a value: every
/// transforming operation returns a new matrix, and the only in-place mutation is writing a
/// single element.
///
/// A `Matrix` carries no synchronization. Sharing one across threads while calling
/// [`Matrix::set`] requires the caller to provide exclusive access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawMatrix<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    /// All values, stored in row-major order.
    data: Vec<T>,
}

/// Wire form of a [`Matrix`], validated on the way in.
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix<T>) -> MatrixResult<Self> {
        Self::try_from_values(raw.rows, raw.columns, raw.data)
    }
}

impl<T> Matrix<T> {
    /// Wraps existing row-major storage, which must hold exactly `rows * columns` values.
    pub fn try_from_values(rows: usize, columns: usize, data: Vec<T>) -> MatrixResult<Self> {
        let expected = checked_area(rows, columns)?;
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Wraps existing row-major storage.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * columns`.
    #[must_use]
    #[track_caller]
    pub fn from_values(rows: usize, columns: usize, data: Vec<T>) -> Self {
        Self::try_from_values(rows, columns, data).unwrap_or_else(|err| panic!("{err}"))
    }

    /// A column vector holding `data`.
    #[must_use]
    pub fn new_col(data: Vec<T>) -> Self {
        Self {
            rows: data.len(),
            columns: 1,
            data,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Whether the matrix holds no elements, i.e. one of its dimensions is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn is_column_vector(&self) -> bool {
        self.columns == 1
    }

    /// All values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.data
    }

    /// The linear index of `(row, column)`, if it lies inside the matrix.
    pub(crate) fn linear_index(&self, row: usize, column: usize) -> MatrixResult<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::OutOfBounds {
                row,
                column,
                dimensions: self.dimensions(),
            });
        }
        Ok(row * self.columns + column)
    }

    /// # Panics
    /// Panics if `r >= self.rows()`.
    #[must_use]
    #[track_caller]
    pub fn row_slice(&self, r: usize) -> &[T] {
        assert!(
            r < self.rows,
            "row {r} out of bounds for a {} matrix",
            self.dimensions()
        );
        &self.data[r * self.columns..(r + 1) * self.columns]
    }

    /// Iterates over the rows as slices. A matrix with zero columns yields `rows` empty slices.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T]> {
        (0..self.rows).map(move |r| &self.data[r * self.columns..(r + 1) * self.columns])
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<U, F: FnMut(T) -> U>(&self, mut f: F) -> Matrix<U>
    where
        T: Clone,
    {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|v| f(v.clone())).collect(),
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a `rows x columns` matrix of zeros, then fills it in row-major order from
    /// `initial`. Values beyond `rows * columns` are ignored; missing values stay zero.
    pub fn try_new<I>(rows: usize, columns: usize, initial: I) -> MatrixResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let len = checked_area(rows, columns)?;
        let mut data = vec![T::ZERO; len];
        for (slot, value) in data.iter_mut().zip(initial) {
            *slot = value;
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Creates a `rows x columns` matrix, see [`Matrix::try_new`].
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows `usize`.
    #[must_use]
    #[track_caller]
    pub fn new<I>(rows: usize, columns: usize, initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_new(rows, columns, initial).unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `rows * columns` overflows `usize`.
    #[must_use]
    #[track_caller]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::new(rows, columns, [])
    }

    /// The `size x size` identity matrix.
    #[must_use]
    #[track_caller]
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = T::ONE;
        }
        m
    }

    /// A `rows x columns` matrix with every element drawn from `StandardUniform`.
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows `usize`.
    #[track_caller]
    pub fn rand<R: Rng>(rng: &mut R, rows: usize, columns: usize) -> Self
    where
        StandardUniform: Distribution<T>,
    {
        let len = checked_area(rows, columns).unwrap_or_else(|err| panic!("{err}"));
        let data = (0..len).map(|_| rng.random()).collect();
        Self {
            rows,
            columns,
            data,
        }
    }

    pub fn try_at(&self, row: usize, column: usize) -> MatrixResult<T> {
        self.linear_index(row, column).map(|i| self.data[i])
    }

    /// The element at `(row, column)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        self.try_at(row, column).ok()
    }

    /// The element at `(row, column)`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()` or `column >= self.columns()`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn at(&self, row: usize, column: usize) -> T {
        self.try_at(row, column).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_set(&mut self, row: usize, column: usize, value: T) -> MatrixResult<()> {
        let i = self.linear_index(row, column)?;
        self.data[i] = value;
        Ok(())
    }

    /// Overwrites the element at `(row, column)`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()` or `column >= self.columns()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self.try_set(row, column, value)
            .unwrap_or_else(|err| panic!("{err}"));
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.linear_index(row, column) {
            Ok(i) => &self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.linear_index(row, column) {
            Ok(i) => &mut self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            writeln!(f, "[{}]", row.iter().format(", "))?;
        }
        Ok(())
    }
}
