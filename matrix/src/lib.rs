//! A dense, row-major matrix over the primitive numeric kinds of [`dmat_scalar::Scalar`].
//!
//! Every operation that can violate a shape or index contract comes in two flavours: a
//! panicking one (`at`, `must_add`, `must_mul`, ...) and a checked `try_*` one returning
//! [`MatrixResult`]. Neither ever returns a partial result.

#![no_std]

extern crate alloc;

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod dense;
pub mod error;
pub mod mul;
pub mod ops;

pub use dense::Matrix;
pub use dmat_scalar::Scalar;
pub use error::{MatrixError, MatrixResult};

/// The shape of a matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    /// The number of elements a matrix of this shape holds, or `None` on overflow.
    #[must_use]
    pub const fn area(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
