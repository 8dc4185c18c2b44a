//! The primitive numeric kinds a matrix can hold.

#![no_std]

use core::fmt::{Debug, Display};

use num_traits::Float;

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric kind usable as a matrix element.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`, `f32` and `f64`.
/// The trait is sealed, so no other type can be used as an element.
///
/// All arithmetic uses the kind's native semantics. Integers wrap at their width whether or
/// not overflow checks are enabled, and floats follow IEEE-754.
pub trait Scalar:
    sealed::Sealed + Copy + Default + Debug + Display + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Whether this kind is an integer kind.
    const IS_INTEGER: bool;

    /// Native addition. Wraps on integer overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Native multiplication. Wraps on integer overflow.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Lossy conversion into a double, as an `as` cast.
    fn to_f64(self) -> f64;

    /// Lossy conversion from a double, as an `as` cast.
    ///
    /// Integer kinds truncate toward zero and saturate at their bounds; `NaN` becomes zero.
    fn from_f64(value: f64) -> Self;

    #[must_use]
    #[inline]
    fn square(self) -> Self {
        self.wrapping_mul(self)
    }

    /// The square root, taken in double precision and converted back.
    ///
    /// For integer kinds the root is truncated, so `8.sqrt() == 2`.
    #[must_use]
    #[inline]
    fn sqrt(self) -> Self {
        Self::from_f64(Float::sqrt(self.to_f64()))
    }
}

macro_rules! impl_scalar_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $int {}

            impl Scalar for $int {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const IS_INTEGER: bool = true;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$int>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$int>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $int
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $float {}

            impl Scalar for $float {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const IS_INTEGER: bool = false;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $float
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar_float!(f32, f64);
