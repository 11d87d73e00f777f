//! Numeric and ordering constraints.
//!
//! Each trait names a closed family of scalar types. They are sealed: the
//! families are fixed by this crate and cannot be extended downstream.
//!
//! | Trait | Members |
//! |---|---|
//! | [`Signed`] | `i8 i16 i32 i64 i128 isize` |
//! | [`Unsigned`] | `u8 u16 u32 u64 u128 usize` |
//! | [`Integer`] | `Signed ∪ Unsigned` |
//! | [`Float`] | `f32 f64` |
//! | [`Complex`] | `Complex<f32> Complex<f64>` (feature `complex`) |
//! | [`Numeric`] | all of the above |
//! | [`OrderedNumeric`] | `Signed ∪ Unsigned ∪ Float` |
//! | [`Ordered`] | `OrderedNumeric`, `char`, `String`, `str`, `&str`, `OrderedFloat`, `NotNan` |
//!
//! `Complex` is deliberately absent from [`OrderedNumeric`] and [`Ordered`]:
//! complex numbers have no total order.

use num_traits::{One, ToPrimitive, Zero};
use ordered_float::{NotNan, OrderedFloat};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

mod private {
    pub trait Sealed {}
}

use private::Sealed;

/// Any scalar with additive and multiplicative identities and the four
/// arithmetic operators.
pub trait Numeric:
    Sealed
    + Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// `self + rhs`, wrapping around on integer overflow.
    fn add_wrapping(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping around on integer overflow.
    fn mul_wrapping(self, rhs: Self) -> Self;
}

/// Numeric types with a (partial) order: integers and floats. All of them
/// convert to `f64` through [`ToPrimitive`].
pub trait OrderedNumeric: Numeric + PartialOrd + ToPrimitive {}

/// Signed integers.
pub trait Signed: Integer + Neg<Output = Self> {}

/// Unsigned integers.
pub trait Unsigned: Integer {}

/// Signed or unsigned integers. Unlike floats, integers are `Eq + Ord + Hash`.
pub trait Integer: OrderedNumeric + Eq + Ord + Hash {}

/// IEEE-754 floats.
pub trait Float: OrderedNumeric + Neg<Output = Self> {}

/// Complex numbers built on a [`Float`] component type.
pub trait Complex: Numeric {
    /// Component type of the real and imaginary parts.
    type Real: Float;

    fn real(&self) -> Self::Real;
    fn imag(&self) -> Self::Real;
}

/// Types usable with `<`, `>`, `<=`, `>=` by the comparison-based operations.
pub trait Ordered: Sealed + PartialOrd {}

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}
            impl Numeric for $t {
                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn mul_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
            impl OrderedNumeric for $t {}
            impl Integer for $t {}
            impl Signed for $t {}
            impl Ordered for $t {}
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}
            impl Numeric for $t {
                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn mul_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
            impl OrderedNumeric for $t {}
            impl Integer for $t {}
            impl Unsigned for $t {}
            impl Ordered for $t {}
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}
            impl Numeric for $t {
                fn add_wrapping(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn mul_wrapping(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
            impl OrderedNumeric for $t {}
            impl Float for $t {}
            impl Ordered for $t {}

            impl Sealed for OrderedFloat<$t> {}
            impl Ordered for OrderedFloat<$t> {}
            impl Sealed for NotNan<$t> {}
            impl Ordered for NotNan<$t> {}
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

impl Sealed for char {}
impl Ordered for char {}
impl Sealed for String {}
impl Ordered for String {}
impl Sealed for str {}
impl Ordered for str {}
impl Sealed for &str {}
impl Ordered for &str {}

#[cfg(feature = "complex")]
mod complex_impls {
    use super::{Complex, Numeric, Sealed};
    use num_complex::Complex as C;

    macro_rules! impl_complex {
        ($($t:ty),* $(,)?) => {
            $(
                impl Sealed for C<$t> {}
                impl Numeric for C<$t> {
                    fn add_wrapping(self, rhs: Self) -> Self {
                        self + rhs
                    }

                    fn mul_wrapping(self, rhs: Self) -> Self {
                        self * rhs
                    }
                }

                impl Complex for C<$t> {
                    type Real = $t;

                    fn real(&self) -> $t {
                        self.re
                    }

                    fn imag(&self) -> $t {
                        self.im
                    }
                }
            )*
        };
    }

    impl_complex!(f32, f64);
}
