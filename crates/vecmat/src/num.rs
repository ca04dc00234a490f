//! Numbers and numerics.

use num_traits as nt;
use std::fmt;

/// Gathers traits required of the elements of vectors and matrices.
///
/// Only the primitive integer and floating point types implement this trait,
/// so a vector or matrix of anything else is rejected at compile time.
pub trait Element:
    nt::Num
    + nt::AsPrimitive<Self>
    + nt::AsPrimitive<f64>
    + Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Converts the given `f64` to this type the way an `as` cast would,
    /// truncating towards zero and saturating for integer types.
    fn from_f64(value: f64) -> Self;

    /// Converts this value to `f64` the way an `as` cast would.
    #[inline]
    fn as_f64(self) -> f64 {
        cast::<f64, Self>(self)
    }

    /// Adds, wrapping around at the bounds of integer types.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtracts, wrapping around at the bounds of integer types.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplies, wrapping around at the bounds of integer types.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Divides, wrapping around for `MIN / -1` of signed integer types.
    ///
    /// # Panics
    /// If `rhs` is zero for an integer type.
    fn wrapping_div(self, rhs: Self) -> Self;
}

/// Converts between primitive numeric types the way an `as` cast would.
#[inline]
pub fn cast<T, U>(value: U) -> T
where
    T: Copy + 'static,
    U: nt::AsPrimitive<T>,
{
    value.as_()
}

macro_rules! impl_element {
    (integer: $($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$t>::wrapping_div(self, rhs)
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_element!(integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(float: f32, f64);
