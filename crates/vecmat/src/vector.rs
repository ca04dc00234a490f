//! Vectors.

use crate::{
    error::{MathError, Result, or_panic},
    matrix::Matrix33,
    num::{Element, cast},
};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use std::{
    array, fmt,
    ops::{
        Add, AddAssign, BitAnd, BitXor, BitXorAssign, Div, DivAssign, Index, IndexMut, Mul,
        MulAssign, Neg, Sub, SubAssign,
    },
};

/// A 3-dimensional vector that is either a row or a column vector.
///
/// Every constructor produces a column vector. The orientation only changes
/// through [`Vector3::transpose`], and operations combining two vectors
/// require them to have the same orientation.
///
/// Mixed-type arithmetic is supported everywhere: the right-hand operand is
/// cast to the element type of the left-hand operand with `as` semantics.
/// Componentwise integer arithmetic wraps around on overflow.
#[derive(Clone, Copy, Debug)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    row: bool,
}

/// Whether a vector is meant to be multiplied on the left (row) or on the
/// right (column) of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Column,
}

impl<T: Element> Vector3<T> {
    /// Creates a new column vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z, row: false }
    }

    /// Creates a new column vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new column vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Whether this is a row vector.
    #[inline]
    pub const fn is_row(&self) -> bool {
        self.row
    }

    /// The orientation of the vector.
    #[inline]
    pub const fn orientation(&self) -> Orientation {
        if self.row {
            Orientation::Row
        } else {
            Orientation::Column
        }
    }

    /// The components as an array.
    #[inline]
    pub const fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts the vector to the given element type with `as` semantics,
    /// keeping the orientation.
    #[inline]
    pub fn cast<U: Element>(&self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3 {
            x: cast::<U, T>(self.x),
            y: cast::<U, T>(self.y),
            z: cast::<U, T>(self.z),
            row: self.row,
        }
    }

    /// Sets all components to the given value.
    #[inline]
    pub fn fill<U: Element + AsPrimitive<T>>(&mut self, value: U) {
        let value = cast::<T, U>(value);
        self.x = value;
        self.y = value;
        self.z = value;
    }

    /// Returns a vector with the given closure applied to each component.
    /// The orientation is kept.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
            row: self.row,
        }
    }

    /// Computes the Euclidean norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the Euclidean norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        let [x, y, z] = self.components_f64();
        x * x + y * y + z * z
    }

    /// Returns a copy of the vector with the opposite orientation.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            row: !self.row,
            ..*self
        }
    }

    /// Divides each component by the norm of the vector. A vector with zero
    /// norm is left untouched.
    ///
    /// For integer element types the normalized components are truncated
    /// towards zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            *self = self.mapped(|c| T::from_f64(c.as_f64() / norm));
        }
    }

    /// Computes the normalized version of the vector. See
    /// [`Vector3::normalize`].
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Adds the given vector componentwise.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn try_add<U: Element + AsPrimitive<T>>(&self, other: &Vector3<U>) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let other = other.cast::<T>();
        Ok(Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
            z: self.z.wrapping_add(other.z),
            row: self.row,
        })
    }

    /// Subtracts the given vector componentwise.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn try_sub<U: Element + AsPrimitive<T>>(&self, other: &Vector3<U>) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let other = other.cast::<T>();
        Ok(Self {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
            z: self.z.wrapping_sub(other.z),
            row: self.row,
        })
    }

    /// Adds the given vector componentwise in place. The vector is left
    /// untouched on failure.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn try_add_assign<U: Element + AsPrimitive<T>>(
        &mut self,
        other: &Vector3<U>,
    ) -> Result<()> {
        *self = self.try_add(other)?;
        Ok(())
    }

    /// Subtracts the given vector componentwise in place. The vector is left
    /// untouched on failure.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn try_sub_assign<U: Element + AsPrimitive<T>>(
        &mut self,
        other: &Vector3<U>,
    ) -> Result<()> {
        *self = self.try_sub(other)?;
        Ok(())
    }

    /// Computes the right-handed cross product of this vector with another.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn cross<U: Element + AsPrimitive<T>>(&self, other: &Vector3<U>) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let other = other.cast::<T>();
        let term = |a: T, b: T, c: T, d: T| a.wrapping_mul(b).wrapping_sub(c.wrapping_mul(d));
        Ok(Self {
            x: term(self.y, other.z, self.z, other.y),
            y: term(self.z, other.x, self.x, other.z),
            z: term(self.x, other.y, self.y, other.x),
            row: self.row,
        })
    }

    /// Replaces this vector with its cross product with another.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn cross_assign<U: Element + AsPrimitive<T>>(&mut self, other: &Vector3<U>) -> Result<()> {
        *self = self.cross(other)?;
        Ok(())
    }

    /// Computes the dot product of this vector with another in `f64`.
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] if the orientations differ.
    pub fn dot<U: Element>(&self, other: &Vector3<U>) -> Result<f64> {
        self.ensure_same_shape(other)?;
        let [ax, ay, az] = self.components_f64();
        let [bx, by, bz] = other.components_f64();
        Ok(ax * bx + ay * by + az * bz)
    }

    /// Multiplies this row vector with the given matrix from the left,
    /// giving a new row vector with components `Σ_i v[i] * m[i][j]`.
    ///
    /// # Errors
    /// Returns [`MathError::OrientationMismatch`] if this is a column vector.
    pub fn try_mul_matrix<U: Element>(&self, matrix: &Matrix33<U>) -> Result<Self> {
        self.ensure_row()?;
        let v = self.components_f64();
        let m = matrix.logical_rows_f64();
        let product = array::from_fn(|j| (0..3).map(|i| v[i] * m[i][j]).sum::<f64>());
        Ok(Self::from_f64_components(product, true))
    }

    /// Multiplies this row vector with the given matrix in place. See
    /// [`Vector3::try_mul_matrix`].
    ///
    /// # Errors
    /// Returns [`MathError::OrientationMismatch`] if this is a column vector.
    pub fn try_mul_matrix_assign<U: Element>(&mut self, matrix: &Matrix33<U>) -> Result<()> {
        *self = self.try_mul_matrix(matrix)?;
        Ok(())
    }

    /// Multiplies this row vector with the inverse of the given matrix.
    ///
    /// # Errors
    /// Returns [`MathError::OrientationMismatch`] if this is a column vector,
    /// or [`MathError::Singular`] if the matrix has no inverse.
    pub fn try_div_matrix<U: Element>(&self, matrix: &Matrix33<U>) -> Result<Self> {
        self.ensure_row()?;
        let inverse = matrix.cast::<f64>().inverse()?;
        self.try_mul_matrix(&inverse)
    }

    /// Multiplies this row vector with the inverse of the given matrix in
    /// place. See [`Vector3::try_div_matrix`].
    ///
    /// # Errors
    /// Returns [`MathError::OrientationMismatch`] if this is a column vector,
    /// or [`MathError::Singular`] if the matrix has no inverse.
    pub fn try_div_matrix_assign<U: Element>(&mut self, matrix: &Matrix33<U>) -> Result<()> {
        *self = self.try_div_matrix(matrix)?;
        Ok(())
    }

    #[inline]
    pub(crate) fn components_f64(&self) -> [f64; 3] {
        [self.x.as_f64(), self.y.as_f64(), self.z.as_f64()]
    }

    #[inline]
    pub(crate) fn from_f64_components([x, y, z]: [f64; 3], row: bool) -> Self {
        Self {
            x: T::from_f64(x),
            y: T::from_f64(y),
            z: T::from_f64(z),
            row,
        }
    }

    fn ensure_same_shape<U: Element>(&self, other: &Vector3<U>) -> Result<()> {
        if self.row == other.row {
            Ok(())
        } else {
            Err(MathError::ShapeMismatch)
        }
    }

    fn ensure_row(&self) -> Result<()> {
        if self.row {
            Ok(())
        } else {
            Err(MathError::OrientationMismatch {
                expected: Orientation::Row,
            })
        }
    }
}

impl<T: Element> Default for Vector3<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Element> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.to_array()
    }
}

macro_rules! impl_scalar_ops_for_vector {
    ($u:ty) => {
        impl<T: Element> Add<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $u) -> Self::Output {
                let rhs = cast::<T, $u>(rhs);
                self.mapped(|c| c.wrapping_add(rhs))
            }
        }

        impl<T: Element> Sub<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $u) -> Self::Output {
                let rhs = cast::<T, $u>(rhs);
                self.mapped(|c| c.wrapping_sub(rhs))
            }
        }

        impl<T: Element> Mul<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $u) -> Self::Output {
                let rhs = cast::<T, $u>(rhs);
                self.mapped(|c| c.wrapping_mul(rhs))
            }
        }

        /// # Panics
        /// If the scalar is zero and the element type is an integer type.
        impl<T: Element> Div<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $u) -> Self::Output {
                let rhs = cast::<T, $u>(rhs);
                self.mapped(|c| c.wrapping_div(rhs))
            }
        }

        impl<T: Element> AddAssign<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $u) {
                *self = *self + rhs;
            }
        }

        impl<T: Element> SubAssign<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $u) {
                *self = *self - rhs;
            }
        }

        impl<T: Element> MulAssign<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $u) {
                *self = *self * rhs;
            }
        }

        /// # Panics
        /// If the scalar is zero and the element type is an integer type.
        impl<T: Element> DivAssign<$u> for Vector3<T>
        where
            $u: AsPrimitive<T>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $u) {
                *self = *self / rhs;
            }
        }

        /// Divides the scalar by each component, keeping the orientation of
        /// the vector.
        ///
        /// # Panics
        /// If a component is zero and the element type is an integer type.
        impl<T: Element> Div<Vector3<T>> for $u
        where
            $u: AsPrimitive<T>,
        {
            type Output = Vector3<T>;

            #[inline]
            fn div(self, rhs: Vector3<T>) -> Self::Output {
                let lhs = cast::<T, $u>(self);
                rhs.mapped(|c| lhs.wrapping_div(c))
            }
        }
    };
}

for_each_primitive!(impl_scalar_ops_for_vector);

/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element + AsPrimitive<T>> Add<Vector3<U>> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vector3<U>) -> Self::Output {
        or_panic(self.try_add(&rhs))
    }
}

/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element + AsPrimitive<T>> Sub<Vector3<U>> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vector3<U>) -> Self::Output {
        or_panic(self.try_sub(&rhs))
    }
}

/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element + AsPrimitive<T>> AddAssign<Vector3<U>> for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3<U>) {
        or_panic(self.try_add_assign(&rhs));
    }
}

/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element + AsPrimitive<T>> SubAssign<Vector3<U>> for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3<U>) {
        or_panic(self.try_sub_assign(&rhs));
    }
}

/// Cross product.
///
/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element + AsPrimitive<T>> BitXor<Vector3<U>> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Vector3<U>) -> Self::Output {
        or_panic(self.cross(&rhs))
    }
}

/// In-place cross product.
///
/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element + AsPrimitive<T>> BitXorAssign<Vector3<U>> for Vector3<T> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Vector3<U>) {
        or_panic(self.cross_assign(&rhs));
    }
}

/// Dot product.
///
/// # Panics
/// If the orientations differ.
impl<T: Element, U: Element> BitAnd<Vector3<U>> for Vector3<T> {
    type Output = f64;

    #[inline]
    fn bitand(self, rhs: Vector3<U>) -> Self::Output {
        or_panic(self.dot(&rhs))
    }
}

/// # Panics
/// If the vector is a column vector.
impl<T: Element, U: Element> Mul<Matrix33<U>> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Matrix33<U>) -> Self::Output {
        or_panic(self.try_mul_matrix(&rhs))
    }
}

/// # Panics
/// If the vector is a column vector.
impl<T: Element, U: Element> MulAssign<Matrix33<U>> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix33<U>) {
        or_panic(self.try_mul_matrix_assign(&rhs));
    }
}

/// Multiplication with the inverse matrix.
///
/// # Panics
/// If the vector is a column vector or the matrix is singular.
impl<T: Element, U: Element> Div<Matrix33<U>> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Matrix33<U>) -> Self::Output {
        or_panic(self.try_div_matrix(&rhs))
    }
}

/// # Panics
/// If the vector is a column vector or the matrix is singular.
impl<T: Element, U: Element> DivAssign<Matrix33<U>> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Matrix33<U>) {
        or_panic(self.try_div_matrix_assign(&rhs));
    }
}

impl<T: Element + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.mapped(|c| -c)
    }
}

impl<T: Element> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of range for a 3-dimensional vector"),
        }
    }
}

impl<T: Element> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} is out of range for a 3-dimensional vector"),
        }
    }
}

/// Vectors are equal when all components and the orientation are equal.
impl<T: Element, U: Element + AsPrimitive<T>> PartialEq<Vector3<U>> for Vector3<T> {
    fn eq(&self, other: &Vector3<U>) -> bool {
        let other = other.cast::<T>();
        self.row == other.row && self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<T> AbsDiffEq for Vector3<T>
where
    T: Element + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.row == other.row
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T> RelativeEq for Vector3<T>
where
    T: Element + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.row == other.row
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// Renders the vector as `[x y z]`, followed by `'` for column vectors.
impl<T: Element> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)?;
        if !self.row {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn creating_zero_vector_gives_zero_column_vector() {
        let v = Vector3::<i32>::zeros();
        assert_eq!(v.to_array(), [0, 0, 0]);
        assert!(!v.is_row());

        let v = Vector3::<f64>::default();
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(v.orientation(), Orientation::Column);
    }

    #[test]
    fn creating_vectors_always_gives_column_vectors() {
        assert!(!Vector3::same(4_u8).is_row());
        assert!(!Vector3::new(1.0_f32, 2.0, 3.0).is_row());
        assert!(!Vector3::from([1_i64, 2, 3]).is_row());
    }

    #[test]
    fn creating_vector_with_same_value_fills_all_components() {
        assert_eq!(Vector3::same(4).to_array(), [4, 4, 4]);
    }

    #[test]
    fn transposing_flips_orientation_and_keeps_components() {
        let v = Vector3::new(1, 2, 3);
        let t = v.transpose();

        assert!(t.is_row());
        assert_eq!(t.to_array(), v.to_array());
        assert!(!v.is_row());
        assert_eq!(t.transpose(), v);
    }

    #[test]
    fn computing_norm_works() {
        assert_abs_diff_eq!(Vector3::new(3.0, 4.0, 0.0).norm(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vector3::new(3, 4, 0).norm(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vector3::new(1, 2, 2).norm_squared(), 9.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector_gives_unit_vector() {
        let mut v = Vector3::new(2.0, 0.0, 0.0).transpose();
        v.normalize();
        assert_abs_diff_eq!(v, Vector3::new(1.0, 0.0, 0.0).transpose(), epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_leaves_it_unchanged() {
        let mut v = Vector3::<f64>::zeros();
        v.normalize();
        assert_eq!(v, Vector3::<f64>::zeros());
        assert!(!v.x.is_nan());
    }

    #[test]
    fn normalizing_integer_vector_truncates_components() {
        let v = Vector3::new(3, 4, 0).normalized();
        assert_eq!(v.to_array(), [0, 0, 0]);

        let v = Vector3::new(5, 0, 0).normalized();
        assert_eq!(v.to_array(), [1, 0, 0]);
    }

    #[test]
    fn filling_vector_casts_value_to_element_type() {
        let mut v = Vector3::new(1, 2, 3).transpose();
        v.fill(7.9_f64);
        assert_eq!(v.to_array(), [7, 7, 7]);
        assert!(v.is_row());
    }

    #[test]
    fn scalar_operations_cast_scalar_to_element_type() {
        let v = Vector3::new(1.0_f32, 2.0, 3.0);

        assert_eq!(v + 1_i32, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(v - 1_u8, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(v * 2.0_f64, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(v / 2_i32, Vector3::new(0.5, 1.0, 1.5));

        let w = Vector3::new(10, 20, 30);
        assert_eq!(w * 1.9_f64, Vector3::new(10, 20, 30));
        assert_eq!(w / 4_i64, Vector3::new(2, 5, 7));
    }

    #[test]
    fn in_place_scalar_operations_work() {
        let mut v = Vector3::new(1.0, 2.0, 3.0).transpose();
        v += 1_i32;
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0).transpose());
        v -= 2.0_f32;
        assert_eq!(v, Vector3::new(0.0, 1.0, 2.0).transpose());
        v *= 3_u16;
        assert_eq!(v, Vector3::new(0.0, 3.0, 6.0).transpose());
        v /= 3_i32;
        assert_eq!(v, Vector3::new(0.0, 1.0, 2.0).transpose());
    }

    #[test]
    fn scalar_operations_keep_orientation() {
        let v = Vector3::new(1, 2, 3).transpose();
        assert!((v + 1_i32).is_row());
        assert!((v * 2_i32).is_row());
        assert!((12_i32 / v).is_row());
    }

    #[test]
    fn dividing_scalar_by_vector_divides_by_each_component() {
        let v = Vector3::new(1.0, 2.0, 4.0);
        assert_eq!(8.0_f64 / v, Vector3::new(8.0, 4.0, 2.0));
        assert_eq!(8_i32 / v, Vector3::new(8.0, 4.0, 2.0));
    }

    #[test]
    fn adding_and_subtracting_vectors_works() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4, 5, 6);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vector3::new(-3.0, -3.0, -3.0));
        assert_eq!(a.try_add(&b), Ok(Vector3::new(5.0, 7.0, 9.0)));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector3::new(5.0, 7.0, 9.0));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn adding_vectors_of_different_orientation_fails() {
        let a = Vector3::new(1, 2, 3);
        let b = a.transpose();

        assert_eq!(a.try_add(&b), Err(MathError::ShapeMismatch));
        assert_eq!(a.try_sub(&b), Err(MathError::ShapeMismatch));

        let mut c = a;
        assert_eq!(c.try_add_assign(&b), Err(MathError::ShapeMismatch));
        assert_eq!(c.try_sub_assign(&b), Err(MathError::ShapeMismatch));
        assert_eq!(c, a);
    }

    #[test]
    #[should_panic(expected = "Vectors are not of the same shape")]
    fn adding_vectors_of_different_orientation_with_operator_panics() {
        let a = Vector3::new(1, 2, 3);
        let _ = a + a.transpose();
    }

    #[test]
    #[should_panic(expected = "Vectors are not of the same shape")]
    fn crossing_vectors_of_different_orientation_with_operator_panics() {
        let a = Vector3::new(1, 2, 3);
        let _ = a ^ a.transpose();
    }

    #[test]
    #[should_panic(expected = "Vectors are not of the same shape")]
    fn crossing_vectors_of_different_orientation_in_place_with_operator_panics() {
        let mut a = Vector3::new(1, 2, 3);
        a ^= a.transpose();
    }

    #[test]
    #[should_panic(expected = "Vectors are not of the same shape")]
    fn dotting_vectors_of_different_orientation_with_operator_panics() {
        let a = Vector3::new(1, 2, 3);
        let _ = a & a.transpose();
    }

    #[test]
    fn crossing_unsigned_vectors_wraps_negative_components() {
        let x = Vector3::new(1_u32, 0, 0);
        let y = Vector3::new(0_u32, 1, 0);
        assert_eq!((x ^ y).to_array(), [0, 0, 1]);
        assert_eq!((y ^ x).to_array(), [0, 0, u32::MAX]);
    }

    #[test]
    fn subtracting_unsigned_vectors_wraps_below_zero() {
        let a = Vector3::new(1_u8, 2, 3);
        let b = Vector3::new(2_u8, 2, 2);
        assert_eq!((a - b).to_array(), [255, 0, 1]);
    }

    #[test]
    fn adding_vectors_wraps_above_integer_max() {
        let a = Vector3::new(i8::MAX, 0, -1);
        let b = Vector3::new(1_i8, 0, 1);
        assert_eq!((a + b).to_array(), [i8::MIN, 0, 0]);
    }

    #[test]
    fn scalar_ops_on_unsigned_vectors_wrap() {
        let v = Vector3::new(200_u8, 2, 3);
        assert_eq!((v + 100_i32).to_array(), [44, 102, 103]);
        assert_eq!((v - 3_i32).to_array(), [197, 255, 0]);
        assert_eq!((v * 2_u8).to_array(), [144, 4, 6]);
    }

    #[test]
    fn dividing_scalar_by_integer_vector_with_nonzero_components_works() {
        let v = Vector3::new(3_i32, 1, -2);
        assert_eq!((20_i32 / v).to_array(), [6, 20, -10]);
    }

    #[test]
    #[should_panic]
    fn dividing_scalar_by_integer_vector_with_zero_component_panics() {
        let _ = 20_i32 / Vector3::new(0_i32, 1, 2);
    }

    #[test]
    fn dividing_scalar_by_float_vector_with_zero_component_gives_infinity() {
        let v = 20.0_f64 / Vector3::new(0.0_f64, 1.0, 2.0);
        assert!(v.x.is_infinite());
        assert_abs_diff_eq!(v.y, 20.0);
        assert_abs_diff_eq!(v.z, 10.0);
    }

    #[test]
    fn computing_cross_product_of_unit_vectors_follows_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(x ^ y, z);
        assert_eq!(y ^ z, x);
        assert_eq!(z ^ x, y);
        assert_eq!(y ^ x, -z);
    }

    #[test]
    fn computing_cross_product_works() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);

        assert_eq!(a.cross(&b), Ok(Vector3::new(-3, 6, -3)));

        let mut c = a;
        c ^= b;
        assert_eq!(c, Vector3::new(-3, 6, -3));
    }

    #[test]
    fn cross_product_is_orthogonal_to_both_operands() {
        let a = Vector3::new(1.0, 2.0, 3.0).transpose();
        let b = Vector3::new(-4.0, 5.0, 0.5).transpose();
        let c = a ^ b;

        assert!(c.is_row());
        assert_abs_diff_eq!(c & a, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c & b, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn cross_product_of_vectors_with_different_orientation_fails() {
        let a = Vector3::new(1, 2, 3);
        assert_eq!(a.cross(&a.transpose()), Err(MathError::ShapeMismatch));

        let mut b = a;
        assert_eq!(b.cross_assign(&a.transpose()), Err(MathError::ShapeMismatch));
    }

    #[test]
    fn computing_dot_product_works() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(0.5, -1.0, 2.0);

        assert_abs_diff_eq!(a & a, 14.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a & b, 4.5, epsilon = EPSILON);
        assert_eq!(a.dot(&b.transpose()), Err(MathError::ShapeMismatch));
    }

    #[test]
    fn dot_product_of_large_integers_does_not_overflow() {
        let a = Vector3::same(i32::MAX);
        let square = f64::from(i32::MAX) * f64::from(i32::MAX);
        assert_abs_diff_eq!(a & a, 3.0 * square, epsilon = 1.0);
    }

    #[test]
    fn equality_requires_equal_components_and_orientation() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(1, 2, 3);

        assert_eq!(a, b);
        assert_ne!(a, b.transpose());
        assert_ne!(a, Vector3::new(1, 2, 4));
    }

    #[test]
    fn negating_vector_keeps_orientation() {
        let v = -Vector3::new(1, -2, 3).transpose();
        assert_eq!(v, Vector3::new(-1, 2, -3).transpose());
    }

    #[test]
    fn vector_indexing_works() {
        let mut v = Vector3::new(1, 2, 3);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 3);

        v[0] = 10;
        v[2] = 30;
        assert_eq!(v, Vector3::new(10, 2, 30));
    }

    #[test]
    #[should_panic]
    fn indexing_vector_out_of_bounds_panics() {
        let v = Vector3::new(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn casting_vector_keeps_orientation() {
        let v = Vector3::new(1.7, -2.2, 3.0).transpose();
        let w = v.cast::<i32>();
        assert_eq!(w.to_array(), [1, -2, 3]);
        assert!(w.is_row());
    }

    #[test]
    fn converting_vector_to_and_from_array_works() {
        let v = Vector3::from([1, 2, 3]);
        let array: [i32; 3] = v.into();
        assert_eq!(array, [1, 2, 3]);
    }

    #[test]
    fn displaying_column_vector_appends_marker() {
        assert_eq!(Vector3::new(1, 2, 3).to_string(), "[1 2 3]'");
        assert_eq!(Vector3::new(1, 2, 3).transpose().to_string(), "[1 2 3]");
        assert_eq!(Vector3::new(0.5, 1.0, -2.0).to_string(), "[0.5 1 -2]'");
    }

    #[test]
    fn multiplying_row_vector_with_matrix_works() {
        let m = Matrix33::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let v = Vector3::new(1, 0, 2).transpose();

        let product = v * m;
        assert_eq!(product, Vector3::new(15, 18, 21).transpose());

        let mut w = v;
        w *= m;
        assert_eq!(w, product);
    }

    #[test]
    fn multiplying_row_vector_with_transposed_matrix_uses_logical_layout() {
        let m = Matrix33::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let v = Vector3::new(1, 0, 0).transpose();

        assert_eq!(v * m.transpose(), Vector3::new(1, 4, 7).transpose());
    }

    #[test]
    fn multiplying_column_vector_with_matrix_fails() {
        let m = Matrix33::<f64>::identity();
        let v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(
            v.try_mul_matrix(&m),
            Err(MathError::OrientationMismatch {
                expected: Orientation::Row
            })
        );
        assert_eq!(
            v.try_div_matrix(&m),
            Err(MathError::OrientationMismatch {
                expected: Orientation::Row
            })
        );
    }

    #[test]
    fn dividing_row_vector_by_matrix_multiplies_with_inverse() {
        let m = Matrix33::from_rows([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 0.5]]);
        let v = Vector3::new(2.0, 2.0, 2.0).transpose();

        assert_abs_diff_eq!(v / m, Vector3::new(1.0, 0.5, 4.0).transpose(), epsilon = EPSILON);

        let mut w = v;
        w /= m;
        assert_abs_diff_eq!(w, Vector3::new(1.0, 0.5, 4.0).transpose(), epsilon = EPSILON);
    }

    #[test]
    fn dividing_integer_vector_by_integer_matrix_inverts_in_floating_point() {
        let m = Matrix33::from_rows([[2, 0, 0], [0, 2, 0], [0, 0, 2]]);
        let v = Vector3::new(4, 6, 8).transpose();

        assert_eq!(v / m, Vector3::new(2, 3, 4).transpose());
    }

    #[test]
    fn dividing_row_vector_by_singular_matrix_fails() {
        let m = Matrix33::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let v = Vector3::new(1, 2, 3).transpose();

        assert!(matches!(v.try_div_matrix(&m), Err(MathError::Singular { .. })));
    }

    prop_compose! {
        fn vector_strategy()(
            x in -1e3..1e3,
            y in -1e3..1e3,
            z in -1e3..1e3,
            row in any::<bool>(),
        ) -> Vector3<f64> {
            let v = Vector3::new(x, y, z);
            if row { v.transpose() } else { v }
        }
    }

    proptest! {
        #[test]
        fn transposing_twice_gives_original_vector(v in vector_strategy()) {
            prop_assert_eq!(v.transpose().transpose(), v);
        }
    }

    proptest! {
        #[test]
        fn dot_product_is_commutative(a in vector_strategy(), b in vector_strategy()) {
            let b = if a.is_row() == b.is_row() { b } else { b.transpose() };
            prop_assert_eq!(a & b, b & a);
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_anticommutative(a in vector_strategy(), b in vector_strategy()) {
            let b = if a.is_row() == b.is_row() { b } else { b.transpose() };
            prop_assert!(abs_diff_eq!(a ^ b, -(b ^ a), epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn normalized_nonzero_vector_has_unit_norm(v in vector_strategy()) {
            prop_assume!(v.norm() > 1e-6);
            prop_assert!(abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = 1e-9));
        }
    }
}
