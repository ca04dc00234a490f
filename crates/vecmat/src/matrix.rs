//! Matrices.

use crate::{
    error::{MathError, Result, or_panic},
    num::{Element, cast},
    vector::{Orientation, Vector3},
};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use std::{
    array, fmt,
    ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign},
};

/// Determinants with an absolute value at or below this are considered zero
/// when inverting a matrix.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// A 3x3 matrix.
///
/// The cells are stored row-major in a flat array. Transposing only flips a
/// flag that swaps the roles of the row and column index when a cell is
/// looked up, so the storage is never permuted.
#[derive(Clone, Copy, Debug)]
pub struct Matrix33<T> {
    cells: [T; 9],
    transposed: bool,
}

impl<T: Element> Matrix33<T> {
    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_flat([T::ZERO; 9])
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([[l, o, o], [o, l, o], [o, o, l]])
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = rows;
        Self::from_flat([a, b, c, d, e, f, g, h, i])
    }

    /// Creates a matrix from the given cells in row-major order.
    #[inline]
    pub const fn from_flat(cells: [T; 9]) -> Self {
        Self {
            cells,
            transposed: false,
        }
    }

    /// Converts the matrix to the given element type with `as` semantics.
    /// Both the storage and the transposed flag are carried over.
    #[inline]
    pub fn cast<U: Element>(&self) -> Matrix33<U>
    where
        T: AsPrimitive<U>,
    {
        Matrix33 {
            cells: self.cells.map(cast::<U, T>),
            transposed: self.transposed,
        }
    }

    /// Whether the matrix is viewed as transposed.
    #[inline]
    pub const fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Returns a copy of the matrix with the transposed flag flipped. The
    /// cells are not moved.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            transposed: !self.transposed,
            ..*self
        }
    }

    /// The cell at the given row and column.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if either index is 3 or more.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.cells[self.flat_index(row, col)?])
    }

    /// A mutable reference to the cell at the given row and column.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if either index is 3 or more.
    #[inline]
    pub fn element_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.flat_index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// The given row of the matrix as a row vector.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if the index is 3 or more.
    pub fn row(&self, row: usize) -> Result<Vector3<T>> {
        let vector = Vector3::new(
            self.element(row, 0)?,
            self.element(row, 1)?,
            self.element(row, 2)?,
        );
        Ok(vector.transpose())
    }

    /// The given column of the matrix as a column vector.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if the index is 3 or more.
    pub fn column(&self, col: usize) -> Result<Vector3<T>> {
        Ok(Vector3::new(
            self.element(0, col)?,
            self.element(1, col)?,
            self.element(2, col)?,
        ))
    }

    /// The cells in row-major order, as seen through the transposed flag.
    pub fn to_rows(&self) -> [[T; 3]; 3] {
        array::from_fn(|row| {
            array::from_fn(|col| self.cells[self.unchecked_flat_index(row, col)])
        })
    }

    /// Computes the determinant in `f64`.
    pub fn determinant(&self) -> f64 {
        determinant_of_rows(&self.logical_rows_f64())
    }

    /// Computes the inverse of the matrix. The computation is done in `f64`
    /// and the result converted to the element type, so integer matrices
    /// get truncated inverses.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] if the absolute determinant is at or
    /// below [`SINGULARITY_EPSILON`].
    pub fn inverse(&self) -> Result<Self> {
        self.try_scalar_div(T::ONE)
    }

    /// Computes `scalar` times the inverse of the matrix.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] if the absolute determinant is at or
    /// below [`SINGULARITY_EPSILON`].
    pub fn try_scalar_div<U: Element>(&self, scalar: U) -> Result<Self> {
        let scalar = scalar.as_f64();
        let inverse = inverse_of_rows(&self.logical_rows_f64())?;
        Ok(Self::from_f64_rows(
            inverse.map(|row| row.map(|cell| scalar * cell)),
        ))
    }

    /// Multiplies the matrix with the given column vector from the right,
    /// giving a new column vector with components `Σ_j m[i][j] * v[j]`.
    ///
    /// # Errors
    /// Returns [`MathError::OrientationMismatch`] if the vector is a row
    /// vector.
    pub fn try_mul_vector<U: Element>(&self, vector: &Vector3<U>) -> Result<Vector3<T>> {
        if vector.is_row() {
            return Err(MathError::OrientationMismatch {
                expected: Orientation::Column,
            });
        }
        let m = self.logical_rows_f64();
        let v = vector.components_f64();
        let product = m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2]);
        Ok(Vector3::from_f64_components(product, false))
    }

    /// Returns a matrix with the given closure applied to each cell. The
    /// storage layout and transposed flag are kept.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(T) -> T) -> Self {
        Self {
            cells: self.cells.map(f),
            transposed: self.transposed,
        }
    }

    pub(crate) fn logical_rows_f64(&self) -> [[f64; 3]; 3] {
        self.to_rows().map(|row| row.map(T::as_f64))
    }

    fn from_f64_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows.map(|row| row.map(T::from_f64)))
    }

    fn scaled(&self, scalar: f64) -> Self {
        self.mapped(|cell| T::from_f64(cell.as_f64() * scalar))
    }

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= 3 || col >= 3 {
            return Err(MathError::IndexOutOfRange { row, col });
        }
        Ok(self.unchecked_flat_index(row, col))
    }

    #[inline]
    const fn unchecked_flat_index(&self, row: usize, col: usize) -> usize {
        if self.transposed {
            col * 3 + row
        } else {
            row * 3 + col
        }
    }
}

fn determinant_of_rows(m: &[[f64; 3]; 3]) -> f64 {
    let [[a, b, c], [d, e, f], [g, h, i]] = *m;
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

fn inverse_of_rows(m: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
    let determinant = determinant_of_rows(m);
    log::trace!("Inverting matrix with determinant {determinant}");

    if determinant.abs() <= SINGULARITY_EPSILON {
        log::debug!("Refusing to invert singular matrix with determinant {determinant}");
        return Err(MathError::Singular { determinant });
    }

    let [[a, b, c], [d, e, f], [g, h, i]] = *m;
    let adjugate = [
        [e * i - f * h, c * h - b * i, b * f - c * e],
        [f * g - d * i, a * i - c * g, c * d - a * f],
        [d * h - e * g, b * g - a * h, a * e - b * d],
    ];
    let inv_determinant = determinant.recip();

    Ok(adjugate.map(|row| row.map(|cell| cell * inv_determinant)))
}

impl<T: Element> Default for Matrix33<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element> From<[[T; 3]; 3]> for Matrix33<T> {
    #[inline]
    fn from(rows: [[T; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Element> From<[T; 9]> for Matrix33<T> {
    #[inline]
    fn from(cells: [T; 9]) -> Self {
        Self::from_flat(cells)
    }
}

macro_rules! impl_scalar_ops_for_matrix {
    ($u:ty) => {
        impl<T: Element> Mul<$u> for Matrix33<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $u) -> Self::Output {
                self.scaled(cast::<f64, $u>(rhs))
            }
        }

        impl<T: Element> Div<$u> for Matrix33<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $u) -> Self::Output {
                self.scaled(cast::<f64, $u>(rhs).recip())
            }
        }

        impl<T: Element> MulAssign<$u> for Matrix33<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: $u) {
                *self = *self * rhs;
            }
        }

        impl<T: Element> DivAssign<$u> for Matrix33<T> {
            #[inline]
            fn div_assign(&mut self, rhs: $u) {
                *self = *self / rhs;
            }
        }

        /// Multiplies the scalar with the inverse of the matrix.
        ///
        /// # Panics
        /// If the matrix is singular.
        impl<T: Element> Div<Matrix33<T>> for $u {
            type Output = Matrix33<T>;

            #[inline]
            fn div(self, rhs: Matrix33<T>) -> Self::Output {
                or_panic(rhs.try_scalar_div(self))
            }
        }
    };
}

for_each_primitive!(impl_scalar_ops_for_matrix);

/// # Panics
/// If the vector is a row vector.
impl<T: Element, U: Element> Mul<Vector3<U>> for Matrix33<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<U>) -> Self::Output {
        or_panic(self.try_mul_vector(&rhs))
    }
}

/// # Panics
/// If either index is 3 or more.
impl<T: Element> Index<(usize, usize)> for Matrix33<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[or_panic(self.flat_index(row, col))]
    }
}

/// # Panics
/// If either index is 3 or more.
impl<T: Element> IndexMut<(usize, usize)> for Matrix33<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        or_panic(self.element_mut(row, col))
    }
}

/// Matrices are equal when all cells are equal as seen through their
/// transposed flags, regardless of how the cells are stored.
impl<T: Element, U: Element + AsPrimitive<T>> PartialEq<Matrix33<U>> for Matrix33<T> {
    fn eq(&self, other: &Matrix33<U>) -> bool {
        self.to_rows() == other.cast::<T>().to_rows()
    }
}

impl<T> AbsDiffEq for Matrix33<T>
where
    T: Element + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_rows()
            .iter()
            .flatten()
            .zip(other.to_rows().iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix33<T>
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
        self.to_rows()
            .iter()
            .flatten()
            .zip(other.to_rows().iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Renders the matrix row by row as `[a b c; d e f; g h i]`.
impl<T: Element> fmt::Display for Matrix33<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, [a, b, c]) in self.to_rows().into_iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{a} {b} {c}")?;
        }
        write!(f, "]")
    }
}
