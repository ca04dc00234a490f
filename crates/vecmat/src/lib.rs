//! Generic 3D vectors and 3x3 matrices with row/column orientation.

#[macro_use]
mod macros;

pub mod error;
pub mod matrix;
pub mod num;
pub mod vector;

pub use error::{MathError, Result};
pub use matrix::Matrix33;
pub use num::Element;
pub use vector::{Orientation, Vector3};
