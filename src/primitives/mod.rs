//! Core compute primitives (Dimension, Matrix).
//!
//! These types are the foundation for every calculator operation.

mod dimension;
mod matrix;

pub use dimension::Dimension;
pub use matrix::Matrix;
