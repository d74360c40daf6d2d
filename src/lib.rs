//! Matriz: interactive console calculator for dense real-valued matrices.
//!
//! The library core is pure: construction, element access, addition, scalar
//! and matrix multiplication, the four transpose variants, and the
//! minor/cofactor/determinant/adjoint/inverse family, plus formatted
//! rendering. The `console` module layers the interactive menu on top; the
//! core itself performs no I/O.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let dim = Dimension::new(2, 2).unwrap();
//! let a = Matrix::from_vec(dim, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! assert_eq!(a.determinant().unwrap(), -2.0);
//!
//! let inv = a.inverse().unwrap();
//! let product = a.matmul(&inv).unwrap();
//! assert!((product.get(0, 0) - 1.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core `Dimension` and `Matrix` types
//! - [`linalg`]: Transposes, determinant, adjoint, inverse
//! - [`render`]: Column-aligned "#.##" rendering
//! - [`console`]: Input parsing and the interactive menu session
//! - [`error`]: The crate-wide [`MatrizError`](error::MatrizError) type

pub mod console;
pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;
pub mod render;

pub use error::MatrizError;
pub use primitives::{Dimension, Matrix};
pub use render::RenderOptions;
