//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::console::Session;
pub use crate::error::MatrizError;
pub use crate::primitives::{Dimension, Matrix};
pub use crate::render::RenderOptions;
