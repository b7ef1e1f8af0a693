//! Vector and matrix math
//!
//! This module provides:
//! - 2D and homogeneous 4D vectors (vec submodule)
//! - 4x4 frame, view and projection matrices (matrix submodule)
//! - scalar constants and helpers (scalar submodule)
//! - random scalars and vectors (random submodule)

mod matrix;
pub mod random;
pub mod scalar;
mod vec;

pub use matrix::*;
pub use vec::*;
