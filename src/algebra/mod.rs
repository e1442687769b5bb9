//! Lamina algebra module.
//!
//! Element domains, the four matrix storage kinds and the [`Matrix`] enum that
//! dispatches binary operations between them.
//!
//! All matrix types are generic over an [`ElementT`] domain: `f32`, `f64`,
//! `Complex<f32>`, `Complex<f64>`, `i32` or `i64`.

mod element;
mod error_types;
mod floats;
mod matrix_traits;
mod settings;
mod vecmath;
pub use element::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use settings::*;
pub use vecmath::*;

// the storage kinds
mod crs;
mod dense;
mod diagonal;
mod tridiagonal;
pub use crs::*;
pub use dense::*;
pub use diagonal::*;
pub use tridiagonal::*;

// the dispatch enum and operation tables
mod dispatch;
mod matrix_types;
pub use matrix_types::*;

#[cfg(test)]
mod tests;
