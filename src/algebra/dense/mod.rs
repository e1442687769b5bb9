mod core;
mod kron;
mod matrix_math;
pub use self::core::*;
