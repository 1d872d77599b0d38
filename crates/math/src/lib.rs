//! Math: fixed-size vectors and column-major 3x3/4x4 matrices for model, view
//! and projection transforms.
//!
//! # Invariants
//! - Every value type has a fixed arity; wrong-length slices are rejected at
//!   construction.
//! - Default-constructed matrices are the identity.
//! - Matrix inversion is the only fallible operation and reports
//!   [`MatrixError::Singular`] instead of producing non-finite values.

mod error;
mod mat3;
mod mat4;
mod vec;

pub use error::MatrixError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec::{Vec2, Vec3, Vec4};

pub fn crate_info() -> &'static str {
    "orrery-math v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("math"));
    }
}
