/// Errors from matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The determinant is exactly zero, so no inverse exists.
    #[error("{dim}x{dim} matrix is not invertible (zero determinant)")]
    Singular { dim: usize },
}
