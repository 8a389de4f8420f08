//! Error types for the checked math variants

use thiserror::Error;

/// Degenerate input rejected by [`crate::checked`]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix has no inverse
    #[error("Matrix is singular (determinant {determinant})")]
    Singular { determinant: f32 },

    /// Near and far planes cannot produce a projection
    #[error("Invalid depth range: near {near}, far {far}")]
    DepthRange { near: f32, far: f32 },

    /// Aspect ratio is zero or not finite
    #[error("Invalid aspect ratio: {0}")]
    Aspect(f32),

    /// Eye, target and up do not span a camera basis
    #[error("Degenerate camera basis: {0}")]
    DegenerateBasis(&'static str),
}

pub type Result<T> = std::result::Result<T, MathError>;
