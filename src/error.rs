//! Error types for grid fields and finite-difference operators.
//!
//! Every variant is a precondition violation: the operation that reports it
//! has not written anything. Allocating convenience APIs turn these into
//! panics carrying the same message.

use thiserror::Error;

use crate::types::Shape2D;

/// Errors raised when a field or operator precondition does not hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A grid extent was zero, so the field would have no cells.
    #[error("grid shape must have at least one cell, got {nx}x{ny}")]
    EmptyShape { nx: usize, ny: usize },

    /// `nx * ny` does not fit in `usize`.
    #[error("grid shape {nx}x{ny} overflows the addressable cell count")]
    ShapeOverflow { nx: usize, ny: usize },

    /// A buffer handed to a field does not hold one value per cell.
    #[error("buffer length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `copy_from` between fields with different cell counts.
    #[error("cell count mismatch in copy: destination has {expected}, source has {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Operator output does not have the same shape as its input.
    #[error("shape mismatch: input is {expected}, output is {actual}")]
    ShapeMismatch { expected: Shape2D, actual: Shape2D },

    /// The grid is too small for the edge/interior/corner stencils.
    #[error("stencil needs at least 3x3 cells, got {0}")]
    DegenerateShape(Shape2D),

    /// Cell spacing must be strictly positive and finite.
    #[error("cell spacing must be positive and finite, got hx={hx}, hy={hy}")]
    InvalidSpacing { hx: f32, hy: f32 },
}

impl FieldError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(expected: Shape2D, actual: Shape2D) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

/// Result type for field and operator preconditions.
pub type Result<T> = std::result::Result<T, FieldError>;
