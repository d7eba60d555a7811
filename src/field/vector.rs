//! Vector field helpers.

use crate::field::{GridField, ScalarField};
use crate::types::Vec2;

/// One 2-component `f32` vector per cell.
pub type VectorField = GridField<Vec2>;

impl GridField<Vec2> {
    /// Per-cell Euclidean length, as a scalar field of the same shape.
    pub fn magnitude(&self) -> ScalarField {
        let lengths: Vec<f32> = self.data().iter().map(|v| v.length()).collect();
        GridField::from_active(self.shape(), lengths)
    }

    /// Largest finite vector length, or `0.0` if there is none.
    ///
    /// Drivers use this to scale glyphs so the longest arrow spans one cell.
    pub fn max_magnitude(&self) -> f32 {
        self.data()
            .iter()
            .map(|v| v.length())
            .filter(|l| l.is_finite())
            .fold(0.0, f32::max)
    }

    /// Whether both components of every cell are finite.
    pub fn is_finite(&self) -> bool {
        self.data().iter().all(|v| v.is_finite())
    }
}
