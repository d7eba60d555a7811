//! Scalar field helpers: value range and normalization for display.

use crate::field::GridField;

/// One `f32` per cell.
pub type ScalarField = GridField<f32>;

impl GridField<f32> {
    /// Minimum and maximum over the finite cells of the active buffer.
    ///
    /// Returns `None` if no cell is finite.
    pub fn range(&self) -> Option<(f32, f32)> {
        self.data()
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Copy of the field with `[min, max]` mapped onto `[0, 1]`.
    ///
    /// A flat field (or one with no finite values) maps to all zeros.
    /// Non-finite cells stay non-finite.
    pub fn normalized(&self) -> ScalarField {
        let mapped: Vec<f32> = match self.range() {
            Some((lo, hi)) if hi > lo => {
                let inv_range = 1.0 / (hi - lo);
                self.data().iter().map(|&v| (v - lo) * inv_range).collect()
            }
            _ => {
                log::debug!("normalizing flat {} field to zero", self.shape());
                self.data()
                    .iter()
                    .map(|&v| if v.is_finite() { 0.0 } else { v })
                    .collect()
            }
        };
        GridField::from_active(self.shape(), mapped)
    }

    /// Whether every cell of the active buffer is finite.
    pub fn is_finite(&self) -> bool {
        self.data().iter().all(|v| v.is_finite())
    }
}
