//! Grid-shaped field storage.
//!
//! - [`GridField`]: double-buffered container for any `Pod` cell type
//! - [`ScalarField`]: one `f32` per cell
//! - [`VectorField`]: one [`Vec2`](crate::types::Vec2) per cell
//!
//! All fields share the `y * nx + x` cell mapping of
//! [`Shape2D`](crate::types::Shape2D), so `scalar.data()[i]` and
//! `vector.data()[i]` refer to the same cell.

mod grid_field;
mod scalar;
mod vector;

pub use grid_field::{BufferSlot, GridField};
pub use scalar::ScalarField;
pub use vector::VectorField;
