//! Strongly-typed grid descriptors.
//!
//! Grid extent and cell spacing are separate types so that a caller cannot
//! pass `(nx, ny)` where `(hx, hy)` is expected.
//!
//! # Example
//!
//! ```
//! use gridfield::types::{CellRegion, Shape2D, Spacing2D};
//!
//! let shape = Shape2D::new(40, 40);
//! let h = Spacing2D::unit_domain(shape);
//!
//! assert_eq!(shape.region(20, 0), CellRegion::Top);
//! assert_eq!(h.hx(), 0.025);
//! ```

mod region;
mod shape;
mod spacing;

pub use region::{CellRegion, Corner};
pub use shape::Shape2D;
pub use spacing::Spacing2D;

/// 2-component `f32` vector stored in vector fields.
pub use glam::Vec2;
