//! # gridfield
//!
//! Grid-shaped fields and the finite-difference operators that derive a
//! vector field and its divergence from a scalar potential.
//!
//! This crate provides:
//! - Strongly-typed grid shape and spacing ([`Shape2D`], [`Spacing2D`])
//! - Double-buffered field storage ([`GridField`], [`ScalarField`], [`VectorField`])
//! - Gradient with interior/edge/corner stencils ([`gradient_field`])
//! - Interior central-difference divergence ([`divergence_field`])
//! - Analytic seed potentials ([`potential`])
//!
//! The core is a single non-iterative pass: a potential goes through
//! [`gradient_field`], the result through [`divergence_field`], and both
//! outputs are handed to a renderer via [`GridField::as_bytes`].
//!
//! ```
//! use gridfield::{Shape2D, Spacing2D, divergence_field, gradient_field, potential};
//!
//! let shape = Shape2D::new(40, 40);
//! let h = Spacing2D::unit_domain(shape);
//!
//! let f = potential::paraboloid(shape);
//! let v = gradient_field(&f, h);
//! let div = divergence_field(&v, h);
//!
//! assert_eq!(v.cell_count(), 1600);
//! assert_eq!(div.get(0, 0), 0.0);
//! ```
//!
//! ## Features
//!
//! - `parallel`: row-parallel operator variants using rayon
//! - `serde`: `Serialize`/`Deserialize` for [`Shape2D`], [`Spacing2D`] and [`Vec2`]

pub mod error;
pub mod field;
pub mod operators;
pub mod potential;
pub mod types;

pub use error::{FieldError, Result};
pub use field::{BufferSlot, GridField, ScalarField, VectorField};
pub use operators::{divergence_field, divergence_field_into, gradient_field, gradient_field_into};
pub use types::{CellRegion, Corner, Shape2D, Spacing2D, Vec2};

#[cfg(feature = "parallel")]
pub use operators::{divergence_field_parallel, gradient_field_parallel};
