//! Finite-difference operators on grid fields.
//!
//! This module provides:
//! - [`gradient_field`]: scalar potential → vector field, with distinct
//!   interior, edge, and corner policies
//! - [`divergence_field`]: vector field → scalar field, interior central
//!   differences with a zero boundary ring
//!
//! Both are pure: they read only their input and write only the output's
//! active buffer, so no cell depends on another cell's result within a pass.
//! The `_into` variants write into a caller-supplied field; the `parallel`
//! feature adds row-parallel versions.
//!
//! # Example
//!
//! ```
//! use gridfield::field::ScalarField;
//! use gridfield::operators::{divergence_field, gradient_field};
//! use gridfield::types::Spacing2D;
//!
//! let f = ScalarField::from_fn(5, 5, |x, y| (x * x + y * y) as f32);
//! let h = Spacing2D::unit();
//!
//! let v = gradient_field(&f, h);
//! let div = divergence_field(&v, h);
//!
//! // Laplacian of x² + y² is 4 away from the edges
//! assert_eq!(div.get(2, 2), 4.0);
//! ```

mod divergence;
mod gradient;

pub use divergence::{divergence_field, divergence_field_into};
pub use gradient::{gradient_field, gradient_field_into};

#[cfg(feature = "parallel")]
pub use divergence::divergence_field_parallel;
#[cfg(feature = "parallel")]
pub use gradient::gradient_field_parallel;
