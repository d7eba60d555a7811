//! Divergence of a vector field by central differences.
//!
//! div(x, y) ≈ (vx[x+1] - vx[x-1]) / (2 hx) + (vy[y+1] - vy[y-1]) / (2 hy)
//!
//! on interior cells only. Every cell on the outer ring is exactly zero:
//! no one-sided estimate is attempted there.
//!
//! With a uniform spacing the two terms share one factor and the stencil
//! reduces to `(1 / 2h) * (Δvx + Δvy)`. A caller that wants that square-grid
//! behaviour on a non-square grid must collapse the spacing explicitly with
//! [`Spacing2D::uniform`].

use crate::error::{FieldError, Result};
use crate::field::{ScalarField, VectorField};
use crate::types::{Shape2D, Spacing2D, Vec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute the divergence of `input` into a new scalar field.
pub fn divergence_field(input: &VectorField, spacing: Spacing2D) -> ScalarField {
    let mut output = ScalarField::with_shape(input.shape());
    if let Err(e) = divergence_field_into(input, spacing, &mut output) {
        panic!("{e}");
    }
    output
}

/// Compute the divergence of `input` into the active buffer of `output`.
///
/// Grids narrower than three cells on either axis have no interior; the
/// output is then all zeros.
///
/// # Errors
///
/// [`FieldError::ShapeMismatch`] if `output` has a different shape. On
/// error nothing is written.
pub fn divergence_field_into(
    input: &VectorField,
    spacing: Spacing2D,
    output: &mut ScalarField,
) -> Result<()> {
    let shape = check_shapes(input, output)?;
    log::debug!("divergence over {} grid, spacing {}", shape, spacing);
    if !input.is_finite() {
        log::warn!("divergence input on {} grid contains non-finite values", shape);
    }

    let v = input.data();
    for (y, row) in output.data_mut().chunks_mut(shape.nx()).enumerate() {
        divergence_row(v, shape, spacing, y, row);
    }

    Ok(())
}

/// Compute the divergence in parallel, one rayon task per row.
///
/// Produces the same values as [`divergence_field`]. Enable with the
/// `parallel` feature.
#[cfg(feature = "parallel")]
pub fn divergence_field_parallel(input: &VectorField, spacing: Spacing2D) -> ScalarField {
    let shape = input.shape();
    log::debug!("parallel divergence over {} grid, spacing {}", shape, spacing);
    if !input.is_finite() {
        log::warn!("divergence input on {} grid contains non-finite values", shape);
    }

    let mut output = ScalarField::with_shape(shape);
    let v = input.data();
    output
        .data_mut()
        .par_chunks_mut(shape.nx())
        .enumerate()
        .for_each(|(y, row)| divergence_row(v, shape, spacing, y, row));

    output
}

fn check_shapes(input: &VectorField, output: &ScalarField) -> Result<Shape2D> {
    let shape = input.shape();
    if output.shape() != shape {
        return Err(FieldError::shape_mismatch(shape, output.shape()));
    }
    Ok(shape)
}

fn divergence_row(v: &[Vec2], shape: Shape2D, h: Spacing2D, y: usize, row: &mut [f32]) {
    let nx = shape.nx();
    if y == 0 || y + 1 == shape.ny() {
        row.fill(0.0);
        return;
    }

    let (two_hx, two_hy) = (2.0 * h.hx(), 2.0 * h.hy());
    let uniform = h.is_uniform();

    for (x, d) in row.iter_mut().enumerate() {
        if x == 0 || x + 1 == nx {
            *d = 0.0;
            continue;
        }
        let i = shape.index(x, y);
        let dvx = v[i + 1].x - v[i - 1].x;
        let dvy = v[i + nx].y - v[i - nx].y;

        *d = if uniform {
            (dvx + dvy) / two_hx
        } else {
            dvx / two_hx + dvy / two_hy
        };
    }
}
