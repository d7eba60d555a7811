//! Gradient of a scalar potential on a structured grid.
//!
//! For a potential f on an nx × ny grid with spacing (hx, hy), each cell
//! gets v ≈ ∇f using the stencil of its region:
//!
//! | Region   | v.x                          | v.y                          |
//! |----------|------------------------------|------------------------------|
//! | Interior | (f[x+1] - f[x-1]) / (2 hx)   | (f[y+1] - f[y-1]) / (2 hy)   |
//! | Top      | central                      | (f[y+1] - f[y]) / hy         |
//! | Bottom   | central                      | (f[y] - f[y-1]) / hy         |
//! | Left     | (f[x+1] - f[x]) / hx         | central                      |
//! | Right    | (f[x] - f[x-1]) / hx         | central                      |
//!
//! Central differences are second order; the one-sided edge differences
//! are first order. Corners have no stencil: once every edge and interior
//! cell is written, each corner is set to the mean of its two
//! edge-adjacent neighbours (see [`Corner::neighbors`]).

use crate::error::{FieldError, Result};
use crate::field::{ScalarField, VectorField};
use crate::types::{CellRegion, Corner, Shape2D, Spacing2D, Vec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute the gradient of `input` into a new vector field.
///
/// # Panics
///
/// Panics if the grid is smaller than 3×3.
pub fn gradient_field(input: &ScalarField, spacing: Spacing2D) -> VectorField {
    let mut output = VectorField::with_shape(input.shape());
    if let Err(e) = gradient_field_into(input, spacing, &mut output) {
        panic!("{e}");
    }
    output
}

/// Compute the gradient of `input` into the active buffer of `output`.
///
/// Only `input` is read and only `output`'s active buffer is written.
/// On error nothing is written.
///
/// # Errors
///
/// - [`FieldError::ShapeMismatch`] if `output` has a different shape
/// - [`FieldError::DegenerateShape`] if the grid is smaller than 3×3
pub fn gradient_field_into(
    input: &ScalarField,
    spacing: Spacing2D,
    output: &mut VectorField,
) -> Result<()> {
    let shape = check_shapes(input, output)?;
    log::debug!("gradient over {} grid, spacing {}", shape, spacing);
    if !input.is_finite() {
        log::warn!("gradient input on {} grid contains non-finite values", shape);
    }

    let f = input.data();
    let out = output.data_mut();
    for (y, row) in out.chunks_mut(shape.nx()).enumerate() {
        gradient_row(f, shape, spacing, y, row);
    }
    resolve_corners(shape, out);

    Ok(())
}

/// Compute the gradient in parallel, one rayon task per row.
///
/// Produces the same values as [`gradient_field`]. Enable with the
/// `parallel` feature.
///
/// # Panics
///
/// Panics if the grid is smaller than 3×3.
#[cfg(feature = "parallel")]
pub fn gradient_field_parallel(input: &ScalarField, spacing: Spacing2D) -> VectorField {
    let mut output = VectorField::with_shape(input.shape());
    let shape = match check_shapes(input, &output) {
        Ok(shape) => shape,
        Err(e) => panic!("{e}"),
    };
    log::debug!("parallel gradient over {} grid, spacing {}", shape, spacing);
    if !input.is_finite() {
        log::warn!("gradient input on {} grid contains non-finite values", shape);
    }

    let f = input.data();
    let out = output.data_mut();
    out.par_chunks_mut(shape.nx())
        .enumerate()
        .for_each(|(y, row)| gradient_row(f, shape, spacing, y, row));
    resolve_corners(shape, out);

    output
}

fn check_shapes(input: &ScalarField, output: &VectorField) -> Result<Shape2D> {
    let shape = input.shape();
    if output.shape() != shape {
        return Err(FieldError::shape_mismatch(shape, output.shape()));
    }
    if !shape.supports_stencil() {
        return Err(FieldError::DegenerateShape(shape));
    }
    Ok(shape)
}

/// Fill row `y` of the output. Corner cells are zeroed here and
/// overwritten by [`resolve_corners`].
fn gradient_row(f: &[f32], shape: Shape2D, h: Spacing2D, y: usize, row: &mut [Vec2]) {
    let nx = shape.nx();
    let (hx, hy) = (h.hx(), h.hy());
    let (two_hx, two_hy) = (2.0 * hx, 2.0 * hy);

    for (x, v) in row.iter_mut().enumerate() {
        let i = shape.index(x, y);

        let central_x = || (f[i + 1] - f[i - 1]) / two_hx;
        let central_y = || (f[i + nx] - f[i - nx]) / two_hy;

        *v = match shape.region(x, y) {
            CellRegion::Interior => Vec2::new(central_x(), central_y()),
            CellRegion::Top => Vec2::new(central_x(), (f[i + nx] - f[i]) / hy),
            CellRegion::Bottom => Vec2::new(central_x(), (f[i] - f[i - nx]) / hy),
            CellRegion::Left => Vec2::new((f[i + 1] - f[i]) / hx, central_y()),
            CellRegion::Right => Vec2::new((f[i] - f[i - 1]) / hx, central_y()),
            CellRegion::Corner(_) => Vec2::ZERO,
        };
    }
}

/// Set each corner to the mean of its two edge-adjacent neighbours.
fn resolve_corners(shape: Shape2D, out: &mut [Vec2]) {
    for corner in Corner::ALL {
        let (x, y) = corner.cell(shape);
        // Stencil support was checked before any row was written
        let Some([(ax, ay), (bx, by)]) = corner.neighbors(shape) else {
            continue;
        };
        let a = out[shape.index(ax, ay)];
        let b = out[shape.index(bx, by)];
        out[shape.index(x, y)] = 0.5 * (a + b);
    }
}
