//! Analytic seed potentials.
//!
//! Each function samples a closed-form potential at integer cell
//! coordinates `(x, y)` of the given shape. They are the static inputs a
//! driver feeds through [`gradient_field`](crate::operators::gradient_field).

use std::f32::consts::PI;

use crate::field::ScalarField;
use crate::types::Shape2D;

/// Downward paraboloid centred on the grid:
///
/// f(x, y) = -((y - ny/2)² + (x - nx/2)²)
///
/// Its gradient points towards the centre with slope `-2 (x - nx/2)` per
/// cell; the divergence of that gradient is the constant `-4` per cell².
pub fn paraboloid(shape: Shape2D) -> ScalarField {
    let cx = shape.nx() as f64 * 0.5;
    let cy = shape.ny() as f64 * 0.5;
    ScalarField::from_fn(shape.nx(), shape.ny(), |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        (-(dy * dy + dx * dx)) as f32
    })
}

/// Periodic bowl, one full cosine period along each axis:
///
/// f(x, y) = -(cos(2πy / ny) + cos(2πx / nx))
pub fn cosine_bowl(shape: Shape2D) -> ScalarField {
    let kx = 2.0 * PI / shape.nx() as f32;
    let ky = 2.0 * PI / shape.ny() as f32;
    ScalarField::from_fn(shape.nx(), shape.ny(), |x, y| {
        -((y as f32 * ky).cos() + (x as f32 * kx).cos())
    })
}

/// Plane f(x, y) = a·x + b·y in cell units.
pub fn linear(shape: Shape2D, a: f32, b: f32) -> ScalarField {
    ScalarField::from_fn(shape.nx(), shape.ny(), |x, y| a * x as f32 + b * y as f32)
}
