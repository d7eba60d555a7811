//! End-to-end scenario: a centred paraboloid on a 40×40 grid spanning
//! [0, 1]², pushed through gradient and then divergence.
//!
//! With f = -((x - cx)² + (y - cy)²) sampled in cell units and spacing
//! h = 1/n, central differences are exact for the quadratic, so every
//! interior cell must give v = (-2 (x - cx) / hx, -2 (y - cy) / hy).

use gridfield::potential::{cosine_bowl, linear, paraboloid};
use gridfield::{Shape2D, Spacing2D, divergence_field, gradient_field};

const N: usize = 40;

fn rel_close(got: f32, want: f32, rtol: f32) -> bool {
    (got - want).abs() <= rtol * want.abs().max(1.0)
}

#[test]
fn test_paraboloid_gradient_interior() {
    let shape = Shape2D::square(N);
    let h = Spacing2D::unit_domain(shape);
    let (cx, cy) = (N as f32 * 0.5, N as f32 * 0.5);

    let f = paraboloid(shape);
    let v = gradient_field(&f, h);

    for y in 1..N - 1 {
        for x in 1..N - 1 {
            let g = v.get(x, y);
            let want_x = -2.0 * (x as f32 - cx) / h.hx();
            let want_y = -2.0 * (y as f32 - cy) / h.hy();
            assert!(
                rel_close(g.x, want_x, 1e-5) && rel_close(g.y, want_y, 1e-5),
                "cell ({}, {}): got {:?}, want ({}, {})",
                x,
                y,
                g,
                want_x,
                want_y
            );
        }
    }
}

#[test]
fn test_paraboloid_gradient_points_to_centre() {
    let shape = Shape2D::square(N);
    let v = gradient_field(&paraboloid(shape), Spacing2D::unit_domain(shape));
    let c = N / 2;

    assert_eq!(v.get(c, c).x, 0.0);
    assert_eq!(v.get(c, c).y, 0.0);
    assert!(v.get(c - 5, c).x > 0.0);
    assert!(v.get(c + 5, c).x < 0.0);
    assert!(v.get(c, c - 5).y > 0.0);
    assert!(v.get(c, c + 5).y < 0.0);
}

#[test]
fn test_paraboloid_divergence_is_constant_deep_inside() {
    // Cells two away from the edge only see central gradient values:
    // div = -2/hx² - 2/hy²
    let shape = Shape2D::new(N, N / 2);
    let h = Spacing2D::unit_domain(shape);
    let v = gradient_field(&paraboloid(shape), h);
    let div = divergence_field(&v, h);

    let want = -2.0 / (h.hx() * h.hx()) - 2.0 / (h.hy() * h.hy());
    for y in 2..shape.ny() - 2 {
        for x in 2..shape.nx() - 2 {
            assert!(
                rel_close(div.get(x, y), want, 1e-4),
                "cell ({}, {}): got {}, want {}",
                x,
                y,
                div.get(x, y),
                want
            );
        }
    }
}

#[test]
fn test_paraboloid_divergence_boundary_zero() {
    let shape = Shape2D::square(N);
    let h = Spacing2D::unit_domain(shape);
    let div = divergence_field(&gradient_field(&paraboloid(shape), h), h);

    for (x, y, &d) in div.iter_cells() {
        if shape.is_boundary(x, y) {
            assert_eq!(d, 0.0, "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_linear_potential_every_cell() {
    let shape = Shape2D::new(12, 7);
    let v = gradient_field(&linear(shape, 1.5, -0.5), Spacing2D::unit());
    for (x, y, g) in v.iter_cells() {
        assert!(
            (g.x - 1.5).abs() < 1e-5 && (g.y + 0.5).abs() < 1e-5,
            "cell ({}, {}): {:?}",
            x,
            y,
            g
        );
    }
}

#[test]
fn test_cosine_bowl_outputs_are_finite() {
    let shape = Shape2D::square(N);
    let h = Spacing2D::unit_domain(shape);
    let v = gradient_field(&cosine_bowl(shape), h);
    let div = divergence_field(&v, h);

    assert!(v.is_finite());
    assert!(div.is_finite());
    assert!(v.max_magnitude() > 0.0);

    let normalized = div.normalized();
    let (lo, hi) = normalized.range().unwrap();
    assert!(lo.abs() < 1e-6 && (hi - 1.0).abs() < 1e-6);
}
