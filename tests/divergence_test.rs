//! Divergence operator properties.

use gridfield::{
    FieldError, ScalarField, Shape2D, Spacing2D, Vec2, VectorField, divergence_field,
    divergence_field_into,
};
use proptest::prelude::*;

fn random_vector_field() -> impl Strategy<Value = VectorField> {
    (1usize..14, 1usize..14).prop_flat_map(|(nx, ny)| {
        prop::collection::vec((-50.0f32..50.0, -50.0f32..50.0), nx * ny).prop_map(move |cells| {
            let data = cells.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
            VectorField::from_vec(Shape2D::new(nx, ny), data).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_boundary_is_exactly_zero(
        v in random_vector_field(),
        hx in 0.01f32..5.0,
        hy in 0.01f32..5.0,
    ) {
        let div = divergence_field(&v, Spacing2D::new(hx, hy));
        let shape = div.shape();

        for (x, y, &d) in div.iter_cells() {
            if shape.is_boundary(x, y) {
                prop_assert_eq!(d.to_bits(), 0.0f32.to_bits(), "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn prop_uniform_spacing_matches_single_step_formula(
        v in random_vector_field(),
        h in 0.05f32..3.0,
    ) {
        let div = divergence_field(&v, Spacing2D::uniform(h));
        let shape = v.shape();
        let nx = shape.nx();
        let d = v.data();

        for (x, y, &got) in div.iter_cells() {
            if shape.is_boundary(x, y) {
                continue;
            }
            let i = shape.index(x, y);
            let want = (1.0 / (2.0 * h)) * ((d[i + 1].x - d[i - 1].x) + (d[i + nx].y - d[i - nx].y));
            prop_assert!(
                (got - want).abs() <= 1e-5 * (1.0 + want.abs()),
                "cell ({}, {}): got {}, want {}",
                x, y, got, want
            );
        }
    }
}

#[test]
fn test_identity_field_on_5x5_unit_grid() {
    let v = VectorField::from_fn(5, 5, |x, y| Vec2::new(x as f32, y as f32));
    let div = divergence_field(&v, Spacing2D::unit());

    #[rustfmt::skip]
    let expected: [f32; 25] = [
        0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 2.0, 2.0, 2.0, 0.0,
        0.0, 2.0, 2.0, 2.0, 0.0,
        0.0, 2.0, 2.0, 2.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0,
    ];
    assert_eq!(div.data(), &expected[..]);
}

#[test]
fn test_identity_field_scales_as_two_over_h() {
    for h in [0.1f32, 0.25, 0.5, 2.0] {
        let v = VectorField::from_fn(6, 6, |x, y| Vec2::new(x as f32, y as f32));
        let div = divergence_field(&v, Spacing2D::uniform(h));
        for y in 1..5 {
            for x in 1..5 {
                let d = div.get(x, y);
                assert!(
                    (d - 2.0 / h).abs() < 1e-4 * (2.0 / h),
                    "h={}: cell ({}, {}) = {}, want {}",
                    h,
                    x,
                    y,
                    d,
                    2.0 / h
                );
            }
        }
    }
}

#[test]
fn test_non_square_spacing_weights_axes_independently() {
    // vx depends on x only, vy on y only
    let v = VectorField::from_fn(9, 5, |x, y| Vec2::new(3.0 * x as f32, -(y as f32)));
    let div = divergence_field(&v, Spacing2D::new(0.5, 0.25));
    // 3 / 0.5 - 1 / 0.25 = 2
    for y in 1..4 {
        for x in 1..8 {
            assert!((div.get(x, y) - 2.0).abs() < 1e-5);
        }
    }
}

#[test]
fn test_into_shape_mismatch_writes_nothing() {
    let v = VectorField::new(6, 6);
    let mut out = ScalarField::new(6, 5);
    out.fill(-1.0);

    assert!(matches!(
        divergence_field_into(&v, Spacing2D::unit(), &mut out),
        Err(FieldError::ShapeMismatch { .. })
    ));
    assert!(out.data().iter().all(|&d| d == -1.0));
}
