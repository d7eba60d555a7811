//! Derive a vector field and its divergence from a centred paraboloid.
//!
//! Run with: `RUST_LOG=debug cargo run --example paraboloid -- 40 40`
//!
//! Arguments are the grid extent `nx ny` (default 40×40). The grid spans
//! [0, 1] on each axis. Prints the ranges a renderer would normalize
//! against and the byte sizes it would upload.

use std::env;
use std::process::ExitCode;

use gridfield::potential::paraboloid;
use gridfield::{Shape2D, Spacing2D, VectorField, divergence_field, gradient_field_into};

const DEFAULT_EXTENT: usize = 40;

fn parse_extent(arg: Option<String>) -> Result<usize, String> {
    match arg {
        None => Ok(DEFAULT_EXTENT),
        Some(s) => s
            .parse()
            .map_err(|e| format!("invalid grid extent {s:?}: {e}")),
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let nx = parse_extent(args.next())?;
    let ny = parse_extent(args.next())?;

    let shape = Shape2D::try_new(nx, ny).map_err(|e| e.to_string())?;
    let h = Spacing2D::unit_domain(shape);
    log::info!("grid {} with spacing {}", shape, h);

    let potential = paraboloid(shape);
    let mut velocity = VectorField::with_shape(shape);
    gradient_field_into(&potential, h, &mut velocity).map_err(|e| e.to_string())?;
    let divergence = divergence_field(&velocity, h);

    if let Some((lo, hi)) = potential.range() {
        log::info!("potential range [{:.3}, {:.3}]", lo, hi);
    }
    log::info!("max |v| = {:.3}", velocity.max_magnitude());
    if let Some((lo, hi)) = divergence.range() {
        log::info!("divergence range [{:.3}, {:.3}]", lo, hi);
    }

    println!(
        "{}: scalar texture {} bytes, vector buffer {} bytes",
        shape,
        divergence.normalized().size_bytes(),
        velocity.size_bytes()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
