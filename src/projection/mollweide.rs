//! Mollweide equal-area projection.
//!
//! The auxiliary angle theta has no closed form: `2θ + sin 2θ = π sin φ` is
//! solved per-row by Newton iteration with a fixed iteration cap, so the
//! cost of a pathological latitude is bounded.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use super::{clamp_pixel, Projection};

/// Newton iteration cap. Convergence is typically reached in 3-5 steps.
const MAX_ITERATIONS: usize = 10;

/// Stop once the update magnitude drops below this.
const TOLERANCE: f64 = 1e-10;

/// Mollweide projection
pub struct Mollweide;

/// Solve `2θ + sin 2θ = π sin φ` for theta, given latitude phi in radians.
///
/// At the poles the equation degenerates (the Newton denominator
/// `2 + 2 cos 2θ` vanishes); `θ = ±π/2` is the exact solution there, so it
/// is returned directly.
pub(crate) fn solve_theta(phi: f64) -> f64 {
    if phi.abs() >= FRAC_PI_2 - 1e-9 {
        return FRAC_PI_2.copysign(phi);
    }

    let mut theta = phi;
    for _ in 0..MAX_ITERATIONS {
        let numerator = 2.0 * theta + (2.0 * theta).sin() - PI * phi.sin();
        let denominator = 2.0 + 2.0 * (2.0 * theta).cos();
        let delta = numerator / denominator;
        theta -= delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    theta
}

impl Projection for Mollweide {
    fn project(&self, values: &[f64], width: u32, height: u32) -> (u32, u32) {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let ra = values[0].to_radians();
        let dec = values[1].to_radians();

        let lam = ra - PI;
        let theta = solve_theta(dec);

        // x_proj ranges over [-2sqrt2, 2sqrt2], y_proj over [-sqrt2, sqrt2]
        let x_proj = (2.0 * SQRT_2 / PI) * lam * theta.cos();
        let y_proj = SQRT_2 * theta.sin();

        let x_norm = (x_proj + 2.0 * SQRT_2) / (4.0 * SQRT_2);
        let y_norm = (y_proj + SQRT_2) / (2.0 * SQRT_2);

        let x = clamp_pixel(x_norm * width as f64, width);
        let y = clamp_pixel((1.0 - y_norm) * height as f64, height);

        (x, y)
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["ra", "dec"]
    }

    fn name(&self) -> &str {
        "mollweide"
    }
}
