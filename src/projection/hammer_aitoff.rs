//! Hammer-Aitoff equal-area projection.
//!
//! Closed-form azimuthal formula; no iterative solve. Shares the
//! normalization extrema `(±2√2, ±√2)` with Mollweide.

use std::f64::consts::SQRT_2;

use super::{clamp_pixel, Projection};

/// Hammer-Aitoff projection
pub struct HammerAitoff;

impl Projection for HammerAitoff {
    fn project(&self, values: &[f64], width: u32, height: u32) -> (u32, u32) {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let lam = (values[0] - 180.0).to_radians();
        let phi = values[1].to_radians();

        let cos_phi = phi.cos();

        // For ra in [0,360] and dec in [-90,90] the radicand is >= 1,
        // so z never vanishes.
        let z = (1.0 + cos_phi * (lam / 2.0).cos()).sqrt();

        let x_proj = (2.0 * SQRT_2 * cos_phi * (lam / 2.0).sin()) / z;
        let y_proj = (SQRT_2 * phi.sin()) / z;

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
        "hammer-aitoff"
    }
}
