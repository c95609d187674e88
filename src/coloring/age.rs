//! Estimated-age gradient coloring.
//!
//! Age is a heuristic blend of color index and absolute magnitude, not a
//! physically rigorous isochrone fit. Young stars render blue-green, old
//! stars render warm.

use super::{clamp_channel, Coloring, Rgb};

/// Age range in gigayears covered by the gradient
const AGE_MIN_GYR: f64 = 0.1;
const AGE_MAX_GYR: f64 = 13.8;

/// Apparent G magnitude to absolute magnitude via the parallax distance.
///
/// A non-positive parallax leaves the apparent magnitude unchanged.
fn apparent_to_absolute_mag(phot_g_mean_mag: f64, parallax: f64) -> f64 {
    if parallax <= 0.0 {
        return phot_g_mean_mag;
    }
    let distance_pc = 1000.0 / parallax;
    phot_g_mean_mag - 5.0 * (distance_pc.log10() - 1.0)
}

/// Heuristic stellar age in gigayears from color and absolute magnitude
fn estimate_age(bp_rp: f64, g_abs_mag: f64) -> f64 {
    let bp_rp = bp_rp.clamp(0.0, 3.0);
    let g_abs_mag = g_abs_mag.clamp(-5.0, 15.0);

    let color_factor = (bp_rp / 3.0).powf(1.5);
    let brightness_factor = (g_abs_mag + 5.0) / 20.0;

    let age_gyr = 0.5 + 12.0 * (color_factor * 0.7 + brightness_factor * 0.3);
    age_gyr.min(AGE_MAX_GYR)
}

/// Age gradient coloring.
///
/// Missing color index or magnitude: black sentinel. A missing parallax is
/// treated as non-positive, leaving the apparent magnitude in place.
pub struct Age;

impl Coloring for Age {
    fn colorize(&self, values: &[f64]) -> Rgb {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let (bp_rp, phot_g_mean_mag) = (values[0], values[1]);
        let parallax = if values[2].is_finite() { values[2] } else { 0.0 };

        if !bp_rp.is_finite() || !phot_g_mean_mag.is_finite() {
            return [0, 0, 0];
        }

        let g_abs_mag = apparent_to_absolute_mag(phot_g_mean_mag, parallax);
        let age = estimate_age(bp_rp, g_abs_mag).clamp(AGE_MIN_GYR, AGE_MAX_GYR);
        let t = (age - AGE_MIN_GYR) / (AGE_MAX_GYR - AGE_MIN_GYR);

        [
            clamp_channel(100.0 + 155.0 * t),
            clamp_channel(180.0 + 75.0 * (1.0 - t)),
            clamp_channel(255.0 * (1.0 - t)),
        ]
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["bp_rp", "phot_g_mean_mag", "parallax"]
    }

    fn name(&self) -> &str {
        "age"
    }
}
