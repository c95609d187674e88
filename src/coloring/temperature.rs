//! Blackbody temperature colorings.
//!
//! The BP-RP color index is converted to an effective temperature and then
//! to RGB via a piecewise blackbody fit (log terms on the cool branch,
//! power terms on the hot branch, split at a scaled temperature of 66).

use super::{clamp_channel, Coloring, Rgb};

/// Valid BP-RP range for the temperature conversion
const BP_RP_MIN: f64 = -0.4;
const BP_RP_MAX: f64 = 4.0;

/// Temperature clamp range in Kelvin
const TEMP_MIN_K: f64 = 1000.0;
const TEMP_MAX_K: f64 = 40000.0;

/// Substitute temperature for a missing color index: the Sun's photosphere
const SUN_TEMP_K: f64 = 5778.0;

/// Sentinel distance in parsecs for a non-positive or missing parallax
const FAR_DISTANCE_PC: f64 = 1.0e6;

/// Estimated effective temperature in Kelvin from a BP-RP color index
pub fn bp_rp_to_temperature(bp_rp: f64) -> f64 {
    let bp_rp = bp_rp.clamp(BP_RP_MIN, BP_RP_MAX);
    8700.0 / (bp_rp + 0.55)
}

/// Approximate RGB for a blackbody at the given temperature in Kelvin
pub fn kelvin_to_rgb(temp_kelvin: f64) -> Rgb {
    let temp = temp_kelvin.clamp(TEMP_MIN_K, TEMP_MAX_K) / 100.0;

    let (red, green, blue) = if temp <= 66.0 {
        let red = 255.0;
        let green = 99.4708025861 * temp.ln() - 161.1195681661;
        let blue = if temp <= 19.0 {
            0.0
        } else {
            138.5177312231 * (temp - 10.0).ln() - 305.0447927307
        };
        (red, green, blue)
    } else {
        let red = 329.698727446 * (temp - 60.0).powf(-0.1332047592);
        let green = 288.1221695283 * (temp - 60.0).powf(-0.0755148492);
        (red, green, 255.0)
    };

    [clamp_channel(red), clamp_channel(green), clamp_channel(blue)]
}

/// Distance-derived brightness factor in `[0, 1]`.
///
/// A star with non-positive or missing parallax gets the sentinel far
/// distance and renders near-black rather than spuriously bright.
fn parallax_to_brightness(parallax: f64) -> f64 {
    let distance_pc = if parallax.is_finite() && parallax > 0.0 {
        1000.0 / parallax
    } else {
        FAR_DISTANCE_PC
    };
    (1.0 / (1.0 + distance_pc / 100.0)).min(1.0)
}

/// Temperature coloring from the BP-RP color index.
///
/// Missing index: rendered at the Sun-like reference temperature.
pub struct Temperature;

impl Coloring for Temperature {
    fn colorize(&self, values: &[f64]) -> Rgb {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let bp_rp = values[0];

        let temp = if bp_rp.is_finite() {
            bp_rp_to_temperature(bp_rp)
        } else {
            SUN_TEMP_K
        };
        kelvin_to_rgb(temp)
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["bp_rp"]
    }

    fn name(&self) -> &str {
        "temperature"
    }
}

/// Temperature coloring dimmed by parallax-implied distance
pub struct TemperatureDistance;

impl Coloring for TemperatureDistance {
    fn colorize(&self, values: &[f64]) -> Rgb {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let rgb = Temperature.colorize(&values[..1]);
        let brightness = parallax_to_brightness(values[1]);

        [
            clamp_channel(rgb[0] as f64 * brightness),
            clamp_channel(rgb[1] as f64 * brightness),
            clamp_channel(rgb[2] as f64 * brightness),
        ]
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["bp_rp", "parallax"]
    }

    fn name(&self) -> &str {
        "temperature-distance"
    }
}
