//! Metallicity tint coloring.
//!
//! [Fe/H] is mapped onto a linear gradient between a metal-poor and a
//! metal-rich reference color.

use super::{lerp_color, Coloring, Rgb};

/// [Fe/H] range covered by the gradient
const FEH_MIN: f64 = -2.5;
const FEH_MAX: f64 = 0.5;

/// Metal-poor end of the gradient (blueish)
const METAL_POOR: Rgb = [105, 145, 255];

/// Metal-rich end of the gradient (reddish)
const METAL_RICH: Rgb = [255, 120, 80];

/// Metallicity coloring from the DR2 template [Fe/H].
///
/// Missing metallicity: the gradient midpoint (neutral sentinel).
pub struct Metallicity;

impl Coloring for Metallicity {
    fn colorize(&self, values: &[f64]) -> Rgb {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let feh = values[0];

        let t = if feh.is_finite() {
            (feh.clamp(FEH_MIN, FEH_MAX) - FEH_MIN) / (FEH_MAX - FEH_MIN)
        } else {
            0.5
        };
        lerp_color(METAL_POOR, METAL_RICH, t)
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["dr2_rv_template_fe_h"]
    }

    fn name(&self) -> &str {
        "metallicity"
    }
}
