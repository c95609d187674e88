//! Identifier-hash hue coloring.
//!
//! Each catalog identifier gets a stable pseudo-random hue, useful for
//! telling neighboring sources or clusters apart.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{Coloring, Rgb};

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Standard HSL to RGB conversion; h, s, l all in `[0, 1]`
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Identifier-hash hue coloring at fixed saturation 0.5 and lightness 0.6.
///
/// Missing identifier: black sentinel.
pub struct SourceIdHue;

impl Coloring for SourceIdHue {
    fn colorize(&self, values: &[f64]) -> Rgb {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let source_id = values[0];

        if !source_id.is_finite() {
            return [0, 0, 0];
        }

        let mut hasher = DefaultHasher::new();
        source_id.to_bits().hash(&mut hasher);
        let hue = (hasher.finish() % 360) as f64;

        hsl_to_rgb(hue / 360.0, 0.5, 0.6)
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["source_id"]
    }

    fn name(&self) -> &str {
        "source-id"
    }
}
