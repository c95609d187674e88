//! Color mappings from stellar observables to RGB.
//!
//! Each mapping declares the catalog fields it consumes so the schema
//! validator can check inputs without invoking it. All mappings clamp every
//! channel to `[0, 255]` and define an explicit policy for missing
//! (non-finite) inputs instead of raising.

pub mod age;
pub mod metallicity;
pub mod source_id;
pub mod spectral;
pub mod temperature;

use crate::error::Result;

/// An RGB triple, one byte per channel
pub type Rgb = [u8; 3];

/// Trait for color mapping implementations
pub trait Coloring: Send + Sync {
    /// Map a record to an RGB triple.
    ///
    /// `values` holds one number per entry of [`required_fields`], in the
    /// same order. Non-finite entries are handled per the implementation's
    /// documented missing-value policy.
    ///
    /// [`required_fields`]: Coloring::required_fields
    fn colorize(&self, values: &[f64]) -> Rgb;

    /// Catalog field names this mapping consumes, in argument order
    fn required_fields(&self) -> &'static [&'static str];

    /// Get the name of this color mapping
    fn name(&self) -> &str;
}

/// Get a color mapping by name
pub fn get_coloring(name: &str) -> Result<Box<dyn Coloring>> {
    match name.to_lowercase().as_str() {
        "temperature" => Ok(Box::new(temperature::Temperature)),
        "temperature-distance" => Ok(Box::new(temperature::TemperatureDistance)),
        "spectral" => Ok(Box::new(spectral::SpectralClass)),
        "metallicity" => Ok(Box::new(metallicity::Metallicity)),
        "age" => Ok(Box::new(age::Age)),
        "source-id" => Ok(Box::new(source_id::SourceIdHue)),
        _ => Err(crate::error::UraniaError::InvalidParameter {
            param: "coloring".to_string(),
            message: format!("Unknown coloring: {}", name),
        }),
    }
}

/// Clamp a floating-point channel into `[0, 255]` and truncate
pub(crate) fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    [
        (c1[0] as f64 * (1.0 - t) + c2[0] as f64 * t) as u8,
        (c1[1] as f64 * (1.0 - t) + c2[1] as f64 * t) as u8,
        (c1[2] as f64 * (1.0 - t) + c2[2] as f64 * t) as u8,
    ]
}
