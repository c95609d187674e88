//! Sky projections for star-map rendering.
//!
//! This module provides map projections that turn a celestial position into
//! an integer pixel coordinate on the output canvas.

pub mod hammer_aitoff;
pub mod mollweide;
pub mod plate_carree;

use crate::error::Result;

/// Trait for sky projection implementations
pub trait Projection: Send + Sync {
    /// Project a record onto the canvas, returning `(x, y)` pixel
    /// coordinates guaranteed to lie in `[0, width) x [0, height)`.
    ///
    /// `values` holds one finite number per entry of [`required_fields`],
    /// in the same order. That alignment is the caller's contract.
    ///
    /// [`required_fields`]: Projection::required_fields
    fn project(&self, values: &[f64], width: u32, height: u32) -> (u32, u32);

    /// Catalog field names this projection consumes, in argument order
    fn required_fields(&self) -> &'static [&'static str];

    /// Get the name of this projection
    fn name(&self) -> &str;
}

/// Get a projection by name
pub fn get_projection(name: &str) -> Result<Box<dyn Projection>> {
    match name.to_lowercase().as_str() {
        "plate-carree" => Ok(Box::new(plate_carree::PlateCarree)),
        "mollweide" => Ok(Box::new(mollweide::Mollweide)),
        "hammer-aitoff" => Ok(Box::new(hammer_aitoff::HammerAitoff)),
        _ => Err(crate::error::UraniaError::InvalidParameter {
            param: "projection".to_string(),
            message: format!("Unknown projection: {}", name),
        }),
    }
}

/// Clamp a truncated projected coordinate into `[0, dim)`.
///
/// Projections pin out-of-range positions to the nearest edge pixel rather
/// than dropping them.
pub(crate) fn clamp_pixel(value: f64, dim: u32) -> u32 {
    let v = value as i64;
    if v < 0 {
        0
    } else if v >= dim as i64 {
        dim - 1
    } else {
        v as u32
    }
}
