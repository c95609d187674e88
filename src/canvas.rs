//! The render canvas: an addressable RGB pixel grid with load/save.
//!
//! Opening a canvas over an existing image of matching dimensions resumes a
//! previous render; writes are last-write-wins.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::{debug, info, warn};

use crate::error::Result;

/// A fixed-size RGB pixel buffer backed by an [`RgbImage`]
pub struct Canvas {
    image: RgbImage,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Open a canvas at the given resolution.
    ///
    /// If `path` holds a readable image with the same dimensions, its
    /// pixels are loaded so a previous partial render continues where it
    /// left off. Anything else yields a fresh zero-filled (black) buffer.
    pub fn open(path: &Path, width: u32, height: u32) -> Result<Self> {
        if path.is_file() {
            let existing = image::open(path)?.to_rgb8();
            if existing.dimensions() == (width, height) {
                info!(path = %path.display(), "Resuming from existing render");
                return Ok(Self {
                    image: existing,
                    width,
                    height,
                });
            }
            warn!(
                path = %path.display(),
                found = format!("{}x{}", existing.width(), existing.height()),
                expected = format!("{}x{}", width, height),
                "Existing image has wrong dimensions, starting fresh"
            );
        } else {
            debug!(path = %path.display(), "No existing render, starting fresh");
        }

        Ok(Self {
            image: ImageBuffer::new(width, height),
            width,
            height,
        })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read the pixel at `(x, y)`
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// In-bounds coordinates are the caller's contract; projections clamp
    /// their output, so a violation here is a programming error.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        debug_assert!(x < self.width && y < self.height);
        self.image.put_pixel(x, y, Rgb(rgb));
    }

    /// Persist the canvas to `path`, creating parent directories as needed.
    /// The format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.image.save(path)?;
        Ok(())
    }
}
