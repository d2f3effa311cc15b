//! Film-grain post-processing.
//!
//! Every pixel is multiplied by one random factor drawn from
//! `[1 - intensity, 1 + intensity]`; all three channels share it. Results are
//! truncated toward zero and saturate at 255.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{Error, Result};

/// Scale one channel, truncating and saturating into `0..=255`.
pub fn scale_channel(value: u8, factor: f64) -> u8 {
    // `as` saturates on overflow and maps negatives to 0.
    (value as f64 * factor) as u8
}

/// Grain `image` in place.
///
/// Pixels are visited column by column (x outer, y inner), one factor draw
/// each. Zero intensity leaves the image unchanged. A negative intensity
/// gives the same range as its absolute value.
pub fn apply_noise<R: Rng + ?Sized>(image: &mut RgbImage, intensity: f64, rng: &mut R) -> Result<()> {
    let spread = intensity.abs();
    if !(spread * 2.0).is_finite() {
        return Err(Error::Noise(intensity));
    }
    let factors = Uniform::new_inclusive(1.0 - spread, 1.0 + spread);

    let (width, height) = image.dimensions();
    for x in 0..width {
        for y in 0..height {
            let factor = factors.sample(rng);
            let px = image.get_pixel_mut(x, y);
            for c in px.0.iter_mut() {
                *c = scale_channel(*c, factor);
            }
        }
    }
    Ok(())
}

/// Reload the PNG at `path`, grain it and overwrite it.
pub fn grain_file<R: Rng + ?Sized>(path: &Path, intensity: f64, rng: &mut R) -> Result<()> {
    let mut image = image::open(path)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    debug!(
        "graining {}x{} image with intensity {intensity}",
        image.width(),
        image.height()
    );
    apply_noise(&mut image, intensity, rng)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

// ============================================================================
// Tests
// ============================================================================
