//! Dominant colors and perceptual hashes of raw pixel data.

use std::collections::HashMap;

use log::trace;

use crate::{
    color::Component,
    error::{Error, Result},
    hex::Hex,
    metrics::luminance,
    models::Rgb,
};

const BYTES_PER_PIXEL: usize = 4;

/// Side of the square thumbnail [`image_hash`] expects, giving 64 bits.
pub const HASH_SIDE: u32 = 8;

/// Pixels whose brightness, on a 0 to 255 scale, is above this set a bit.
const HASH_BRIGHTNESS_THRESHOLD: u8 = 128;

fn check_rgba(rgba: &[u8]) -> Result<()> {
    if rgba.len() % BYTES_PER_PIXEL != 0 {
        return Err(Error::InvalidArgument(format!(
            "pixel buffer of {} bytes is not RGBA8",
            rgba.len()
        )));
    }
    Ok(())
}

/// Samples a tightly packed RGBA8 buffer for its most frequent colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sampler {
    /// Only every `stride`-th pixel is looked at.
    pub stride: usize,
    /// Pixels with an alpha below this are skipped as transparent.
    pub min_alpha: u8,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            stride: 10,
            min_alpha: 128,
        }
    }
}

impl Sampler {
    /// The `count` most frequent exact colors among the sampled, opaque
    /// pixels, most frequent first. Ties go to the color seen first.
    pub fn dominant_colors(&self, rgba: &[u8], count: usize) -> Result<Vec<Hex>> {
        check_rgba(rgba)?;
        if self.stride == 0 {
            return Err(Error::InvalidArgument("sample stride must not be zero".into()));
        }

        // color -> (occurrences, first seen)
        let mut seen: HashMap<Rgb, (usize, usize)> = HashMap::new();
        let mut sampled = 0;
        for (index, pixel) in rgba
            .chunks_exact(BYTES_PER_PIXEL)
            .step_by(self.stride)
            .enumerate()
        {
            let (red, green, blue, alpha) = (pixel[0], pixel[1], pixel[2], pixel[3]);
            if alpha < self.min_alpha {
                continue;
            }
            sampled += 1;
            seen.entry(Rgb::new(red, green, blue))
                .or_insert((0, index))
                .0 += 1;
        }
        trace!("sampled {sampled} pixels, {} distinct colors", seen.len());

        let mut ranked = seen.into_iter().collect::<Vec<_>>();
        ranked.sort_unstable_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
            b_count.cmp(a_count).then(a_first.cmp(b_first))
        });

        Ok(ranked
            .into_iter()
            .take(count)
            .map(|(rgb, _)| rgb.to_hex())
            .collect())
    }
}

/// [`Sampler::dominant_colors`] with the default sampler: every 10th pixel,
/// skipping those with an alpha below 128.
pub fn dominant_colors(rgba: &[u8], count: usize) -> Result<Vec<Hex>> {
    Sampler::default().dominant_colors(rgba, count)
}

/// A brightness hash of an RGBA8 thumbnail: one `'1'` or `'0'` per pixel,
/// in pixel order, depending on whether the pixel is brighter than mid gray.
/// Alpha is ignored.
///
/// Downscale images to [`HASH_SIDE`] x [`HASH_SIDE`] first for the usual 64
/// bit hash; similar images then differ in few positions.
pub fn image_hash(rgba: &[u8]) -> Result<String> {
    check_rgba(rgba)?;
    Ok(rgba
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|pixel| {
            let brightness = (luminance(Rgb::new(pixel[0], pixel[1], pixel[2])) * 255.0).round();
            if brightness > Component::from(HASH_BRIGHTNESS_THRESHOLD) {
                '1'
            } else {
                '0'
            }
        })
        .collect())
}
