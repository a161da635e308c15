//! Derive palettes from a base color, or at random.

use log::trace;
use rand::Rng;

use crate::{
    color::{Color, Component},
    error::Result,
    hex::Hex,
    models::Rgb,
};

/// `count` colors with hues spread evenly around the circle, starting at the
/// hue of `base`. Saturation and lightness are held at those of `base`, so
/// the first entry is `base` itself.
pub fn generate_palette(base: impl Into<Color>, count: usize) -> Vec<Hex> {
    let base = base.into().to_rgb();
    let hsl = base.to_hsl();
    trace!("generating {count} colors around {hsl:?}");

    (0..count)
        .map(|i| {
            if i == 0 {
                return base.to_hex();
            }
            let rotation = i as Component * 360.0 / count as Component;
            hsl.rotate_hue(rotation).to_rgb().to_hex()
        })
        .collect()
}

/// [`generate_palette`] from a hex string.
pub fn generate_palette_hex(base: &str, count: usize) -> Result<Vec<Hex>> {
    Ok(generate_palette(base.parse::<Hex>()?, count))
}

/// A color with every channel drawn uniformly from `rng`.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Hex {
    Rgb::new(rng.gen(), rng.gen(), rng.gen()).to_hex()
}

/// `count` independent [`random_color_with`] draws.
pub fn random_palette_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Hex> {
    (0..count).map(|_| random_color_with(rng)).collect()
}

/// A random color from the thread local generator. Not suitable for anything
/// security related.
pub fn random_color() -> Hex {
    random_color_with(&mut rand::thread_rng())
}

/// `count` random colors from the thread local generator.
pub fn random_palette(count: usize) -> Vec<Hex> {
    random_palette_with(&mut rand::thread_rng(), count)
}
