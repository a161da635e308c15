//! swatch converts colors between HEX, RGB, HSL and CMYK, sorts them into
//! named families, measures distances between them and derives palettes.
//!
//! RGB is the canonical form: every other representation converts through
//! it. All operations are pure functions on small value types.
//!
//! ```rust
//! use swatch::{classify_hex, contrast_text_color_hex, generate_palette_hex, ColorFamily};
//!
//! assert_eq!(classify_hex("#1E90FF").unwrap(), ColorFamily::Blue);
//! assert_eq!(contrast_text_color_hex("#1E90FF").as_str(), "#FFFFFF");
//! assert_eq!(generate_palette_hex("#FF0000", 3).unwrap().len(), 3);
//! ```

#![deny(missing_docs)]

mod classify;
mod color;
mod convert;
mod error;
mod hex;
mod interpolate;
mod math;
mod metrics;
pub mod models;
mod palette;
mod sample;
mod swatch;


pub use classify::{
    classify, classify_hex, Classifier, ColorFamily, HueBand, Thresholds, BLACK_BELOW_LIGHTNESS,
    DEFAULT_HUE_BANDS, GRAY_BELOW_SATURATION, WHITE_ABOVE_LIGHTNESS,
};
pub use color::{Color, Component, HasSpace, Space};
pub use convert::{cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl};
pub use error::{Error, Result};
pub use hex::{is_valid_hex_color, Hex};
pub use interpolate::{interpolate, interpolate_hex};
pub use metrics::{
    closest, closest_by, contrast_text_color, contrast_text_color_hex, distance, distance_hex,
    luminance, CONTRAST_LUMINANCE_THRESHOLD, MAX_DISTANCE,
};
pub use models::{Cmyk, Hsl, Rgb};
pub use palette::{
    generate_palette, generate_palette_hex, random_color, random_color_with, random_palette,
    random_palette_with,
};
pub use sample::{dominant_colors, image_hash, Sampler, HASH_SIDE};
pub use swatch::{closest_swatch, is_valid_pantone_code, Finish, Swatch};
