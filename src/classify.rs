//! Bucket colors into coarse, human readable families.
//!
//! This is a heuristic over HSL, not a perceptually uniform measure. The
//! lightness and saturation cutoffs and the hue bands are kept in
//! [`Thresholds`] so they can be tuned without touching the algorithm.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    hex::Hex,
    models::{Hsl, Rgb},
};

/// The closed set of color families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFamily {
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Part of the vocabulary, but no default hue band produces it. Records
    /// can still carry it as an explicit family.
    Brown,
    /// Gray.
    Gray,
    /// Black.
    Black,
    /// White.
    White,
}

impl ColorFamily {
    /// Every family, in a stable order.
    pub const ALL: [ColorFamily; 11] = [
        ColorFamily::Red,
        ColorFamily::Orange,
        ColorFamily::Yellow,
        ColorFamily::Green,
        ColorFamily::Blue,
        ColorFamily::Purple,
        ColorFamily::Pink,
        ColorFamily::Brown,
        ColorFamily::Gray,
        ColorFamily::Black,
        ColorFamily::White,
    ];

    /// The lowercase name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            ColorFamily::Red => "red",
            ColorFamily::Orange => "orange",
            ColorFamily::Yellow => "yellow",
            ColorFamily::Green => "green",
            ColorFamily::Blue => "blue",
            ColorFamily::Purple => "purple",
            ColorFamily::Pink => "pink",
            ColorFamily::Brown => "brown",
            ColorFamily::Gray => "gray",
            ColorFamily::Black => "black",
            ColorFamily::White => "white",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidFormat(format!("unknown color family {s:?}")))
    }
}

/// A hue band: every hue below `end` (and at or above the previous band's
/// end) belongs to `family`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueBand {
    /// Exclusive upper bound of the band in degrees.
    pub end: Component,
    /// The family of hues in the band.
    pub family: ColorFamily,
}

const fn band(end: Component, family: ColorFamily) -> HueBand {
    HueBand { end, family }
}

/// Lightness below which every color is black.
pub const BLACK_BELOW_LIGHTNESS: Component = 20.0;
/// Lightness above which every color is white.
pub const WHITE_ABOVE_LIGHTNESS: Component = 80.0;
/// Saturation below which a color that is neither black nor white is gray.
pub const GRAY_BELOW_SATURATION: Component = 10.0;

/// The default hue bands, covering [0, 360).
pub const DEFAULT_HUE_BANDS: [HueBand; 8] = [
    band(30.0, ColorFamily::Red),
    band(60.0, ColorFamily::Orange),
    band(90.0, ColorFamily::Yellow),
    band(150.0, ColorFamily::Green),
    band(240.0, ColorFamily::Blue),
    band(300.0, ColorFamily::Purple),
    band(330.0, ColorFamily::Pink),
    band(360.0, ColorFamily::Red),
];

/// Tunable cutoffs for [`Classifier`].
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    /// See [`BLACK_BELOW_LIGHTNESS`].
    pub black_below_lightness: Component,
    /// See [`WHITE_ABOVE_LIGHTNESS`].
    pub white_above_lightness: Component,
    /// See [`GRAY_BELOW_SATURATION`].
    pub gray_below_saturation: Component,
    /// Hue bands in ascending order of `end`.
    pub hue_bands: Vec<HueBand>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            black_below_lightness: BLACK_BELOW_LIGHTNESS,
            white_above_lightness: WHITE_ABOVE_LIGHTNESS,
            gray_below_saturation: GRAY_BELOW_SATURATION,
            hue_bands: DEFAULT_HUE_BANDS.to_vec(),
        }
    }
}

/// Maps colors to a [`ColorFamily`].
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    /// Create a classifier using custom thresholds.
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds in use.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify a color. The first matching rule wins: black, white, gray,
    /// then the hue bands. A hue not covered by any band falls back to red,
    /// the family at both ends of the hue circle.
    ///
    /// HSL input is used as is (normalized). Anything else goes through RGB
    /// and is compared exactly, so a color sitting on a band edge lands in
    /// the band that starts there.
    pub fn classify(&self, color: impl Into<Color>) -> ColorFamily {
        let color = color.into();
        let family = match color {
            Color::Hsl(hsl) => self.family_of(&hsl.normalized()),
            other => self.family_of(&RgbRatios::new(other.to_rgb())),
        };

        trace!("classified {color} as {family}");
        family
    }

    fn family_of(&self, hsl: &impl HslBounds) -> ColorFamily {
        let t = &self.thresholds;
        if hsl.lightness_below(t.black_below_lightness) {
            ColorFamily::Black
        } else if hsl.lightness_above(t.white_above_lightness) {
            ColorFamily::White
        } else if hsl.saturation_below(t.gray_below_saturation) {
            ColorFamily::Gray
        } else {
            t.hue_bands
                .iter()
                .find(|band| hsl.hue_below(band.end))
                .map_or(ColorFamily::Red, |band| band.family)
        }
    }

    /// Classify a hex string.
    pub fn classify_hex(&self, hex: &str) -> Result<ColorFamily> {
        let hex = hex.parse::<Hex>().map_err(|err| {
            debug!("can not classify {hex:?}: {err}");
            Error::InvalidColor(format!("{hex:?} is not a hex color"))
        })?;
        Ok(self.classify(hex))
    }
}

/// Comparisons of HSL coordinates against classifier cutoffs.
trait HslBounds {
    fn lightness_below(&self, bound: Component) -> bool;
    fn lightness_above(&self, bound: Component) -> bool;
    fn saturation_below(&self, bound: Component) -> bool;
    fn hue_below(&self, bound: Component) -> bool;
}

impl HslBounds for Hsl {
    fn lightness_below(&self, bound: Component) -> bool {
        self.lightness < bound
    }

    fn lightness_above(&self, bound: Component) -> bool {
        self.lightness > bound
    }

    fn saturation_below(&self, bound: Component) -> bool {
        self.saturation < bound
    }

    fn hue_below(&self, bound: Component) -> bool {
        self.hue < bound
    }
}

/// HSL of an 8 bit color kept as integer ratios.
///
/// With `sum = max + min` and `delta = max - min` over the channels:
/// lightness is `sum / 510`, saturation is `delta / sum` (or
/// `delta / (510 - sum)` above half lightness) and the hue in degrees is
/// `60 * hue_sixths / delta`.
#[derive(Debug)]
struct RgbRatios {
    sum: i64,
    delta: i64,
    hue_sixths: i64,
}

impl RgbRatios {
    fn new(rgb: Rgb) -> Self {
        let [red, green, blue] = rgb.to_components().map(i64::from);
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue_sixths = if delta == 0 {
            0
        } else if max == red {
            green - blue + if green < blue { 6 * delta } else { 0 }
        } else if max == green {
            blue - red + 2 * delta
        } else {
            red - green + 4 * delta
        };

        Self {
            sum: max + min,
            delta,
            hue_sixths,
        }
    }

    fn saturation_denominator(&self) -> i64 {
        if self.sum > 255 {
            510 - self.sum
        } else {
            self.sum
        }
    }
}

// Both sides of every comparison are small integers times a bound, which f64
// represents exactly for any bound with a short fraction.
impl HslBounds for RgbRatios {
    fn lightness_below(&self, bound: Component) -> bool {
        ((self.sum * 100) as f64) < f64::from(bound) * 510.0
    }

    fn lightness_above(&self, bound: Component) -> bool {
        ((self.sum * 100) as f64) > f64::from(bound) * 510.0
    }

    fn saturation_below(&self, bound: Component) -> bool {
        if self.delta == 0 {
            return 0.0 < f64::from(bound);
        }
        ((self.delta * 100) as f64) < f64::from(bound) * self.saturation_denominator() as f64
    }

    fn hue_below(&self, bound: Component) -> bool {
        if self.delta == 0 {
            return 0.0 < f64::from(bound);
        }
        ((self.hue_sixths * 60) as f64) < f64::from(bound) * self.delta as f64
    }
}

/// Classify a color with the default thresholds.
pub fn classify(color: impl Into<Color>) -> ColorFamily {
    Classifier::default().classify(color)
}

/// Classify a hex string with the default thresholds.
pub fn classify_hex(hex: &str) -> Result<ColorFamily> {
    Classifier::default().classify_hex(hex)
}
