//! A [`Color`] holds a color specified in any of the supported
//! representations.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::hex::Hex;
use crate::models::{Cmyk, Hsl, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that real valued components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that real valued components are stored as.
pub type Component = f64;

/// The representations a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels in [0, 255].
    Rgb = 0,
    /// Hue in degrees with saturation and lightness percentages.
    Hsl = 1,
    /// Cyan, magenta, yellow and key percentages, used for print.
    Cmyk = 2,
}

/// Implemented by every model to name the [`Space`] it lives in.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// A color in any of the supported representations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// See [`Rgb`].
    Rgb(Rgb),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`Cmyk`].
    Cmyk(Cmyk),
}

impl Color {
    /// The representation this color was specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Rgb::SPACE,
            Color::Hsl(_) => Hsl::SPACE,
            Color::Cmyk(_) => Cmyk::SPACE,
        }
    }

    /// Normalize the color to RGB, the canonical form every other operation
    /// consumes.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Color::Rgb(rgb) => rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
        }
    }

    /// Encode the color as a [`Hex`] string.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Rgb(value.to_rgb())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Color::Rgb(s.parse::<Hex>()?.to_rgb()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => write!(f, "rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue),
            Color::Hsl(hsl) => write!(
                f,
                "hsl({}, {}%, {}%)",
                hsl.hue.round(),
                hsl.saturation.round(),
                hsl.lightness.round()
            ),
            Color::Cmyk(cmyk) => write!(
                f,
                "cmyk({}%, {}%, {}%, {}%)",
                cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_convert_into_the_matching_variant() {
        let c: Color = Rgb::new(1, 2, 3).into();
        assert_eq!(c, Color::Rgb(Rgb::new(1, 2, 3)));
        assert_eq!(c.space(), Space::Rgb);

        let c: Color = Hsl::new(10.0, 20.0, 30.0).into();
        assert_eq!(c.space(), Space::Hsl);

        let c: Color = Cmyk::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(c.space(), Space::Cmyk);
    }

    #[test]
    fn parse_from_hex() {
        let c: Color = "#f80".parse().unwrap();
        assert_eq!(c, Color::Rgb(Rgb::new(0xff, 0x88, 0x00)));
        assert_eq!(c.to_hex().as_str(), "#FF8800");

        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn display_uses_css_like_notation() {
        assert_eq!(Color::Rgb(Rgb::new(1, 2, 3)).to_string(), "rgb(1, 2, 3)");
        assert_eq!(
            Color::Cmyk(Cmyk::new(0.0, 50.0, 100.0, 10.0)).to_string(),
            "cmyk(0%, 50%, 100%, 10%)"
        );
        assert_eq!(
            Color::Hsl(Hsl::new(120.0, 50.0, 25.0)).to_string(),
            "hsl(120, 50%, 25%)"
        );
        // Converted values print in whole degrees and percents.
        assert_eq!(
            Color::Rgb(Rgb::new(210, 105, 30)).to_space(Space::Hsl).to_string(),
            "hsl(25, 75%, 47%)"
        );
    }
}
