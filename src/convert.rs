//! Conversions between the color models. [`Rgb`] is the hub: every model
//! converts to and from it and nothing else, so there is exactly one
//! implementation of each transform.
//!
//! ```rust
//! use swatch::hex_to_rgb;
//! let hsl = hex_to_rgb("#D2691E").unwrap().to_hsl();
//! assert_eq!(hsl.hue.round(), 25.0);
//! ```

use crate::{
    color::{Color, Component, Space},
    error::Result,
    hex::Hex,
    models::{Cmyk, Hsl, Rgb},
};

impl Color {
    /// Convert this color from its current representation to the specified
    /// one. Everything goes through RGB, so converting to a space other than
    /// [`Space::Rgb`] may lose precision to channel rounding.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return *self;
        }

        let rgb = self.to_rgb();
        match space {
            Space::Rgb => Color::Rgb(rgb),
            Space::Hsl => Color::Hsl(rgb.to_hsl()),
            Space::Cmyk => Color::Cmyk(rgb.to_cmyk()),
        }
    }
}

impl Rgb {
    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(self)
    }

    /// Convert to CMYK percentages, rounded to whole percents.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(self)
    }

    /// Encode as `#RRGGBB`.
    pub fn to_hex(&self) -> Hex {
        Hex::from_rgb(*self)
    }
}

impl Hsl {
    /// Convert to RGB. The input is normalized first.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&self.normalized())
    }
}

impl Cmyk {
    /// Convert to RGB. The input is normalized first.
    pub fn to_rgb(&self) -> Rgb {
        util::cmyk_to_rgb(&self.normalized())
    }
}

/// Parse `#RGB` or `#RRGGBB`, with or without the `#`, in any case.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Ok(hex.parse::<Hex>()?.to_rgb())
}

/// Encode channels as `#RRGGBB`, clamping each to [0, 255] first.
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> Hex {
    Rgb::from_clamped(red, green, blue).to_hex()
}

/// See [`Rgb::to_cmyk`].
pub fn rgb_to_cmyk(red: u8, green: u8, blue: u8) -> Cmyk {
    Rgb::new(red, green, blue).to_cmyk()
}

/// See [`Cmyk::to_rgb`].
pub fn cmyk_to_rgb(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Rgb {
    Cmyk::new(cyan, magenta, yellow, key).to_rgb()
}

/// See [`Rgb::to_hsl`].
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    Rgb::new(red, green, blue).to_hsl()
}

/// See [`Hsl::to_rgb`].
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

mod util {
    use crate::{
        color::Component,
        math::{normalize_hue, round_channel},
        models::{Cmyk, Hsl, Rgb},
    };

    fn unit_channels(rgb: &Rgb) -> [Component; 3] {
        rgb.to_components().map(|c| c as Component / 255.0)
    }

    /// Convert from RGB to HSL. Achromatic colors get a hue and saturation
    /// of zero.
    pub fn rgb_to_hsl(from: &Rgb) -> Hsl {
        let [red, green, blue] = unit_channels(from);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, lightness * 100.0);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Hsl::new(normalize_hue(hue), saturation * 100.0, lightness * 100.0)
    }

    /// Interpolate a channel within the hue sector `t`, given in turns.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert from HSL to RGB. Expects a normalized input.
    pub fn hsl_to_rgb(from: &Hsl) -> Rgb {
        let hue = from.hue / 360.0;
        let saturation = from.saturation / 100.0;
        let lightness = from.lightness / 100.0;

        if saturation <= 0.0 {
            let gray = round_channel(lightness * 255.0);
            return Rgb::new(gray, gray, gray);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Rgb::new(
            round_channel(hue_to_channel(p, q, hue + 1.0 / 3.0) * 255.0),
            round_channel(hue_to_channel(p, q, hue) * 255.0),
            round_channel(hue_to_channel(p, q, hue - 1.0 / 3.0) * 255.0),
        )
    }

    /// Convert from RGB to CMYK. Pure black has a key of 100 and no chroma.
    pub fn rgb_to_cmyk(from: &Rgb) -> Cmyk {
        let [red, green, blue] = unit_channels(from);

        let key = 1.0 - red.max(green).max(blue);
        if key >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let chroma = |c: Component| ((1.0 - c - key) / (1.0 - key) * 100.0).round();

        Cmyk::new(
            chroma(red),
            chroma(green),
            chroma(blue),
            (key * 100.0).round(),
        )
    }

    /// Convert from CMYK to RGB. Expects a normalized input.
    pub fn cmyk_to_rgb(from: &Cmyk) -> Rgb {
        let key = from.key / 100.0;
        let channel = |c: Component| round_channel(255.0 * (1.0 - c / 100.0) * (1.0 - key));

        Rgb::new(
            channel(from.cyan),
            channel(from.magenta),
            channel(from.yellow),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::error::Error;

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component, Component, Component, Component, Component)] = &[
            // red, green, blue, hue, saturation, lightness, cyan, magenta, yellow, key
            (255,   0,   0,   0.0, 100.0,  50.000000,   0.0, 100.0, 100.0,   0.0),
            (  0, 255,   0, 120.0, 100.0,  50.000000, 100.0,   0.0, 100.0,   0.0),
            (  0,   0, 255, 240.0, 100.0,  50.000000, 100.0, 100.0,   0.0,   0.0),
            (255, 255,   0,  60.0, 100.0,  50.000000,   0.0,   0.0, 100.0,   0.0),
            (210, 105,  30,  25.0,  75.0,  47.058823,   0.0,  50.0,  86.0,  18.0),
            (128, 128, 128,   0.0,   0.0,  50.196079,   0.0,   0.0,   0.0,  50.0),
            (255, 255, 255,   0.0,   0.0, 100.000000,   0.0,   0.0,   0.0,   0.0),
            (  0,   0,   0,   0.0,   0.0,   0.000000,   0.0,   0.0,   0.0, 100.0),
        ];

        for &(r, g, b, h, s, l, c, m, y, k) in TESTS {
            println!("rgb({r}, {g}, {b})");
            let hsl = rgb_to_hsl(r, g, b);
            assert_component_eq!(hsl.hue, h);
            assert_component_eq!(hsl.saturation, s);
            assert_component_eq!(hsl.lightness, l);

            assert_eq!(rgb_to_cmyk(r, g, b), Cmyk::new(c, m, y, k));
            assert_eq!(hsl_to_rgb(h, s, l), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn hex_round_trip_is_idempotent() {
        let rgb = hex_to_rgb("#d2691e").unwrap();
        assert_eq!(rgb, Rgb::new(210, 105, 30));
        assert_eq!(rgb_to_hex(210, 105, 30).as_str(), "#D2691E");
    }

    #[test]
    fn rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(-5, 300, 128).as_str(), "#00FF80");
    }

    #[test]
    fn invalid_hex_never_yields_a_color() {
        assert!(matches!(hex_to_rgb("not-a-color"), Err(Error::InvalidFormat(_))));
        assert!(matches!(hex_to_rgb("   "), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn cmyk_black_and_white() {
        assert_eq!(rgb_to_cmyk(0, 0, 0), Cmyk::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(rgb_to_cmyk(255, 255, 255), Cmyk::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn cmyk_to_rgb_rounds_and_clamps() {
        assert_eq!(cmyk_to_rgb(0.0, 50.0, 86.0, 18.0), Rgb::new(209, 105, 29));
        assert_eq!(cmyk_to_rgb(-10.0, 0.0, 0.0, 0.0), Rgb::WHITE);
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 100.0), Rgb::BLACK);
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 250.0), Rgb::BLACK);
    }

    #[test]
    fn hsl_input_is_normalized() {
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(-240.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(0.0, 150.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(200.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn to_space_routes_through_rgb() {
        let color = Color::Cmyk(Cmyk::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(color.to_space(Space::Rgb), Color::Rgb(Rgb::BLACK));
        assert_eq!(
            color.to_space(Space::Hsl),
            Color::Hsl(Hsl::new(0.0, 0.0, 0.0))
        );
        assert_eq!(color.to_space(Space::Cmyk), color);

        let red = Color::Hsl(Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(
            red.to_space(Space::Cmyk),
            Color::Cmyk(Cmyk::new(0.0, 100.0, 100.0, 0.0))
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_to_rgb_to_hex_is_idempotent(r: u8, g: u8, b: u8, lower: bool) {
                let hex = format!("#{r:02X}{g:02X}{b:02X}");
                let input = if lower { hex.to_lowercase() } else { hex.clone() };
                let rgb = hex_to_rgb(&input).unwrap();
                let out = rgb_to_hex(rgb.red.into(), rgb.green.into(), rgb.blue.into());
                prop_assert_eq!(out.as_str(), hex.as_str());
            }

            #[test]
            fn rgb_to_hsl_round_trip_is_bounded(r: u8, g: u8, b: u8) {
                let hsl = rgb_to_hsl(r, g, b);
                prop_assert!((0.0..360.0).contains(&hsl.hue));
                prop_assert!((0.0..=100.0).contains(&hsl.saturation));
                prop_assert!((0.0..=100.0).contains(&hsl.lightness));

                let back = hsl.to_rgb();
                prop_assert!((back.red as i32 - r as i32).abs() <= 1, "red {} vs {}", back.red, r);
                prop_assert!((back.green as i32 - g as i32).abs() <= 1, "green {} vs {}", back.green, g);
                prop_assert!((back.blue as i32 - b as i32).abs() <= 1, "blue {} vs {}", back.blue, b);
            }

            #[test]
            fn cmyk_components_stay_in_range(r: u8, g: u8, b: u8) {
                let cmyk = rgb_to_cmyk(r, g, b);
                for component in cmyk.to_components() {
                    prop_assert!((0.0..=100.0).contains(&component));
                }
            }
        }
    }
}
