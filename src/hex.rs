//! Hexadecimal color notation.
//!
//! Input accepts three or six hex digits, with or without a leading `#`, in
//! any case. Output is always normalized to `#RRGGBB` with uppercase digits.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::models::Rgb;

/// A normalized `#RRGGBB` color string with uppercase digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex(String);

impl Hex {
    /// Encode a color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue))
    }

    /// Decode the string back into its channels.
    pub fn to_rgb(&self) -> Rgb {
        // The string is always well formed, so this can not fail.
        parse_digits(&self.0[1..]).unwrap_or(Rgb::BLACK)
    }

    /// The normalized string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let rgb = parse_digits(digits).ok_or_else(|| {
            debug!("rejected hex color {s:?}");
            Error::InvalidFormat(format!("{s:?} is not a 3 or 6 digit hex color"))
        })?;
        Ok(Self::from_rgb(rgb))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Self::from_rgb(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hex {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse bare hex digits, three or six of them.
fn parse_digits(digits: &str) -> Option<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    };

    match digits.as_bytes() {
        &[r, g, b] => Some(Rgb::new(
            nibble(r) * 17,
            nibble(g) * 17,
            nibble(b) * 17,
        )),
        &[r0, r1, g0, g1, b0, b1] => Some(Rgb::new(
            nibble(r0) << 4 | nibble(r1),
            nibble(g0) << 4 | nibble(g1),
            nibble(b0) << 4 | nibble(b1),
        )),
        _ => None,
    }
}

/// Whether `s` is a hex color the way form inputs expect it: a leading `#`
/// followed by three or six hex digits.
pub fn is_valid_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|digits| parse_digits(digits).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_forms() {
        assert_eq!("#1a2B3c".parse::<Hex>().unwrap().as_str(), "#1A2B3C");
        assert_eq!("1a2b3c".parse::<Hex>().unwrap().as_str(), "#1A2B3C");
        assert_eq!("#abc".parse::<Hex>().unwrap().as_str(), "#AABBCC");
        assert_eq!("F0A".parse::<Hex>().unwrap().to_rgb(), Rgb::new(255, 0, 170));
    }

    #[test]
    fn reject_malformed_input() {
        for input in [
            "", " ", "#", "##fff", "#ff", "#ffff", "#fffffff", "#ggg", "+ff", "#+fffff",
            " #fff", "#fff ", "not-a-color", "#ff00f\u{e9}",
        ] {
            let err = input.parse::<Hex>().unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "{input:?}");
        }
    }

    #[test]
    fn encode_is_uppercase_and_padded() {
        assert_eq!(Hex::from_rgb(Rgb::new(0, 10, 255)).as_str(), "#000AFF");
        assert_eq!(Hex::from_rgb(Rgb::new(0, 10, 255)).to_string(), "#000AFF");
    }

    #[test]
    fn form_validation_requires_the_hash() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#A0b1C2"));
        assert!(!is_valid_hex_color("fff"));
        assert!(!is_valid_hex_color("#ffff"));
        assert!(!is_valid_hex_color(""));
    }
}
