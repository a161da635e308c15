//! Model a color with red, green and blue channels.

use crate::color::{HasSpace, Space};

swatch_macros::gen_model! {
    /// A color with 8-bit red, green and blue channels. Channels can not
    /// leave [0, 255].
    #[derive(Eq, Hash)]
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from arbitrary integers, clamping each to [0, 255].
    pub fn from_clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}
