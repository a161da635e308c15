//! Model a color with the HSL notation.

use crate::color::{Component, HasSpace, Space};

swatch_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The saturation percentage, [0, 100].
        saturation: Component,
        /// The lightness percentage, [0, 100].
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl Hsl {
    /// Wrap the hue into [0, 360) and clamp saturation and lightness to
    /// [0, 100].
    pub fn normalized(&self) -> Self {
        Self::new(
            crate::math::normalize_hue(self.hue),
            crate::math::clamp_percentage(self.saturation),
            crate::math::clamp_percentage(self.lightness),
        )
    }

    /// Return the same color with the hue rotated by `degrees`.
    pub fn rotate_hue(&self, degrees: Component) -> Self {
        Self::new(
            crate::math::normalize_hue(self.hue + degrees),
            self.saturation,
            self.lightness,
        )
    }
}
