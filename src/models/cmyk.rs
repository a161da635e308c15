//! Model a color with the subtractive CMYK notation used for print.

use crate::color::{Component, HasSpace, Space};
use crate::math::clamp_percentage;

swatch_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages, each in [0, 100].
    pub struct Cmyk {
        /// The cyan percentage.
        cyan: Component,
        /// The magenta percentage.
        magenta: Component,
        /// The yellow percentage.
        yellow: Component,
        /// The key (black) percentage.
        key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl Cmyk {
    /// Clamp every component to [0, 100]. A full key has no chroma, so cyan,
    /// magenta and yellow are zeroed.
    pub fn normalized(&self) -> Self {
        let key = clamp_percentage(self.key);
        if key >= 100.0 {
            return Self::new(0.0, 0.0, 0.0, 100.0);
        }
        Self::new(
            clamp_percentage(self.cyan),
            clamp_percentage(self.magenta),
            clamp_percentage(self.yellow),
            key,
        )
    }
}
