//! Named, vendor coded color records such as Pantone swatches.
//!
//! A [`Swatch`] is plain data. Every derived value (HSL, contrast, family)
//! goes through the same converters as any other color.

use std::sync::LazyLock;

use bitflags::bitflags;
use regex::Regex;

use crate::{
    classify::{classify, ColorFamily},
    error::{Error, Result},
    hex::Hex,
    metrics::{closest_by, contrast_text_color},
    models::{Cmyk, Hsl, Rgb},
    Color,
};

bitflags! {
    /// Print finishes a swatch can have.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Finish : u8 {
        /// Metallic ink.
        const METALLIC = 1 << 0;
        /// Fluorescent ink.
        const FLUORESCENT = 1 << 1;
    }
}

/// A named color with its vendor code.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// Display name, e.g. "Classic Blue".
    pub name: String,
    /// Vendor code, e.g. "19-4052 TCX".
    pub code: String,
    /// The color as hex.
    pub hex: Hex,
    /// The color as RGB. Must agree with `hex`.
    pub rgb: Rgb,
    /// The vendor's print recipe, when known. It is not derived from `rgb`
    /// because vendors publish their own.
    pub cmyk: Option<Cmyk>,
    /// Free form description.
    pub description: Option<String>,
    /// An explicit family, overriding classification.
    pub family: Option<ColorFamily>,
    /// Print finishes.
    pub finish: Finish,
}

impl Swatch {
    /// Create a swatch from a hex color.
    pub fn new(name: impl Into<String>, code: impl Into<String>, hex: &str) -> Result<Self> {
        let hex = hex.parse::<Hex>()?;
        Ok(Self {
            name: name.into(),
            code: code.into(),
            rgb: hex.to_rgb(),
            hex,
            cmyk: None,
            description: None,
            family: None,
            finish: Finish::empty(),
        })
    }

    /// Record the vendor's CMYK recipe.
    pub fn with_cmyk(mut self, cmyk: Cmyk) -> Self {
        self.cmyk = Some(cmyk.normalized());
        self
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pin the family instead of classifying.
    pub fn with_family(mut self, family: ColorFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the print finishes.
    pub fn with_finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }

    /// `rgb(r, g, b)`.
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.red, self.rgb.green, self.rgb.blue)
    }

    /// `cmyk(c%, m%, y%, k%)`, only when a recipe is recorded.
    pub fn cmyk_string(&self) -> Option<String> {
        self.cmyk.map(|cmyk| Color::Cmyk(cmyk).to_string())
    }

    /// The recorded CMYK recipe, or one derived from the RGB value.
    pub fn cmyk_or_derived(&self) -> Cmyk {
        self.cmyk.unwrap_or_else(|| self.rgb.to_cmyk())
    }

    /// The color in HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.rgb.to_hsl()
    }

    /// Text color to render on top of the swatch.
    pub fn contrast_text_color(&self) -> Hex {
        contrast_text_color(self.rgb)
    }

    /// The pinned family, or the classified one.
    pub fn family(&self) -> ColorFamily {
        self.family.unwrap_or_else(|| classify(self.rgb))
    }

    /// Check the record is complete and consistent.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument("swatch has no name".into()));
        }
        if self.code.trim().is_empty() {
            return Err(Error::InvalidArgument(format!(
                "swatch {:?} has no code",
                self.name
            )));
        }
        if self.hex.to_rgb() != self.rgb {
            return Err(Error::InvalidArgument(format!(
                "swatch {:?} has hex {} but {}",
                self.name,
                self.hex,
                self.rgb_string()
            )));
        }
        Ok(())
    }
}

impl From<&Swatch> for Color {
    fn from(value: &Swatch) -> Self {
        Color::Rgb(value.rgb)
    }
}

static PANTONE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^PANTONE\s+\d{2}-\d{4}\s+TCX$").expect("valid regex")
});

/// Whether `code` is a full Pantone textile code such as
/// `PANTONE 19-4052 TCX`, in any case.
pub fn is_valid_pantone_code(code: &str) -> bool {
    PANTONE_CODE.is_match(code)
}

/// The swatch nearest in color to `target`.
pub fn closest_swatch(swatches: &[Swatch], target: impl Into<Color>) -> Option<&Swatch> {
    closest_by(swatches, target, |swatch| swatch.rgb)
}
