//! Models are plain value types, one per color representation. Conversions
//! between them always route through [`Rgb`], the canonical form.

mod cmyk;
mod hsl;
mod rgb;

pub use cmyk::*;
pub use hsl::*;
pub use rgb::*;
