use log::trace;

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    hex::Hex,
    math::{lerp, round_channel},
    models::Rgb,
};

impl Rgb {
    /// Linearly interpolate each channel from this color to another, using
    /// `t` as the progress between them.
    pub fn interpolate(&self, other: &Self, t: Component) -> Rgb {
        let channel = |a: u8, b: u8| round_channel(lerp(a as Component, b as Component, t));

        Rgb::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
        )
    }
}

/// A gradient of `steps + 1` colors from `a` to `b`, both included.
///
/// Zero steps can not be divided into and is rejected with
/// [`Error::InvalidArgument`].
pub fn interpolate(a: impl Into<Color>, b: impl Into<Color>, steps: usize) -> Result<Vec<Hex>> {
    if steps == 0 {
        return Err(Error::InvalidArgument(
            "interpolation needs at least one step".into(),
        ));
    }

    let left = a.into().to_rgb();
    let right = b.into().to_rgb();
    trace!("interpolating {left:?} to {right:?} in {steps} steps");

    Ok((0..=steps)
        .map(|i| {
            left.interpolate(&right, i as Component / steps as Component)
                .to_hex()
        })
        .collect())
}

/// [`interpolate`] between two hex strings.
pub fn interpolate_hex(a: &str, b: &str, steps: usize) -> Result<Vec<Hex>> {
    interpolate(a.parse::<Hex>()?, b.parse::<Hex>()?, steps)
}
