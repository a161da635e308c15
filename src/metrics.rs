//! Distances between colors and readable text colors.

use log::debug;

use crate::{
    color::{Color, Component},
    error::Result,
    hex::Hex,
    math::euclidean_distance,
    models::Rgb,
};

/// Largest possible [`distance`], between black and white.
pub const MAX_DISTANCE: Component = 441.672_96;

/// Luminance above which dark text is more readable.
pub const CONTRAST_LUMINANCE_THRESHOLD: Component = 0.5;

fn channels(rgb: Rgb) -> [Component; 3] {
    rgb.to_components().map(Component::from)
}

/// Euclidean distance between two colors in RGB space, in [0,
/// [`MAX_DISTANCE`]].
pub fn distance(a: impl Into<Color>, b: impl Into<Color>) -> Component {
    euclidean_distance(channels(a.into().to_rgb()), channels(b.into().to_rgb()))
}

/// [`distance`] between two hex strings.
pub fn distance_hex(a: &str, b: &str) -> Result<Component> {
    Ok(distance(a.parse::<Hex>()?, b.parse::<Hex>()?))
}

/// Weighted brightness in [0, 1]: `(0.299 r + 0.587 g + 0.114 b) / 255`.
///
/// This is the simple luma weighting, not WCAG relative luminance; there is
/// no gamma decoding.
pub fn luminance(color: impl Into<Color>) -> Component {
    let [red, green, blue] = channels(color.into().to_rgb());
    (0.299 * red + 0.587 * green + 0.114 * blue) / 255.0
}

/// Black or white, whichever reads better on top of `background`.
pub fn contrast_text_color(background: impl Into<Color>) -> Hex {
    if luminance(background) > CONTRAST_LUMINANCE_THRESHOLD {
        Rgb::BLACK.to_hex()
    } else {
        Rgb::WHITE.to_hex()
    }
}

/// [`contrast_text_color`] for a hex string. Unparsable input gets black
/// text, so a swatch can always render.
pub fn contrast_text_color_hex(background: &str) -> Hex {
    match background.parse::<Hex>() {
        Ok(hex) => contrast_text_color(hex),
        Err(err) => {
            debug!("falling back to black text: {err}");
            Rgb::BLACK.to_hex()
        }
    }
}

/// The candidate nearest to `target`, `color_of` extracting each candidate's
/// color. The first candidate wins a tie. Returns `None` when there are no
/// candidates.
pub fn closest_by<'a, T>(
    candidates: &'a [T],
    target: impl Into<Color>,
    color_of: impl Fn(&T) -> Rgb,
) -> Option<&'a T> {
    let target = target.into().to_rgb();
    candidates
        .iter()
        .map(|candidate| (distance(color_of(candidate), target), candidate))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, candidate)| candidate)
}

/// The color in `candidates` nearest to `target`.
pub fn closest(candidates: &[Rgb], target: impl Into<Color>) -> Option<Rgb> {
    closest_by(candidates, target, |rgb| *rgb).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_extremes() {
        assert_eq!(distance(Rgb::BLACK, Rgb::BLACK), 0.0);
        approx::assert_abs_diff_eq!(distance(Rgb::BLACK, Rgb::WHITE), MAX_DISTANCE, epsilon = 1.0e-3);
        assert_eq!(distance(Rgb::new(0, 0, 0), Rgb::new(3, 4, 12)), 13.0);
    }

    #[test]
    fn distance_of_hex_strings() {
        assert_eq!(distance_hex("#000", "#FF0000").unwrap(), 255.0);
        assert!(distance_hex("#000", "nope").is_err());
    }

    #[test]
    fn contrast() {
        assert_eq!(contrast_text_color_hex("#000000").as_str(), "#FFFFFF");
        assert_eq!(contrast_text_color_hex("#FFFFFF").as_str(), "#000000");
        // Pure yellow is bright, pure blue is dark.
        assert_eq!(contrast_text_color(Rgb::new(255, 255, 0)).as_str(), "#000000");
        assert_eq!(contrast_text_color(Rgb::new(0, 0, 255)).as_str(), "#FFFFFF");
        assert_eq!(luminance(Rgb::BLACK), 0.0);
        approx::assert_abs_diff_eq!(luminance(Rgb::WHITE), 1.0, epsilon = 1.0e-5);
        assert_eq!(contrast_text_color_hex("garbage").as_str(), "#000000");
    }

    #[test]
    fn closest_prefers_the_first_on_ties() {
        let candidates = [Rgb::new(0, 0, 10), Rgb::new(0, 10, 0), Rgb::new(200, 0, 0)];
        assert_eq!(closest(&candidates, Rgb::BLACK), Some(Rgb::new(0, 0, 10)));
        assert_eq!(closest(&candidates, Rgb::new(255, 0, 0)), Some(Rgb::new(200, 0, 0)));
        assert_eq!(closest(&[], Rgb::BLACK), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rgb() -> impl Strategy<Value = Rgb> {
            any::<[u8; 3]>().prop_map(Rgb::from)
        }

        proptest! {
            #[test]
            fn distance_is_symmetric(a in rgb(), b in rgb()) {
                prop_assert_eq!(distance(a, b), distance(b, a));
                prop_assert_eq!(distance(a, a), 0.0);
                prop_assert!(distance(a, b) <= MAX_DISTANCE + 1.0e-3);
            }
        }
    }
}
