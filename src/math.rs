//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::Component;

type Vector = Vector3D<Component>;

/// Linearly interpolate between `a` and `b`, `t` being the progress from
/// `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage into [0, 100].
pub fn clamp_percentage(value: Component) -> Component {
    num_traits::clamp(value, 0.0, 100.0)
}

/// Round a value in [0, 255] to the nearest channel value, clamping anything
/// outside the range.
pub fn round_channel(value: Component) -> u8 {
    num_traits::clamp(value.round(), 0.0, 255.0) as u8
}

/// Length of the vector between two points.
pub fn euclidean_distance(a: [Component; 3], b: [Component; 3]) -> Component {
    let delta = Vector::new(a[0] - b[0], a[1] - b[1], a[2] - b[2]);
    delta.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert!(normalize_hue(-Component::EPSILON / 4.0) < 360.0);
    }

    #[test]
    fn channels_round_and_clamp() {
        assert_eq!(round_channel(127.5), 128);
        assert_eq!(round_channel(127.49), 127);
        assert_eq!(round_channel(-3.0), 0);
        assert_eq!(round_channel(1000.0), 255);
    }

    #[test]
    fn distance_of_the_cube_diagonal() {
        let d = euclidean_distance([0.0, 0.0, 0.0], [3.0, 4.0, 12.0]);
        assert_eq!(d, 13.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }
}
