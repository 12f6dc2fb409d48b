//! Easing curves for label transitions.
//!
//! A curve maps elapsed time as a fraction of the duration (0.0 to 1.0) onto
//! the fraction of the distance travelled. The floating label uses
//! [`Easing::EaseOut`], which moves quickly at first and settles gently.

use serde::{Deserialize, Serialize};

/// Curve shapes, named as in config files (`"ease-out"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// t²
    EaseIn,
    /// 1 − (1 − t)²
    #[default]
    EaseOut,
    /// Ease-in for the first half, ease-out for the second.
    EaseInOut,
}

/// Fraction of the distance covered at time fraction `t` (clamped to `0.0..=1.0`).
///
/// ```
/// use floatsearch::animation::{ease, Easing};
///
/// // Halfway through a 300ms fade-in the label is already 75% opaque.
/// assert_eq!(ease(Easing::EaseOut, 0.5), 0.75);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Value between `start` and `end` at time fraction `t` along `easing`.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut];

    #[test]
    fn test_curves_pin_endpoints() {
        for curve in CURVES {
            assert_eq!(ease(curve, 0.0), 0.0, "{curve:?}");
            assert_eq!(ease(curve, 1.0), 1.0, "{curve:?}");
            assert_eq!(ease(curve, -0.5), 0.0, "{curve:?}");
            assert_eq!(ease(curve, 1.5), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn test_curve_shapes_at_quarter_time() {
        assert_eq!(ease(Easing::Linear, 0.25), 0.25);
        assert_eq!(ease(Easing::EaseIn, 0.25), 0.0625);
        assert_eq!(ease(Easing::EaseOut, 0.25), 0.4375);
        assert_eq!(ease(Easing::EaseInOut, 0.25), 0.125);
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
    }

    #[test]
    fn test_label_drop_interpolation() {
        // Collapsed at y = 15, floating at y = -15.
        assert_eq!(lerp_eased(Easing::Linear, 15.0, -15.0, 0.5), 0.0);
        assert_eq!(lerp_eased(Easing::EaseOut, 15.0, -15.0, 0.5), -7.5);
    }

    #[test]
    fn test_config_names() {
        #[derive(serde::Deserialize)]
        struct Doc {
            easing: Easing,
        }
        let doc: Doc = toml::from_str("easing = \"ease-in-out\"").unwrap();
        assert_eq!(doc.easing, Easing::EaseInOut);
    }
}
