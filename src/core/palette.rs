//! Mood-to-color derivation via hue/saturation/value.

use crate::core::layout::{clamp01, lerp};
use crate::schema::mood::Mood;
use crate::schema::object::Color;

/// Hue at warmth 0 (blue-violet) and warmth 1 (orange-red), in degrees.
const COLD_HUE: f64 = 220.0;
const WARM_HUE: f64 = 30.0;
/// The horizon hue is pulled this far toward cyan.
const HORIZON_HUE: f64 = 190.0;
const HORIZON_BLEND: f64 = 0.3;
/// Ground hue at warmth 0 (green) and warmth 1 (amber).
const GROUND_COLD_HUE: f64 = 110.0;
const GROUND_WARM_HUE: f64 = 40.0;
const KEY_SATURATION: f64 = 0.2;

/// Convert HSV to RGB. Hue is in degrees and wraps; saturation and value
/// are clamped to [0, 1] first, so every channel lands in [0, 1].
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Color {
    let s = clamp01(saturation);
    let v = clamp01(value);
    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::new(r, g, b)
}

/// The four base colors every scene is tinted from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub ground: Color,
    pub key: Color,
}

impl Palette {
    pub fn from_mood(mood: &Mood) -> Self {
        let val = mood.valence01();
        let desaturation = 0.15 + 0.35 * mood.nostalgia;
        let hue = lerp(COLD_HUE, WARM_HUE, mood.warmth);

        Self {
            sky_top: hsv_to_rgb(hue, 0.5 - desaturation, lerp(0.3, 0.8, val)),
            sky_bottom: hsv_to_rgb(
                lerp(hue, HORIZON_HUE, HORIZON_BLEND),
                0.6 - desaturation,
                lerp(0.2, 0.6, val),
            ),
            ground: hsv_to_rgb(
                lerp(GROUND_COLD_HUE, GROUND_WARM_HUE, mood.warmth),
                0.6 - desaturation,
                lerp(0.3, 0.7, val),
            ),
            key: hsv_to_rgb(hue, KEY_SATURATION, lerp(0.6, 1.0, val)),
        }
    }

    /// Tint for the memory orbs: halfway between key light and zenith.
    pub fn orb(&self) -> Color {
        self.key.average(&self.sky_top)
    }

    /// Blue-leaning water tint taken from the zenith.
    pub fn water(&self) -> Color {
        self.sky_top.tinted(0.5, 0.6, 1.0)
    }

    /// Canopy tint: the ground color, greener and less saturated.
    pub fn canopy(&self) -> Color {
        self.ground.tinted(0.6, 1.05, 0.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color(c: Color, r: f64, g: f64, b: f64) {
        let ok = (c.r - r).abs() < 1e-9 && (c.g - g).abs() < 1e-9 && (c.b - b).abs() < 1e-9;
        assert!(ok, "{c:?} != ({r}, {g}, {b})");
    }

    #[test]
    fn primary_hues() {
        assert_color(hsv_to_rgb(0.0, 1.0, 1.0), 1.0, 0.0, 0.0);
        assert_color(hsv_to_rgb(120.0, 1.0, 1.0), 0.0, 1.0, 0.0);
        assert_color(hsv_to_rgb(240.0, 1.0, 1.0), 0.0, 0.0, 1.0);
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 0.5, 0.5), hsv_to_rgb(240.0, 0.5, 0.5));
    }

    #[test]
    fn saturation_and_value_are_clamped() {
        assert_eq!(hsv_to_rgb(30.0, -0.4, 0.5), hsv_to_rgb(30.0, 0.0, 0.5));
        assert_eq!(hsv_to_rgb(30.0, 0.5, 1.7), hsv_to_rgb(30.0, 0.5, 1.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_color(hsv_to_rgb(200.0, 0.0, 0.4), 0.4, 0.4, 0.4);
    }

    #[test]
    fn cold_mood_is_blue() {
        let palette = Palette::from_mood(&Mood::new(0.0, 0.0, 0.0, 0.0));
        assert!(palette.sky_top.b > palette.sky_top.r);
        assert!(palette.sky_top.b > palette.sky_top.g);
    }

    #[test]
    fn warm_mood_is_orange() {
        let palette = Palette::from_mood(&Mood::new(0.0, 0.0, 1.0, 0.0));
        assert!(palette.sky_top.r > palette.sky_top.b);
        assert!(palette.key.r > palette.key.b);
    }

    #[test]
    fn valence_brightens_the_sky() {
        let dark = Palette::from_mood(&Mood::new(-1.0, 0.0, 0.5, 0.5));
        let bright = Palette::from_mood(&Mood::new(1.0, 0.0, 0.5, 0.5));
        let max = |c: Color| c.r.max(c.g).max(c.b);
        assert!((max(dark.sky_top) - 0.3).abs() < 1e-9);
        assert!((max(bright.sky_top) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn nostalgia_desaturates() {
        let spread = |c: Color| c.r.max(c.g).max(c.b) - c.r.min(c.g).min(c.b);
        let vivid = Palette::from_mood(&Mood::new(0.5, 0.0, 0.2, 0.0));
        let faded = Palette::from_mood(&Mood::new(0.5, 0.0, 0.2, 1.0));
        assert!(spread(faded.sky_top) < spread(vivid.sky_top));
        // 0.5 - 0.5 clamps to zero saturation.
        assert!(spread(faded.sky_top) < 1e-12);
    }

    #[test]
    fn horizon_differs_from_zenith() {
        let palette = Palette::from_mood(&Mood::new(0.2, 0.1, 0.6, 0.3));
        assert_ne!(palette.sky_top, palette.sky_bottom);
    }
}
