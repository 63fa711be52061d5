//! Colour values and conversions.

use ratatui::style::Color;

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

impl Paint {
    pub const WHITE: Paint = Paint::rgb(255, 255, 255);

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Colour with the given opacity.
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Opaque colour from hue (degrees), saturation and lightness (`0.0..=1.0`).
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self::rgb(r, g, b)
    }

    /// Terminal colour, alpha dropped.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Convert HSL to RGB components.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let channel = |offset: f32| (hue_channel(p, q, h + offset) * 255.0).round() as u8;
    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

/// One RGB channel of the HSL conversion; `t` is the hue shifted for that
/// channel, in turns.
fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    match t {
        t if t < 1.0 / 6.0 => p + (q - p) * 6.0 * t,
        t if t < 0.5 => q,
        t if t < 2.0 / 3.0 => p + (q - p) * (2.0 / 3.0 - t) * 6.0,
        _ => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), (255, 0, 0));
    }

    #[test]
    fn test_hsl_fish_palette() {
        // 70% saturation, 60% lightness, as the fish use.
        assert_eq!(hsl_to_rgb(200.0, 0.7, 0.6), (82, 177, 224));
        assert_eq!(Paint::hsl(-160.0, 0.7, 0.6), Paint::hsl(200.0, 0.7, 0.6));
    }

    #[test]
    fn test_hsl_grey() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.5), (127, 127, 127));
    }
}
