//! Color utilities shared by the sampling pipeline and the page renderer.
//!
//! Colors travel through the crate as the CSS-style `rgb(r, g, b)` string;
//! [`Rgb`] is the structured form and the two are interconvertible for any
//! valid triple. Anything unparsable degrades to the white fallback rather
//! than surfacing an error.

use std::fmt;

/// Fallback color for unreadable icons and unparsable color strings.
pub const FALLBACK_COLOR: &str = "#ffffff";

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the first three integer runs out of a color string.
    ///
    /// Accepts any `rgb(...)`-shaped input without being strict about the
    /// surrounding syntax. Returns `None` when fewer than three numbers are
    /// present; channels above 255 are clamped.
    pub fn parse(input: &str) -> Option<Self> {
        let mut runs = input
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty());
        let mut channel = || {
            runs.next()
                .and_then(|run| run.parse::<u32>().ok())
                .map(|value| value.min(255) as u8)
        };
        Some(Self {
            r: channel()?,
            g: channel()?,
            b: channel()?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The two text treatments a card can use over its background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    /// Dark text for light backgrounds.
    Dark,
    /// White text for dark backgrounds.
    Light,
}

impl TextTone {
    /// CSS class the page stylesheet defines for this tone.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "text-dark",
            Self::Light => "text-light",
        }
    }
}

/// Perceived brightness of a color string on a 0–255 scale.
///
/// Uses the Rec. 601 luma weights. Unparsable input is treated as a light
/// background (255) so text selection falls back to dark-on-light.
pub fn brightness(color: &str) -> f64 {
    match Rgb::parse(color) {
        Some(Rgb { r, g, b }) => {
            (f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0
        }
        None => 255.0,
    }
}

/// Pick the readable text tone for the given background color.
///
/// Brightness strictly above 128 gets dark text; everything else, including
/// exactly 128, gets white text.
pub fn text_tone_for(background: &str) -> TextTone {
    if brightness(background) > 128.0 {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}

/// Return a perceptibly lighter variant of `color` as a canonical string.
///
/// Near-black inputs jump straight to mid-gray since black carries no hue or
/// saturation to preserve; near-white inputs stay white. Everything else
/// gains 30 lightness points in HSL space, capped at 95% so the result never
/// washes out to pure white.
pub fn lighten(color: &str) -> String {
    let Some(rgb) = Rgb::parse(color) else {
        return FALLBACK_COLOR.to_string();
    };
    if rgb.r <= 30 && rgb.g <= 30 && rgb.b <= 30 {
        return Rgb::new(128, 128, 128).to_string();
    }
    if rgb.r >= 240 && rgb.g >= 240 && rgb.b >= 240 {
        return Rgb::WHITE.to_string();
    }
    let (h, s, l) = rgb_to_hsl(rgb);
    let lifted = (l + 30.0).min(95.0);
    hsl_to_rgb(h, s, lifted).to_string()
}

/// RGB to HSL. Hue in degrees [0, 360), saturation and lightness as
/// percentages [0, 100].
pub(crate) fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;
    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    (h * 360.0, s * 100.0, l * 100.0)
}

/// HSL back to RGB, rounding each channel to the nearest integer.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
