use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{Result, ThemeError};

/// Core color type used throughout the generator.
/// Wraps sRGB u8 components and converts to and from HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from channel arithmetic, clamping each channel to [0, 255].
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Parse a strict `#rrggbb` string. Digits may be upper or lower case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ThemeError::InvalidHexFormat(hex.to_string());
        if hex.len() != 7 || !hex.starts_with('#') {
            return Err(invalid());
        }
        if !hex[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let srgb: Srgb<u8> = hex.parse().map_err(|_| invalid())?;
        Ok(Self::from_srgb_u8(srgb))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    /// Convert to HSL using the max/min channel algorithm.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            let h = (g - b) / d;
            if g < b {
                h + 6.0
            } else {
                h
            }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }

    /// WCAG relative luminance.
    ///
    /// Linearizes each sRGB channel (threshold 0.03928), then computes the
    /// weighted sum.
    pub fn relative_luminance(self) -> f64 {
        fn linearize(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// Parse a `#rrggbb` literal in const context.
///
/// Used for scheme tables: a malformed literal fails the build instead of
/// surfacing as `InvalidHexFormat` at runtime.
pub const fn hex(literal: &str) -> Color {
    let bytes = literal.as_bytes();
    assert!(
        bytes.len() == 7 && bytes[0] == b'#',
        "hex literal must look like #rrggbb"
    );
    Color::new(
        hex_pair(bytes[1], bytes[2]),
        hex_pair(bytes[3], bytes[4]),
        hex_pair(bytes[5], bytes[6]),
    )
}

const fn hex_pair(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) * 16 + hex_digit(lo)
}

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Hue, saturation and lightness, all as fractions.
///
/// Hue is measured in turns and kept in [0, 1); saturation and lightness are
/// clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(1.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Convert to RGB. Channels are truncated, not rounded.
    pub fn to_color(self) -> Color {
        let (r, g, b) = if self.s == 0.0 {
            (self.l, self.l, self.l)
        } else {
            let q = if self.l < 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - self.l * self.s
            };
            let p = 2.0 * self.l - q;
            (
                hue_to_rgb(p, q, self.h + 1.0 / 3.0),
                hue_to_rgb(p, q, self.h),
                hue_to_rgb(p, q, self.h - 1.0 / 3.0),
            )
        };

        Color::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Raise lightness by `delta`, capped at `cap`, never below the current value.
    pub fn brighten(self, delta: f64, cap: f64) -> Self {
        let l = (self.l + delta).min(cap).max(self.l);
        Self::new(self.h, self.s, l)
    }

    /// Raise saturation by `delta`, capped at 1.0.
    pub fn saturate(self, delta: f64) -> Self {
        Self::new(self.h, (self.s + delta).min(1.0), self.l)
    }
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

fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}
