use tracing::warn;

use crate::cli::ThemeMode;
use crate::color::{hex, Color};
use crate::pipeline::mapping::{ColorMapping, Role};

const DARK_FALLBACK_BACKGROUND: Color = hex("#1a1a1a");
const DARK_FOREGROUND: Color = hex("#e5e5e5");
const LIGHT_FALLBACK_BACKGROUND: Color = hex("#f8f8f8");
const LIGHT_FOREGROUND: Color = hex("#2a2a2a");

/// Derive a darker or lighter variant of a generated mapping.
///
/// Only background and foreground change; every other role passes through.
pub fn apply_variant(mut colors: ColorMapping, mode: Option<ThemeMode>) -> ColorMapping {
    let Some(mode) = mode else {
        return colors;
    };

    let background = match (mode, colors.get(Role::Background)) {
        (ThemeMode::Dark, Some(bg)) => darken(bg),
        (ThemeMode::Dark, None) => DARK_FALLBACK_BACKGROUND,
        (ThemeMode::Light, Some(bg)) => lighten(bg),
        (ThemeMode::Light, None) => LIGHT_FALLBACK_BACKGROUND,
    };
    let foreground = match mode {
        ThemeMode::Dark => DARK_FOREGROUND,
        ThemeMode::Light => LIGHT_FOREGROUND,
    };

    colors.insert(Role::Background, background);
    colors.insert(Role::Foreground, foreground);
    colors
}

/// Flag form used by callers that carry separate dark/light switches.
///
/// Dark wins when both are set.
pub fn apply_variant_flags(colors: ColorMapping, dark: bool, light: bool) -> ColorMapping {
    if dark && light {
        warn!("both dark and light variants requested; using dark");
    }
    apply_variant(colors, ThemeMode::from_flags(dark, light))
}

/// Scale every channel to 30%.
fn darken(c: Color) -> Color {
    let scale = |v: u8| (f64::from(v) * 0.3) as i32;
    Color::from_channels(scale(c.r), scale(c.g), scale(c.b))
}

/// Move every channel 90% of the way to 255.
fn lighten(c: Color) -> Color {
    let lift = |v: u8| 255 - (f64::from(255 - v) * 0.1) as i32;
    Color::from_channels(lift(c.r), lift(c.g), lift(c.b))
}
