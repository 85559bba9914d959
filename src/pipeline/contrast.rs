use tracing::{debug, warn};

use crate::color::Color;
use crate::pipeline::mapping::{ColorMapping, Role};

/// WCAG AA minimum for body text.
pub const DEFAULT_MIN_CONTRAST: f64 = 4.5;

const MAX_STEPS: usize = 100;
const STEP: f64 = 0.01;

/// Nudge `fg`'s HSL lightness until it reaches `min_ratio` against `bg`.
///
/// Moves away from the background: lighter on dark backgrounds, darker on
/// light ones, 0.01 per step for at most 100 steps. Gives back `fg` unchanged
/// if it already passes or no step passes.
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Color {
    let ratio = Color::contrast_ratio(&fg, &bg);
    if ratio >= min_ratio {
        return fg;
    }

    let lighter = bg.relative_luminance() <= 0.5;
    let mut hsl = fg.to_hsl();

    for step in 1..=MAX_STEPS {
        hsl.l = if lighter {
            (hsl.l + STEP).min(1.0)
        } else {
            (hsl.l - STEP).max(0.0)
        };

        let candidate = hsl.to_color();
        if Color::contrast_ratio(&candidate, &bg) >= min_ratio {
            debug!(%fg, %bg, %candidate, step, "contrast reached");
            return candidate;
        }
    }

    warn!(%fg, %bg, min_ratio, "contrast target unreachable; keeping original color");
    fg
}

/// Raise the foreground's contrast against the background in place.
///
/// Mappings without both roles are left alone.
pub fn enforce_contrast(colors: &mut ColorMapping, min_ratio: f64) {
    if let (Some(fg), Some(bg)) = (colors.get(Role::Foreground), colors.get(Role::Background)) {
        colors.insert(Role::Foreground, ensure_contrast(fg, bg, min_ratio));
    }
}
