//! Hue-rotation schemes.
//!
//! Each scheme is a static table: fixed or base-hue-tinted backdrop colors, a
//! hue per accent role, and saturation/lightness bands that are sampled per
//! generation. The generator interprets the table, so adding a scheme never
//! means adding control flow.

use crate::color::{hex, Color, Hsl};
use crate::pipeline::entropy::Entropy;
use crate::pipeline::mapping::{ColorMapping, Role};

/// `min + random_float() * span`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Band {
    pub min: f64,
    pub span: f64,
}

impl Band {
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            span: 0.0,
        }
    }

    pub const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    fn sample(self, entropy: &mut dyn Entropy) -> f64 {
        if self.span == 0.0 {
            self.min
        } else {
            self.min + entropy.jitter(self.span)
        }
    }
}

/// A backdrop color: either a literal, or the scheme's base hue at a given
/// saturation and sampled lightness.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Swatch {
    Literal(Color),
    Tinted { saturation: f64, lightness: Band },
}

impl Swatch {
    fn resolve(self, base_hue: f64, entropy: &mut dyn Entropy) -> Color {
        match self {
            Swatch::Literal(color) => color,
            Swatch::Tinted {
                saturation,
                lightness,
            } => Hsl::new(base_hue, saturation, lightness.sample(entropy)).to_color(),
        }
    }
}

/// How an accent hue is derived from its table entry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum HueRule {
    /// Table hue as-is.
    Fixed,
    /// `base + hue * 0.618 + random * jitter`.
    Golden { jitter: f64 },
    /// `base + hue + random * jitter - jitter / 2`.
    Offset { jitter: f64 },
}

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618;

impl HueRule {
    fn resolve(self, base_hue: f64, table_hue: f64, entropy: &mut dyn Entropy) -> f64 {
        match self {
            HueRule::Fixed => table_hue,
            HueRule::Golden { jitter } => {
                base_hue + table_hue * GOLDEN_RATIO_CONJUGATE + entropy.jitter(jitter)
            }
            HueRule::Offset { jitter } => base_hue + table_hue + entropy.centered(jitter),
        }
    }
}

/// Bright variant: lightness raised by `lightness` up to `cap`, saturation
/// raised by `saturation` up to 1.0.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrightRule {
    pub lightness: f64,
    pub cap: f64,
    pub saturation: f64,
}

impl BrightRule {
    pub const fn lighten(lightness: f64, cap: f64) -> Self {
        Self {
            lightness,
            cap,
            saturation: 0.0,
        }
    }

    pub fn apply(self, hsl: Hsl) -> Hsl {
        hsl.brighten(self.lightness, self.cap).saturate(self.saturation)
    }
}

/// Black and white slots, which sit outside the accent hue wheel.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Extremes {
    /// Literal normal/bright pairs.
    Literal {
        black: (Color, Color),
        white: (Color, Color),
    },
    /// Base hue at low saturation; bright follows the accent rule.
    Tinted {
        saturation: f64,
        black: Band,
        white: Band,
    },
}

/// Red through cyan, in slot order.
pub(crate) const ACCENTS: [Role; 6] = [
    Role::Red,
    Role::Green,
    Role::Yellow,
    Role::Blue,
    Role::Magenta,
    Role::Cyan,
];

#[derive(Debug, Clone, Copy)]
pub(crate) enum Ansi {
    Wheel {
        extremes: Extremes,
        hues: [f64; 6],
        hue: HueRule,
        saturation: Band,
        lightness: Band,
        bright: BrightRule,
    },
    /// Every slot at the base hue, walking a fixed lightness ramp.
    Ramp {
        saturation: f64,
        normal: [f64; 8],
        bright: [f64; 8],
    },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HueScheme {
    /// Draw a random base hue before anything else.
    pub random_base: bool,
    pub background: Swatch,
    pub foreground: Swatch,
    pub selection: Swatch,
    pub ansi: Ansi,
}

pub(crate) const RANDOM: HueScheme = HueScheme {
    random_base: true,
    background: Swatch::Tinted {
        saturation: 0.15,
        lightness: Band::new(0.0, 0.2),
    },
    foreground: Swatch::Tinted {
        saturation: 0.1,
        lightness: Band::new(0.8, 0.2),
    },
    selection: Swatch::Tinted {
        saturation: 0.4,
        lightness: Band::fixed(0.25),
    },
    ansi: Ansi::Wheel {
        extremes: Extremes::Tinted {
            saturation: 0.1,
            black: Band::new(0.0, 0.15),
            white: Band::new(0.85, 0.15),
        },
        hues: [0.0, 0.33, 0.16, 0.66, 0.83, 0.5],
        hue: HueRule::Golden { jitter: 0.05 },
        saturation: Band::new(0.7, 0.3),
        lightness: Band::new(0.45, 0.25),
        bright: BrightRule {
            lightness: 0.25,
            cap: 0.9,
            saturation: 0.1,
        },
    },
};

pub(crate) const PASTEL: HueScheme = HueScheme {
    random_base: true,
    background: Swatch::Literal(hex("#faf7f4")),
    foreground: Swatch::Literal(hex("#5c5c5c")),
    selection: Swatch::Literal(hex("#e8e0db")),
    ansi: Ansi::Wheel {
        extremes: Extremes::Literal {
            black: (hex("#f0ede8"), hex("#d4ccc2")),
            white: (hex("#928374"), hex("#7c6f64")),
        },
        hues: [0.0, 0.25, 0.15, 0.6, 0.8, 0.5],
        hue: HueRule::Offset { jitter: 0.1 },
        saturation: Band::new(0.3, 0.2),
        lightness: Band::new(0.6, 0.15),
        bright: BrightRule {
            lightness: 0.15,
            cap: 0.85,
            saturation: 0.1,
        },
    },
};

pub(crate) const NEON: HueScheme = HueScheme {
    random_base: false,
    background: Swatch::Literal(hex("#0a0a0a")),
    foreground: Swatch::Literal(hex("#00ff00")),
    selection: Swatch::Literal(hex("#333333")),
    ansi: Ansi::Wheel {
        extremes: Extremes::Literal {
            black: (hex("#1a1a1a"), hex("#333333")),
            white: (hex("#ffffff"), hex("#ffffff")),
        },
        hues: [0.0, 0.33, 0.16, 0.66, 0.83, 0.5],
        hue: HueRule::Fixed,
        saturation: Band::fixed(1.0),
        lightness: Band::new(0.5, 0.3),
        bright: BrightRule::lighten(0.2, 1.0),
    },
};

pub(crate) const MONO: HueScheme = HueScheme {
    random_base: true,
    background: Swatch::Tinted {
        saturation: 0.05,
        lightness: Band::fixed(0.08),
    },
    foreground: Swatch::Tinted {
        saturation: 0.05,
        lightness: Band::fixed(0.85),
    },
    selection: Swatch::Tinted {
        saturation: 0.1,
        lightness: Band::fixed(0.2),
    },
    ansi: Ansi::Ramp {
        saturation: 0.1,
        normal: [0.1, 0.2, 0.35, 0.45, 0.55, 0.65, 0.75, 0.9],
        bright: [0.2, 0.3, 0.45, 0.55, 0.65, 0.75, 0.85, 1.0],
    },
};

pub(crate) const WARM: HueScheme = HueScheme {
    random_base: false,
    background: Swatch::Literal(hex("#2d1b12")),
    foreground: Swatch::Literal(hex("#f4e8d0")),
    selection: Swatch::Literal(hex("#4a3426")),
    ansi: Ansi::Wheel {
        extremes: Extremes::Literal {
            black: (hex("#1a0f08"), hex("#3d2317")),
            white: (hex("#f4e8d0"), hex("#fff8e7")),
        },
        hues: [0.0, 0.08, 0.15, 0.05, 0.02, 0.12],
        hue: HueRule::Fixed,
        saturation: Band::new(0.6, 0.3),
        lightness: Band::new(0.4, 0.3),
        bright: BrightRule::lighten(0.2, 1.0),
    },
};

pub(crate) const COOL: HueScheme = HueScheme {
    random_base: false,
    background: Swatch::Literal(hex("#0f1419")),
    foreground: Swatch::Literal(hex("#e6f1ff")),
    selection: Swatch::Literal(hex("#1f2937")),
    ansi: Ansi::Wheel {
        extremes: Extremes::Literal {
            black: (hex("#0b0e14"), hex("#1f2328")),
            white: (hex("#e6f1ff"), hex("#ffffff")),
        },
        hues: [0.95, 0.4, 0.45, 0.6, 0.75, 0.5],
        hue: HueRule::Fixed,
        saturation: Band::new(0.6, 0.3),
        lightness: Band::new(0.4, 0.3),
        bright: BrightRule::lighten(0.2, 1.0),
    },
};

pub(crate) const NATURE: HueScheme = HueScheme {
    random_base: false,
    background: Swatch::Literal(hex("#1a2318")),
    foreground: Swatch::Literal(hex("#e8f5e8")),
    selection: Swatch::Literal(hex("#2d3a2b")),
    ansi: Ansi::Wheel {
        extremes: Extremes::Literal {
            black: (hex("#0f1a0e"), hex("#2d3a2b")),
            white: (hex("#e8f5e8"), hex("#f0fff0")),
        },
        hues: [0.02, 0.25, 0.12, 0.55, 0.8, 0.45],
        hue: HueRule::Fixed,
        saturation: Band::new(0.5, 0.3),
        lightness: Band::new(0.4, 0.2),
        bright: BrightRule::lighten(0.15, 1.0),
    },
};

pub(crate) const CYBERPUNK: HueScheme = HueScheme {
    random_base: false,
    background: Swatch::Literal(hex("#0d001a")),
    foreground: Swatch::Literal(hex("#00ff41")),
    selection: Swatch::Literal(hex("#330066")),
    ansi: Ansi::Wheel {
        extremes: Extremes::Literal {
            black: (hex("#1a0033"), hex("#330066")),
            white: (hex("#00ff41"), hex("#66ff99")),
        },
        hues: [0.95, 0.33, 0.16, 0.66, 0.83, 0.5],
        hue: HueRule::Fixed,
        saturation: Band::new(0.9, 0.1),
        lightness: Band::new(0.5, 0.2),
        bright: BrightRule::lighten(0.2, 1.0),
    },
};

/// Generate a full mapping from a hue-rotation table.
pub(crate) fn generate(scheme: &HueScheme, entropy: &mut dyn Entropy) -> ColorMapping {
    let base_hue = if scheme.random_base {
        entropy.random_float()
    } else {
        0.0
    };

    let mut colors = ColorMapping::new();
    colors.insert(Role::Background, scheme.background.resolve(base_hue, entropy));
    colors.insert(Role::Foreground, scheme.foreground.resolve(base_hue, entropy));
    colors.insert(
        Role::SelectionBackground,
        scheme.selection.resolve(base_hue, entropy),
    );

    match scheme.ansi {
        Ansi::Wheel {
            extremes,
            hues,
            hue,
            saturation,
            lightness,
            bright,
        } => {
            match extremes {
                Extremes::Literal { black, white } => {
                    insert_pair(&mut colors, Role::Black, black);
                    insert_pair(&mut colors, Role::White, white);
                }
                Extremes::Tinted {
                    saturation,
                    black,
                    white,
                } => {
                    for (role, band) in [(Role::Black, black), (Role::White, white)] {
                        let hsl = Hsl::new(base_hue, saturation, band.sample(entropy));
                        insert_with_bright(&mut colors, role, hsl, bright);
                    }
                }
            }

            for (role, table_hue) in ACCENTS.into_iter().zip(hues) {
                let h = hue.resolve(base_hue, table_hue, entropy);
                let s = saturation.sample(entropy);
                let l = lightness.sample(entropy);
                insert_with_bright(&mut colors, role, Hsl::new(h, s, l), bright);
            }
        }
        Ansi::Ramp {
            saturation,
            normal,
            bright,
        } => {
            for (i, role) in Role::NORMAL.into_iter().enumerate() {
                colors.insert_hsl(role, Hsl::new(base_hue, saturation, normal[i]));
                colors.insert_hsl(
                    Role::BRIGHT[i],
                    Hsl::new(base_hue, saturation, bright[i].min(1.0)),
                );
            }
        }
    }

    colors
}

fn insert_pair(colors: &mut ColorMapping, role: Role, (normal, bright): (Color, Color)) {
    colors.insert(role, normal);
    if let Some(bright_role) = role.bright() {
        colors.insert(bright_role, bright);
    }
}

fn insert_with_bright(colors: &mut ColorMapping, role: Role, hsl: Hsl, rule: BrightRule) {
    colors.insert_hsl(role, hsl);
    if let Some(bright_role) = role.bright() {
        colors.insert_hsl(bright_role, rule.apply(hsl));
    }
}
