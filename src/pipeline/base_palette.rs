//! Base-palette schemes: a well-known community palette, perturbed slightly in
//! HSL on every generation.

use crate::color::{hex, Color, Hsl};
use crate::pipeline::entropy::Entropy;
use crate::pipeline::mapping::{ColorMapping, Role};

/// Full width of the symmetric jitter applied to each HSL component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Jitter {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct BasePalette {
    pub colors: [(Role, Color); 11],
    pub jitter: Jitter,
    pub bright_lightness: f64,
    pub bright_saturation: f64,
}

pub(crate) const DRACULA: BasePalette = BasePalette {
    colors: [
        (Role::Background, hex("#282a36")),
        (Role::Foreground, hex("#f8f8f2")),
        (Role::SelectionBackground, hex("#44475a")),
        (Role::Black, hex("#21222c")),
        (Role::Red, hex("#ff5555")),
        (Role::Green, hex("#50fa7b")),
        (Role::Yellow, hex("#f1fa8c")),
        (Role::Blue, hex("#bd93f9")),
        (Role::Magenta, hex("#ff79c6")),
        (Role::Cyan, hex("#8be9fd")),
        (Role::White, hex("#f8f8f2")),
    ],
    jitter: Jitter {
        hue: 0.05,
        saturation: 0.1,
        lightness: 0.05,
    },
    bright_lightness: 0.15,
    bright_saturation: 0.0,
};

pub(crate) const NORD: BasePalette = BasePalette {
    colors: [
        (Role::Background, hex("#2e3440")),
        (Role::Foreground, hex("#d8dee9")),
        (Role::SelectionBackground, hex("#434c5e")),
        (Role::Black, hex("#3b4252")),
        (Role::Red, hex("#bf616a")),
        (Role::Green, hex("#a3be8c")),
        (Role::Yellow, hex("#ebcb8b")),
        (Role::Blue, hex("#81a1c1")),
        (Role::Magenta, hex("#b48ead")),
        (Role::Cyan, hex("#88c0d0")),
        (Role::White, hex("#e5e9f0")),
    ],
    jitter: Jitter {
        hue: 0.03,
        saturation: 0.05,
        lightness: 0.03,
    },
    bright_lightness: 0.1,
    bright_saturation: 0.0,
};

pub(crate) const SOLARIZED: BasePalette = BasePalette {
    colors: [
        (Role::Background, hex("#002b36")),
        (Role::Foreground, hex("#839496")),
        (Role::SelectionBackground, hex("#073642")),
        (Role::Black, hex("#073642")),
        (Role::Red, hex("#dc322f")),
        (Role::Green, hex("#859900")),
        (Role::Yellow, hex("#b58900")),
        (Role::Blue, hex("#268bd2")),
        (Role::Magenta, hex("#d33682")),
        (Role::Cyan, hex("#2aa198")),
        (Role::White, hex("#eee8d5")),
    ],
    jitter: Jitter {
        hue: 0.02,
        saturation: 0.03,
        lightness: 0.02,
    },
    bright_lightness: 0.12,
    bright_saturation: 0.0,
};

pub(crate) const GRUVBOX: BasePalette = BasePalette {
    colors: [
        (Role::Background, hex("#282828")),
        (Role::Foreground, hex("#ebdbb2")),
        (Role::SelectionBackground, hex("#3c3836")),
        (Role::Black, hex("#282828")),
        (Role::Red, hex("#cc241d")),
        (Role::Green, hex("#98971a")),
        (Role::Yellow, hex("#d79921")),
        (Role::Blue, hex("#458588")),
        (Role::Magenta, hex("#b16286")),
        (Role::Cyan, hex("#689d6a")),
        (Role::White, hex("#a89984")),
    ],
    jitter: Jitter {
        hue: 0.04,
        saturation: 0.08,
        lightness: 0.04,
    },
    bright_lightness: 0.15,
    bright_saturation: 0.05,
};

/// Perturb every base color and derive bright variants for the ANSI roles.
pub(crate) fn generate(palette: &BasePalette, entropy: &mut dyn Entropy) -> ColorMapping {
    let mut colors = ColorMapping::new();

    for (role, base) in palette.colors {
        let hsl = base.to_hsl();
        let hsl = Hsl::new(
            hsl.h + entropy.centered(palette.jitter.hue),
            hsl.s + entropy.centered(palette.jitter.saturation),
            hsl.l + entropy.centered(palette.jitter.lightness),
        );
        colors.insert_hsl(role, hsl);

        if let Some(bright_role) = role.bright() {
            let bright = hsl
                .brighten(palette.bright_lightness, 1.0)
                .saturate(palette.bright_saturation);
            colors.insert_hsl(bright_role, bright);
        }
    }

    colors
}
