use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;
use crate::pipeline::entropy::Entropy;
use crate::pipeline::mapping::ColorMapping;
use crate::pipeline::{base_palette, hue_rotation};

/// Named color-generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Random,
    Pastel,
    Neon,
    Mono,
    Warm,
    Cool,
    Nature,
    Cyberpunk,
    Dracula,
    Nord,
    Solarized,
    Gruvbox,
}

impl Scheme {
    pub const ALL: [Scheme; 12] = [
        Scheme::Random,
        Scheme::Pastel,
        Scheme::Neon,
        Scheme::Mono,
        Scheme::Warm,
        Scheme::Cool,
        Scheme::Nature,
        Scheme::Cyberpunk,
        Scheme::Dracula,
        Scheme::Nord,
        Scheme::Solarized,
        Scheme::Gruvbox,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Random => "random",
            Scheme::Pastel => "pastel",
            Scheme::Neon => "neon",
            Scheme::Mono => "mono",
            Scheme::Warm => "warm",
            Scheme::Cool => "cool",
            Scheme::Nature => "nature",
            Scheme::Cyberpunk => "cyberpunk",
            Scheme::Dracula => "dracula",
            Scheme::Nord => "nord",
            Scheme::Solarized => "solarized",
            Scheme::Gruvbox => "gruvbox",
        }
    }

    /// Produce a fresh mapping for this scheme.
    pub fn generate(self, entropy: &mut dyn Entropy) -> ColorMapping {
        match self {
            Scheme::Random => hue_rotation::generate(&hue_rotation::RANDOM, entropy),
            Scheme::Pastel => hue_rotation::generate(&hue_rotation::PASTEL, entropy),
            Scheme::Neon => hue_rotation::generate(&hue_rotation::NEON, entropy),
            Scheme::Mono => hue_rotation::generate(&hue_rotation::MONO, entropy),
            Scheme::Warm => hue_rotation::generate(&hue_rotation::WARM, entropy),
            Scheme::Cool => hue_rotation::generate(&hue_rotation::COOL, entropy),
            Scheme::Nature => hue_rotation::generate(&hue_rotation::NATURE, entropy),
            Scheme::Cyberpunk => hue_rotation::generate(&hue_rotation::CYBERPUNK, entropy),
            Scheme::Dracula => base_palette::generate(&base_palette::DRACULA, entropy),
            Scheme::Nord => base_palette::generate(&base_palette::NORD, entropy),
            Scheme::Solarized => base_palette::generate(&base_palette::SOLARIZED, entropy),
            Scheme::Gruvbox => base_palette::generate(&base_palette::GRUVBOX, entropy),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "monochrome" {
            return Ok(Scheme::Mono);
        }
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownScheme(s.to_string()))
    }
}
