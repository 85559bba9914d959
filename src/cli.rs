use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::pipeline::scheme::Scheme;

/// Generate Alacritty terminal color themes from parametric color schemes.
#[derive(Parser, Debug)]
#[command(name = "alacritty-themer", version, about)]
pub struct Args {
    /// Color scheme (random, pastel, neon, mono, warm, cool, nature,
    /// cyberpunk, dracula, nord, solarized, gruvbox)
    #[arg(short, long, default_value = "random")]
    pub scheme: Scheme,

    /// Derive a darker variant
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Derive a lighter variant
    #[arg(long)]
    pub light: bool,

    /// Theme name (a random one is generated if omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write theme to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Install theme into the Alacritty themes directory
    #[arg(long, conflicts_with = "output")]
    pub install: bool,

    /// Themes directory used by --install
    #[arg(long, env = "ALACRITTY_THEMES_DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,

    /// Raise foreground contrast against the background to this ratio
    #[arg(long)]
    pub min_contrast: Option<f64>,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// List available schemes and exit
    #[arg(long)]
    pub list_schemes: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn mode(&self) -> Option<ThemeMode> {
        ThemeMode::from_flags(self.dark, self.light)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Dark takes precedence when both flags are set.
    pub fn from_flags(dark: bool, light: bool) -> Option<Self> {
        match (dark, light) {
            (true, _) => Some(ThemeMode::Dark),
            (false, true) => Some(ThemeMode::Light),
            (false, false) => None,
        }
    }

    /// Suffix appended to generated theme names.
    pub fn suffix(self) -> &'static str {
        match self {
            ThemeMode::Dark => "_dark",
            ThemeMode::Light => "_light",
        }
    }
}
