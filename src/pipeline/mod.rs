pub mod base_palette;
pub mod contrast;
pub mod entropy;
pub mod hue_rotation;
pub mod mapping;
pub mod names;
pub mod scheme;
pub mod variant;

use tracing::debug;

use crate::cli::ThemeMode;
use crate::error::Result;
use entropy::{Entropy, SystemEntropy};
use mapping::ColorMapping;
use scheme::Scheme;

/// Generate a mapping for a scheme name with fresh system entropy.
pub fn generate_color_scheme(scheme: &str) -> Result<ColorMapping> {
    let scheme: Scheme = scheme.parse()?;
    Ok(generate(scheme, None, &mut SystemEntropy::new()))
}

/// Generate, then apply the dark or light variant. Dark wins if both are set.
pub fn generate_color_scheme_with_variant(
    scheme: &str,
    dark: bool,
    light: bool,
) -> Result<ColorMapping> {
    let scheme: Scheme = scheme.parse()?;
    let colors = generate(scheme, None, &mut SystemEntropy::new());
    Ok(variant::apply_variant_flags(colors, dark, light))
}

/// Generate with an injected entropy source and optional variant.
pub fn generate(
    scheme: Scheme,
    mode: Option<ThemeMode>,
    entropy: &mut dyn Entropy,
) -> ColorMapping {
    debug!(%scheme, ?mode, "generating color scheme");
    let colors = scheme.generate(entropy);
    variant::apply_variant(colors, mode)
}
