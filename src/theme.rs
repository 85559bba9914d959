use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{Result, ThemeError};
use crate::pipeline::mapping::{ColorMapping, Role};
use crate::pipeline::scheme::Scheme;

/// A serializable Alacritty color theme.
#[derive(Debug, Clone)]
pub struct AlacrittyTheme {
    pub name: String,
    pub scheme: Scheme,
    pub generated_at: NaiveDateTime,
    pub colors: ColorMapping,
}

impl AlacrittyTheme {
    /// Create a theme stamped with the current local time.
    pub fn new(name: impl Into<String>, scheme: Scheme, colors: ColorMapping) -> Self {
        Self {
            name: name.into(),
            scheme,
            generated_at: Local::now().naive_local(),
            colors,
        }
    }

    /// Serialize to Alacritty's TOML color sections.
    ///
    /// Cursor and selection sections reuse the primary colors, so a mapping
    /// missing any role is rejected.
    pub fn serialize(&self) -> Result<String> {
        let hex = |role: Role| self.colors.hex(role).ok_or(ThemeError::MissingRole(role));

        let mut out = String::new();
        out.push_str(&format!("# {}\n", self.name));
        out.push_str(&format!("# Generated theme: {}\n", self.name));
        out.push_str(&format!("# Scheme: {}\n", self.scheme));
        out.push_str(&format!(
            "# Generated at: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        out.push_str("\n[colors.primary]\n");
        out.push_str(&format!("background = \"{}\"\n", hex(Role::Background)?));
        out.push_str(&format!("foreground = \"{}\"\n", hex(Role::Foreground)?));

        out.push_str("\n[colors.cursor]\n");
        out.push_str(&format!("text = \"{}\"\n", hex(Role::Background)?));
        out.push_str(&format!("cursor = \"{}\"\n", hex(Role::Foreground)?));

        out.push_str("\n[colors.selection]\n");
        out.push_str(&format!("text = \"{}\"\n", hex(Role::Foreground)?));
        out.push_str(&format!(
            "background = \"{}\"\n",
            hex(Role::SelectionBackground)?
        ));

        for (section, roles) in [("normal", Role::NORMAL), ("bright", Role::BRIGHT)] {
            out.push_str(&format!("\n[colors.{section}]\n"));
            for role in roles {
                out.push_str(&format!("{} = \"{}\"\n", role.ansi_name(), hex(role)?));
            }
        }

        Ok(out)
    }

    /// Install the theme as `<dir>/<name>.toml`, defaulting to [`themes_dir`].
    pub fn install(&self, dir: Option<&Path>) -> Result<PathBuf> {
        let dir = dir.map_or_else(themes_dir, Path::to_path_buf);
        std::fs::create_dir_all(&dir).map_err(|e| ThemeError::io(&dir, e))?;

        let path = dir.join(format!("{}.toml", self.name));
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write the theme to an arbitrary path.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.serialize()?;
        std::fs::write(path, content).map_err(|e| ThemeError::io(path, e))?;
        info!(theme = %self.name, path = %path.display(), "theme written");
        Ok(())
    }
}

/// Resolve the Alacritty themes directory.
pub fn themes_dir() -> PathBuf {
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
            PathBuf::from(home).join(".config")
        });
    config_home.join("alacritty").join("themes")
}
