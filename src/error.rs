use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::mapping::Role;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown color scheme: {0}")]
    UnknownScheme(String),

    #[error("invalid hex color format: {0}")]
    InvalidHexFormat(String),

    #[error("color mapping has no value for `{0}`")]
    MissingRole(Role),

    #[error("failed to write theme to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scheme_message_names_the_scheme() {
        let err = ThemeError::UnknownScheme("not-a-scheme".to_string());
        assert_eq!(err.to_string(), "unknown color scheme: not-a-scheme");
    }

    #[test]
    fn missing_role_uses_role_name() {
        let err = ThemeError::MissingRole(Role::BrightCyan);
        assert_eq!(err.to_string(), "color mapping has no value for `bright_cyan`");
    }
}
