use std::collections::BTreeMap;
use std::fmt;

use crate::color::{Color, Hsl};

/// Semantic color role in a terminal theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Background,
    Foreground,
    SelectionBackground,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Role {
    /// Every role a complete theme defines.
    pub const ALL: [Role; 19] = [
        Role::Background,
        Role::Foreground,
        Role::SelectionBackground,
        Role::Black,
        Role::Red,
        Role::Green,
        Role::Yellow,
        Role::Blue,
        Role::Magenta,
        Role::Cyan,
        Role::White,
        Role::BrightBlack,
        Role::BrightRed,
        Role::BrightGreen,
        Role::BrightYellow,
        Role::BrightBlue,
        Role::BrightMagenta,
        Role::BrightCyan,
        Role::BrightWhite,
    ];

    /// The eight normal ANSI roles, in slot order.
    pub const NORMAL: [Role; 8] = [
        Role::Black,
        Role::Red,
        Role::Green,
        Role::Yellow,
        Role::Blue,
        Role::Magenta,
        Role::Cyan,
        Role::White,
    ];

    /// The eight bright ANSI roles, in slot order.
    pub const BRIGHT: [Role; 8] = [
        Role::BrightBlack,
        Role::BrightRed,
        Role::BrightGreen,
        Role::BrightYellow,
        Role::BrightBlue,
        Role::BrightMagenta,
        Role::BrightCyan,
        Role::BrightWhite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::Foreground => "foreground",
            Role::SelectionBackground => "selection_background",
            Role::Black => "black",
            Role::Red => "red",
            Role::Green => "green",
            Role::Yellow => "yellow",
            Role::Blue => "blue",
            Role::Magenta => "magenta",
            Role::Cyan => "cyan",
            Role::White => "white",
            Role::BrightBlack => "bright_black",
            Role::BrightRed => "bright_red",
            Role::BrightGreen => "bright_green",
            Role::BrightYellow => "bright_yellow",
            Role::BrightBlue => "bright_blue",
            Role::BrightMagenta => "bright_magenta",
            Role::BrightCyan => "bright_cyan",
            Role::BrightWhite => "bright_white",
        }
    }

    /// The bright counterpart of a normal ANSI role.
    pub fn bright(self) -> Option<Role> {
        Role::NORMAL
            .iter()
            .position(|&r| r == self)
            .map(|i| Role::BRIGHT[i])
    }

    /// Name without the `bright_` prefix, as used inside `[colors.bright]`.
    pub fn ansi_name(self) -> &'static str {
        let name = self.as_str();
        name.strip_prefix("bright_").unwrap_or(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-to-color mapping produced by one scheme generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMapping {
    colors: BTreeMap<Role, Color>,
}

impl ColorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role, color: Color) {
        self.colors.insert(role, color);
    }

    pub fn insert_hsl(&mut self, role: Role, hsl: Hsl) {
        self.insert(role, hsl.to_color());
    }

    pub fn get(&self, role: Role) -> Option<Color> {
        self.colors.get(&role).copied()
    }

    /// The `#rrggbb` value of a role, if present.
    pub fn hex(&self, role: Role) -> Option<String> {
        self.get(role).map(Color::to_hex)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The first role without a value, in [`Role::ALL`] order.
    pub fn missing(&self) -> Option<Role> {
        Role::ALL.into_iter().find(|r| !self.colors.contains_key(r))
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        self.colors.iter().map(|(&r, &c)| (r, c))
    }

    /// Role name to hex string, the shape theme files consume.
    pub fn to_hex_map(&self) -> BTreeMap<&'static str, String> {
        self.iter().map(|(r, c)| (r.as_str(), c.to_hex())).collect()
    }
}

impl FromIterator<(Role, Color)> for ColorMapping {
    fn from_iter<I: IntoIterator<Item = (Role, Color)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
