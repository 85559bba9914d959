use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::color::Color;
use crate::pipeline::mapping::{ColorMapping, Role};

const SLOT_NAMES: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Print the palette as two rows of 8 truecolor swatches with hex labels,
/// under a title line drawn in the theme's own background and foreground.
pub fn render_preview<W: Write>(out: &mut W, title: &str, colors: &ColorMapping) -> io::Result<()> {
    if let (Some(bg), Some(fg)) = (colors.get(Role::Background), colors.get(Role::Foreground)) {
        queue!(
            out,
            Print("  "),
            SetBackgroundColor(to_term(bg)),
            SetForegroundColor(to_term(fg)),
            SetAttribute(Attribute::Bold),
            Print(format!(" {title} ")),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n\n"),
        )?;
    } else {
        queue!(out, Print(format!("  {title}\n\n")))?;
    }

    for (label, roles) in [("Normal", Role::NORMAL), ("Bright", Role::BRIGHT)] {
        queue!(out, Print(format!("  {label}\n")))?;
        swatch_row(out, colors, &roles)?;
        hex_row(out, colors, &roles)?;
        queue!(out, Print("\n"))?;
    }

    out.flush()
}

/// Each swatch is 9 chars wide with the slot name centered on the color.
fn swatch_row<W: Write>(out: &mut W, colors: &ColorMapping, roles: &[Role; 8]) -> io::Result<()> {
    queue!(out, Print("  "))?;
    for (i, role) in roles.iter().enumerate() {
        match colors.get(*role) {
            Some(c) => queue!(
                out,
                SetBackgroundColor(to_term(c)),
                SetForegroundColor(contrast_fg(c)),
                Print(format!("{:^9}", SLOT_NAMES[i])),
                ResetColor,
                Print(" "),
            )?,
            None => queue!(out, Print(format!("{:^9} ", "?")))?,
        }
    }
    queue!(out, Print("\n"))
}

fn hex_row<W: Write>(out: &mut W, colors: &ColorMapping, roles: &[Role; 8]) -> io::Result<()> {
    queue!(out, Print("  "))?;
    for role in roles {
        let hex = colors.hex(*role).unwrap_or_else(|| "-".to_string());
        queue!(
            out,
            SetForegroundColor(TermColor::DarkGrey),
            Print(format!("{hex:^9} ")),
            ResetColor,
        )?;
    }
    queue!(out, Print("\n"))
}
