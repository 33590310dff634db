//! Theme handling.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Colors and styles derived from the configured accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color used for highlights and active borders.
    pub accent: Color,
    /// Style for the active field border and selection highlight.
    pub active_style: Style,
    /// Style for de-emphasized hints.
    pub dimmed_style: Style,
    /// Style for measurement and result values.
    pub value_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    /// Builds a theme from an accent color name or hex code.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from a concrete accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            active_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            value_style: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Cyan,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&format!("{}{}", &s[0..1], &s[0..1]), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&format!("{}{}", &s[1..2], &s[1..2]), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&format!("{}{}", &s[2..3], &s[2..3]), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}
