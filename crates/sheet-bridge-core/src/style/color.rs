//! Color representation

use std::fmt;

/// Color representation
///
/// Readers report font colors either as an explicit ARGB value or as a
/// reference (theme slot, legacy palette index, automatic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with optional tint
    Theme {
        /// Theme color index (0-9)
        index: u8,
        /// Tint value (-1.0 to 1.0, stored as i8 percentage)
        tint: i8,
    },

    /// Indexed color (legacy Excel palette)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "80FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Parse an ARGB hex string, assuming an opaque alpha when only RGB is given
    pub fn from_argb_hex(hex: &str) -> Option<Self> {
        match Self::from_hex(hex)? {
            Color::Rgb { r, g, b } => Some(Color::Argb { a: 0xFF, r, g, b }),
            other => Some(other),
        }
    }

    /// RGB components of an explicit color
    ///
    /// Theme, indexed and automatic colors have no explicit value and return
    /// `None`.
    pub fn explicit_rgb(&self) -> Option<(u8, u8, u8)> {
        match *self {
            Color::Rgb { r, g, b } | Color::Argb { r, g, b, .. } => Some((r, g, b)),
            _ => None,
        }
    }

    /// Format an explicit color as 8-character ARGB hex (e.g. "FFFF0000")
    pub fn to_argb_hex(&self) -> Option<String> {
        match *self {
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
            Color::Argb { a, r, g, b } => Some(format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b)),
            _ => None,
        }
    }

    /// Format an explicit color as CSS-style "#RRGGBB", dropping alpha
    pub fn to_css_hex(&self) -> Option<String> {
        self.explicit_rgb()
            .map(|(r, g, b)| format!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {}%)", index, tint),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}
