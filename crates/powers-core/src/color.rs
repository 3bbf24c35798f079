use crate::error::CoreError;
use std::fmt;

/// 8-bit RGB color as used in CSS hex notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` or the same without the leading `#`.
    pub fn parse_hex(input: &str) -> Result<Self, CoreError> {
        let bad = || CoreError::InvalidColor(input.to_string());
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let full = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(bad()),
        };
        let channel = |i: usize| u8::from_str_radix(&full[i..i + 2], 16).map_err(|_| bad());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Per-channel `255 - value`.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Invert a CSS hex color, normalizing shorthand to six digits.
pub fn invert_hex(hex: &str) -> Result<String, CoreError> {
    Rgb::parse_hex(hex).map(|c| c.inverted().to_hex())
}
