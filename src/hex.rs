//! Hex notation and 8-bit channels.

use std::fmt;

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
};

fn to_byte(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn nibble(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

impl Color {
    /// Create a color from `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`. The
    /// leading `#` is optional and digits are case insensitive.
    /// ```rust
    /// use huekit::Color;
    /// assert_eq!(Color::from_hex("#abc").unwrap().to_hex(), "#AABBCC");
    /// assert!(Color::from_hex("#abcde").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

        let nibbles = digits
            .iter()
            .map(|d| nibble(*d))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::MalformedHex(hex.to_string()))?;

        let bytes: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n << 4 | n).collect(),
            6 | 8 => nibbles.chunks(2).map(|p| p[0] << 4 | p[1]).collect(),
            _ => return Err(Error::MalformedHex(hex.to_string())),
        };

        let channel = |i: usize| bytes[i] as Component / 255.0;
        let alpha = bytes.get(3).map(|a| *a as Component / 255.0);

        Ok(Color::new(
            Space::Srgb,
            channel(0),
            channel(1),
            channel(2),
            alpha,
        ))
    }

    /// The red, green and blue channels as bytes after mapping the color into
    /// the sRGB gamut.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let srgb = self.to_srgb_in_gamut();
        let c = srgb.components();
        [to_byte(c.0), to_byte(c.1), to_byte(c.2)]
    }

    /// The alpha channel as a byte, if the color has one.
    pub fn alpha8(&self) -> Option<u8> {
        self.alpha().map(to_byte)
    }

    /// Render as `#RRGGBB` with uppercase digits, or `#RRGGBBAA` when the
    /// color carries an alpha.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        match self.alpha8() {
            Some(a) => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
            None => format!("#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
