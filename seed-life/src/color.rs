use serde::{Serialize, Serializer};
use std::fmt;

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb`. Palettes are `const`, so a bad literal is a
    /// compile error rather than a runtime one.
    pub const fn hex(text: &str) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes[0] == b'#', "color must start with '#'");
        match bytes.len() {
            4 => Self::rgb(
                hex_digit(bytes[1]) * 0x11,
                hex_digit(bytes[2]) * 0x11,
                hex_digit(bytes[3]) * 0x11,
            ),
            7 => Self::rgb(
                hex_digit(bytes[1]) * 0x10 + hex_digit(bytes[2]),
                hex_digit(bytes[3]) * 0x10 + hex_digit(bytes[4]),
                hex_digit(bytes[5]) * 0x10 + hex_digit(bytes[6]),
            ),
            _ => panic!("color must be #rgb or #rrggbb"),
        }
    }

    pub fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }

    pub fn with_alpha(&self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

const fn hex_digit(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
