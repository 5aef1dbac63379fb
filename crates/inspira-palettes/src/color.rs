use std::fmt::{Display, Formatter};

use crate::error::ColorError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` or `rrggbb`, either case.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let hex = input.trim().strip_prefix('#').unwrap_or(input.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidHex(input.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGB complement of `hex`, formatted as lowercase `#rrggbb`.
pub fn complementary(hex: &str) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(hex)?.inverted().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complements_primary_extremes() {
        assert_eq!(complementary("#000000").unwrap(), "#ffffff");
        assert_eq!(complementary("#ffffff").unwrap(), "#000000");
        assert_eq!(complementary("#ff0000").unwrap(), "#00ffff");
    }

    #[test]
    fn accepts_missing_hash_and_uppercase() {
        assert_eq!(complementary("8B4513").unwrap(), "#74baec");
        assert_eq!(complementary("#8B4513").unwrap(), "#74baec");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "#fff", "#gg0000", "#12345678", "#ééé", "#+f+f+f", "+fffff"] {
            assert!(
                matches!(complementary(input), Err(ColorError::InvalidHex(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_parsed_value() {
        let rgb = Rgb::from_hex("#1E90FF").unwrap();
        assert_eq!(rgb, Rgb { r: 0x1e, g: 0x90, b: 0xff });
        assert_eq!(rgb.to_string(), "#1e90ff");
    }
}
