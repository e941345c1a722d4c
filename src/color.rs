use derive_more::{Deref, From, Into};
use palette::{Srgb, Srgba, WithAlpha};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque color token carried by items and regions.
///
/// Parses from and formats to `#rrggbb` / `#rrggbbaa` hex.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

/// Fallback used wherever neither a background nor a hole color is set.
pub const DEFAULT_BACKGROUND: Color = Color(Srgba::new(1.0, 1.0, 1.0, 1.0));

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn into_components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim().trim_start_matches('#');

        let (rgb, alpha) = match hex.len() {
            3 | 6 => (hex, u8::MAX),
            8 => {
                let alpha = u8::from_str_radix(&hex[6..], 16).map_err(|_| invalid())?;
                (&hex[..6], alpha)
            }
            _ => return Err(invalid()),
        };

        let rgb = Srgb::<u8>::from_str(rgb).map_err(|_| invalid())?;
        let rgba: Srgba<u8> = rgb.with_alpha(alpha);
        Ok(Self(rgba.into_format()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: Srgba<u8> = self.0.into_format();
        write!(f, "#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)?;
        if c.alpha != u8::MAX {
            write!(f, "{:02x}", c.alpha)?;
        }
        Ok(())
    }
}
