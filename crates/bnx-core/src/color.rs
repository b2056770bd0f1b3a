//! Display colours for charts and document styling.
//!
//! Colours are written as `#rrggbb` when opaque and `rgba(r, g, b, a)` when
//! translucent, and parse back from either form.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// An sRGB colour with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Build an opaque colour from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Composite onto a white background, yielding an opaque colour.
    #[must_use]
    pub fn over_white(self) -> Self {
        if self.is_opaque() {
            return self;
        }
        let alpha = self.alpha.clamp(0.0, 1.0);
        let blend = |channel: u8| -> u8 {
            let value = f32::from(channel).mul_add(alpha, 255.0 * (1.0 - alpha));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = value.round().clamp(0.0, 255.0) as u8;
            rounded
        };
        Self::rgb(blend(self.r), blend(self.g), blend(self.b))
    }

    /// Channels as `0.0..=1.0` floats, alpha ignored.
    #[must_use]
    pub fn unit_rgb(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid(raw));
        }
        if let Some(body) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body).ok_or_else(|| invalid(raw));
        }
        Err(invalid(raw))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Color::hex)
}

fn parse_functional(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let r = parts[0].parse().ok()?;
    let g = parts[1].parse().ok()?;
    let b = parts[2].parse().ok()?;
    let alpha = match parts.get(3) {
        Some(raw) => raw.parse::<f32>().ok().filter(|a| (0.0..=1.0).contains(a))?,
        None => 1.0,
    };
    Some(Color::rgb(r, g, b).with_alpha(alpha))
}

fn invalid(raw: &str) -> CoreError {
    CoreError::Validation(format!("invalid colour '{raw}'"))
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        String::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_splits_channels() {
        let color = Color::hex(0x2563EB);
        assert_eq!((color.r, color.g, color.b), (0x25, 0x63, 0xEB));
        assert!(color.is_opaque());
    }

    #[test]
    fn parses_hex_and_rgba_forms() {
        assert_eq!("#2563EB".parse::<Color>().unwrap(), Color::hex(0x2563EB));
        let translucent: Color = "rgba(5, 150, 105, 0.1)".parse().unwrap();
        assert_eq!(translucent, Color::hex(0x059669).with_alpha(0.1));
    }

    #[test]
    fn display_matches_input_forms() {
        assert_eq!(Color::hex(0x0D9488).to_string(), "#0d9488");
        assert_eq!(
            Color::rgb(220, 38, 38).with_alpha(0.1).to_string(),
            "rgba(220, 38, 38, 0.1)"
        );
    }

    #[test]
    fn rejects_malformed_colours() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("rgba(1, 2)".parse::<Color>().is_err());
        assert!("rgba(1, 2, 3, 4)".parse::<Color>().is_err());
        assert!("blue".parse::<Color>().is_err());
    }

    #[test]
    fn translucent_colour_blends_towards_white() {
        let blended = Color::rgb(0, 0, 0).with_alpha(0.5).over_white();
        assert_eq!((blended.r, blended.g, blended.b), (128, 128, 128));
        assert!(blended.is_opaque());
    }
}
