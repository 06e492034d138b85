use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn from_hex(text: &str) -> ChartResult<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let channel = |index: usize| -> ChartResult<f64> {
            digits
                .get(index * 2..index * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|byte| f64::from(byte) / 255.0)
                .ok_or_else(|| ChartError::InvalidData(format!("invalid hex color `{text}`")))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, channel(3)?)),
            _ => Err(ChartError::InvalidData(format!(
                "invalid hex color `{text}`"
            ))),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue),
                byte(self.alpha)
            )
        }
    }

    /// Scales the RGB channels toward black; `amount` of 1 means 30% darker.
    #[must_use]
    pub fn darker(self, amount: f64) -> Self {
        let factor = 0.7f64.powf(amount);
        Self::rgba(
            (self.red * factor).clamp(0.0, 1.0),
            (self.green * factor).clamp(0.0, 1.0),
            (self.blue * factor).clamp(0.0, 1.0),
            self.alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}

/// Color derived from the owning series' color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InheritedColor {
    #[default]
    FromSerie,
    Fixed(Color),
    Darker(f64),
}

impl InheritedColor {
    #[must_use]
    pub fn resolve(self, serie_color: Color) -> Color {
        match self {
            Self::FromSerie => serie_color,
            Self::Fixed(color) => color,
            Self::Darker(amount) => serie_color.darker(amount),
        }
    }
}

/// Ordinal palette assigning colors to series by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScheme(pub Vec<Color>);

impl ColorScheme {
    /// The six-color default palette.
    #[must_use]
    pub fn nivo() -> Self {
        Self(vec![
            Color::rgb8(0xe8, 0xc1, 0xa0),
            Color::rgb8(0xf4, 0x75, 0x60),
            Color::rgb8(0xf1, 0xe1, 0x5b),
            Color::rgb8(0xe8, 0xa8, 0x38),
            Color::rgb8(0x61, 0xcd, 0xbb),
            Color::rgb8(0x97, 0xe3, 0xd5),
        ])
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        if self.0.is_empty() {
            return Color::BLACK;
        }
        self.0[index % self.0.len()]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::nivo()
    }
}
