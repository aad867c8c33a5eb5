// ABOUTME: Typed color literal shared by the token registry and the luminance classifier
// ABOUTME: Parses `#RRGGBB` and `rgba(r,g,b,a)` and decides whether a color reads as light

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Luma (0-255) above which a color counts as light.
///
/// Sits above the 50% midpoint so medium grays such as neutral-500 classify as dark.
pub const LIGHT_LUMA_THRESHOLD: f32 = 160.0;

/// Backing color alpha-blended literals are composited over before judging them.
const BACKDROP: f32 = 255.0;

/// A literal color value as authored in the token catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorLiteral {
    /// `#RRGGBB`
    Opaque { r: u8, g: u8, b: u8 },
    /// `rgba(r,g,b,a)`, channels in 0-255 and alpha in 0-1. Not clamped.
    AlphaBlended { r: f32, g: f32, b: f32, a: f32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("unsupported color form '{0}', expected #RRGGBB or rgba(r,g,b,a)")]
    UnsupportedForm(String),

    #[error("invalid hex color '{0}', expected exactly six hex digits")]
    InvalidHex(String),

    #[error("rgba() takes four components, found {found}")]
    ComponentCount { found: usize },

    #[error("invalid rgba() component '{0}'")]
    InvalidComponent(String),
}

impl ColorLiteral {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::Opaque { r, g, b }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::AlphaBlended { r, g, b, a }
    }

    /// Alpha weight; opaque colors report 1.0.
    pub fn alpha(&self) -> f32 {
        match *self {
            Self::Opaque { .. } => 1.0,
            Self::AlphaBlended { a, .. } => a,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque { .. })
    }

    /// Channels as they appear once composited over an opaque white page.
    pub fn blend_over_white(&self) -> [f32; 3] {
        match *self {
            Self::Opaque { r, g, b } => [f32::from(r), f32::from(g), f32::from(b)],
            Self::AlphaBlended { r, g, b, a } => {
                let blend = |c: f32| c * a + BACKDROP * (1.0 - a);
                [blend(r), blend(g), blend(b)]
            }
        }
    }

    /// Broadcast luma (0.299 R + 0.587 G + 0.114 B) of the composited color.
    pub fn luma(&self) -> f32 {
        let [r, g, b] = self.blend_over_white();
        0.299 * r + 0.587 * g + 0.114 * b
    }

    pub fn is_light(&self) -> bool {
        self.luma() > LIGHT_LUMA_THRESHOLD
    }

    fn parse_hex(digits: &str, source: &str) -> Result<Self, ColorParseError> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(source.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(source.to_string()))
        };

        Ok(Self::Opaque {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    fn parse_rgba(body: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ColorParseError::ComponentCount { found: parts.len() });
        }

        let mut values = [0.0f32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = parse_component(part)?;
        }

        let [r, g, b, a] = values;
        Ok(Self::AlphaBlended { r, g, b, a })
    }
}

/// Components are plain unsigned decimals; signs, exponents and percentages are rejected.
fn parse_component(part: &str) -> Result<f32, ColorParseError> {
    let well_formed = !part.is_empty()
        && part.chars().all(|c| c.is_ascii_digit() || c == '.')
        && part.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(ColorParseError::InvalidComponent(part.to_string()));
    }
    part.parse::<f32>()
        .map_err(|_| ColorParseError::InvalidComponent(part.to_string()))
}

impl FromStr for ColorLiteral {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = value.strip_prefix('#') {
            return Self::parse_hex(digits, value);
        }

        let lower = value.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgba(body);
        }

        Err(ColorParseError::UnsupportedForm(value.to_string()))
    }
}

impl fmt::Display for ColorLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Opaque { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Self::AlphaBlended { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

impl Serialize for ColorLiteral {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorLiteral {
    fn deserialize<D>(deserializer: D) -> Result<ColorLiteral, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Classify a raw color string as light.
///
/// Never fails: anything that does not parse counts as light, since a light
/// swatch gets the more common dark border treatment.
pub fn is_light(value: &str) -> bool {
    value
        .parse::<ColorLiteral>()
        .map(|color| color.is_light())
        .unwrap_or(true)
}

/// How a preview should frame a swatch of a given color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchTreatment {
    /// Light fill that would vanish into the page without an outline.
    Outlined,
    /// Dark fill that stands on its own.
    Solid,
}

impl SwatchTreatment {
    pub fn for_color(color: &ColorLiteral) -> Self {
        if color.is_light() {
            Self::Outlined
        } else {
            Self::Solid
        }
    }

    pub fn for_value(value: &str) -> Self {
        if is_light(value) {
            Self::Outlined
        } else {
            Self::Solid
        }
    }
}
