//! Chart styling primitives: colors and text anchoring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Named colors accepted in configuration, matching the CSS/X11 names.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("blue", (0, 0, 255)),
    ("brown", (165, 42, 42)),
    ("coral", (255, 127, 80)),
    ("crimson", (220, 20, 60)),
    ("darkcyan", (0, 139, 139)),
    ("darkgreen", (0, 100, 0)),
    ("darkorange", (255, 140, 0)),
    ("darkred", (139, 0, 0)),
    ("firebrick", (178, 34, 34)),
    ("forestgreen", (34, 139, 34)),
    ("gold", (255, 215, 0)),
    ("gray", (128, 128, 128)),
    ("green", (0, 128, 0)),
    ("grey", (128, 128, 128)),
    ("mediumpurple", (147, 112, 219)),
    ("navy", (0, 0, 128)),
    ("olive", (128, 128, 0)),
    ("orange", (255, 165, 0)),
    ("orchid", (218, 112, 214)),
    ("pink", (255, 192, 203)),
    ("purple", (128, 0, 128)),
    ("rebeccapurple", (102, 51, 153)),
    ("red", (255, 0, 0)),
    ("royalblue", (65, 105, 225)),
    ("saddlebrown", (139, 69, 19)),
    ("slategray", (112, 128, 144)),
    ("steelblue", (70, 130, 180)),
    ("teal", (0, 128, 128)),
    ("tomato", (255, 99, 71)),
    ("white", (255, 255, 255)),
];

/// An RGB color, remembering the name it was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct ChartColor {
    pub rgb: (u8, u8, u8),
    name: Option<&'static str>,
}

impl ChartColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: (r, g, b),
            name: None,
        }
    }

    /// Look up a named color.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|&(n, rgb)| Self { rgb, name: Some(n) })
    }

    #[must_use]
    pub fn gray() -> Self {
        Self::named("gray").unwrap_or(Self::rgb(128, 128, 128))
    }

    #[must_use]
    pub fn white() -> Self {
        Self::named("white").unwrap_or(Self::rgb(255, 255, 255))
    }

    /// Hex form, e.g. `#4682b4`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for ChartColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(color) = Self::named(s) {
            return Ok(color);
        }
        let hex = s
            .trim()
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| format!("Unknown color '{s}'"))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid hex color '{s}'"))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl<'de> Deserialize<'de> for ChartColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl From<ChartColor> for String {
    fn from(color: ChartColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

/// Horizontal text anchor for annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
