// ABOUTME: Shadow token values, either literal box-shadow layers or ordered composites
// ABOUTME: Composites such as "focus-ring + shadow-xs" expand one level into their layers

use std::fmt;

const SHADOW_PREFIX: &str = "--shadow-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadowValue {
    /// A literal CSS box-shadow expression.
    Layers(String),
    /// Other shadow tokens stacked in order, by full token id.
    Composite(Vec<String>),
}

impl ShadowValue {
    /// Read an authored shadow value.
    ///
    /// A value is a composite when it has at least two `+`-separated parts and
    /// every part is a bare token name. Anything else is a literal expression.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('+').map(str::trim).collect();
        let composite = parts.len() > 1 && parts.iter().all(|part| is_token_name(part));
        if composite {
            Self::Composite(parts.into_iter().map(shadow_token_id).collect())
        } else {
            Self::Layers(raw.trim().to_string())
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }
}

impl fmt::Display for ShadowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layers(expression) => f.write_str(expression),
            Self::Composite(parts) => f.write_str(&parts.join(" + ")),
        }
    }
}

fn is_token_name(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && part.chars().any(|c| c.is_ascii_lowercase())
}

/// `focus-ring`, `shadow-xs` and `--shadow-xs` all name `--shadow-…` tokens.
pub fn shadow_token_id(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else if let Some(rest) = name.strip_prefix("shadow-") {
        format!("{SHADOW_PREFIX}{rest}")
    } else {
        format!("{SHADOW_PREFIX}{name}")
    }
}
