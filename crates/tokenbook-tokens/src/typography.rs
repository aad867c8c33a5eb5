// ABOUTME: Typography scale tokens grouped into Label, Copy, and Heading choreographies
// ABOUTME: Each utility names a role and a pixel size, with optional uppercase variants

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three type choreographies of the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyRole {
    /// Single-line UI text, tight leading
    Label,
    /// Multi-line body text, looser leading
    Copy,
    /// Titles, negative tracking
    Heading,
}

impl TypographyRole {
    pub const ALL: [TypographyRole; 3] = [Self::Label, Self::Copy, Self::Heading];

    pub fn description(self) -> &'static str {
        match self {
            Self::Label => "single-line UI text",
            Self::Copy => "multi-line, looser leading",
            Self::Heading => "titles with negative tracking",
        }
    }
}

impl fmt::Display for TypographyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Label => "Label",
            Self::Copy => "Copy",
            Self::Heading => "Heading",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyToken {
    pub utility: String,
    pub role: TypographyRole,
    pub size_px: u32,
    pub uppercase: bool,
}

impl TypographyToken {
    /// Utility name for a role and size, e.g. `text-label-12-caps`.
    pub fn utility_name(role: TypographyRole, size_px: u32, uppercase: bool) -> String {
        let role = match role {
            TypographyRole::Label => "label",
            TypographyRole::Copy => "copy",
            TypographyRole::Heading => "heading",
        };
        if uppercase {
            format!("text-{role}-{size_px}-caps")
        } else {
            format!("text-{role}-{size_px}")
        }
    }
}
