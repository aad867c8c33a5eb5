// ABOUTME: The built-in design-system catalog: palette, semantic aliases, radii, shadows, type
// ABOUTME: Assembled as a plain TokenSource so it goes through the same checks as loaded catalogs

mod primitives;
mod semantic;

use crate::source::{RadiusDef, ShadowDef, TokenSource, TypographyDef};
use crate::typography::{TypographyRole, TypographyToken};

const RADII: &[(&str, u32)] = &[
    ("none", 0),
    ("xxs", 2),
    ("xs", 4),
    ("sm", 6),
    ("md", 8),
    ("lg", 12),
    ("xl", 16),
    ("2xl", 20),
    ("3xl", 24),
    ("full", 9999),
];

const SHADOWS: &[(&str, &str)] = &[
    ("--shadow-xs", "0px 1px 2px 0px rgba(10,13,18,0.05)"),
    (
        "--shadow-xs-skeuomorphic",
        "0px 1px 2px rgba(10,13,18,0.05), inset 0 -2px 0 rgba(10,13,18,0.05), inset 0 0 0 1px rgba(10,13,18,0.18)",
    ),
    (
        "--shadow-focus-ring",
        "0 0 0 2px var(--bg-primary), 0 0 0 4px var(--focus-ring)",
    ),
    ("--shadow-focus-ring-xs", "focus-ring + shadow-xs"),
    (
        "--shadow-focus-ring-xs-skeuomorphic",
        "focus-ring + shadow-xs-skeuomorphic",
    ),
];

const LABEL_SIZES: &[u32] = &[12, 13, 14, 16, 18, 20];
const COPY_SIZES: &[u32] = &[12, 13, 14, 16, 18, 20];
const HEADING_SIZES: &[u32] = &[14, 16, 20, 24, 32, 40, 48, 56, 64, 72];

/// The design system this tool ships with.
pub fn builtin() -> TokenSource {
    TokenSource {
        primitives: primitives::groups(),
        semantics: semantic::groups(),
        radii: radii(),
        shadows: shadows(),
        typography: typography(),
    }
}

fn radii() -> Vec<RadiusDef> {
    RADII
        .iter()
        .map(|(label, px)| RadiusDef {
            label: label.to_string(),
            token: format!("--radius-{label}"),
            value: format!("{px}px"),
        })
        .collect()
}

fn shadows() -> Vec<ShadowDef> {
    SHADOWS
        .iter()
        .map(|(token, value)| ShadowDef {
            token: token.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn typography() -> Vec<TypographyDef> {
    let entry = |role, size_px, uppercase| TypographyDef {
        utility: TypographyToken::utility_name(role, size_px, uppercase),
        role,
        size_px,
        uppercase,
    };

    let mut scale = Vec::new();
    for &size in LABEL_SIZES {
        scale.push(entry(TypographyRole::Label, size, false));
        // Only the smallest label has an all-caps variant.
        if size == 12 {
            scale.push(entry(TypographyRole::Label, size, true));
        }
    }
    scale.extend(COPY_SIZES.iter().map(|&size| entry(TypographyRole::Copy, size, false)));
    scale.extend(
        HEADING_SIZES
            .iter()
            .map(|&size| entry(TypographyRole::Heading, size, false)),
    );
    scale
}
