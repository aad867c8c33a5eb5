// ABOUTME: Built-in semantic aliases mapping intent (background, text, border...) to primitives
// ABOUTME: Recorded values are snapshots checked against the palette when the registry builds

use crate::source::{SemanticDef, SemanticGroupDef};

type Aliases = [(&'static str, &'static str, &'static str)];

const BACKGROUND: &Aliases = &[
    ("--bg-brand-solid", "--color-brand-600", "#155EEF"),
    ("--bg-brand-solid-hover", "--color-brand-700", "#004EEB"),
    ("--bg-brand-solid-active", "--color-brand-800", "#0040C1"),
    ("--bg-primary-solid", "--color-neutral-950", "#0A0A0A"),
    ("--bg-primary-solid-hover", "--color-neutral-800", "#262626"),
    ("--bg-primary-solid-active", "--color-neutral-900", "#171717"),
    ("--bg-primary", "--color-base-white", "#FFFFFF"),
    ("--bg-primary-hover", "--color-neutral-50", "#FAFAFA"),
    ("--bg-primary-active", "--color-neutral-100", "#F5F5F5"),
    ("--bg-secondary", "--color-neutral-50", "#FAFAFA"),
    ("--bg-secondary-hover", "--color-neutral-100", "#F5F5F5"),
    ("--bg-secondary-active", "--color-neutral-200", "#E5E5E5"),
    ("--bg-disabled", "--color-neutral-50", "#FAFAFA"),
];

const TEXT: &Aliases = &[
    ("--text-secondary", "--color-neutral-alpha-light-500", "rgba(0,0,0,0.55)"),
    ("--text-secondary-hover", "--color-neutral-alpha-light-600", "rgba(0,0,0,0.68)"),
    ("--text-secondary-active", "--color-neutral-alpha-light-700", "rgba(0,0,0,0.75)"),
    ("--text-tertiary", "--color-neutral-alpha-light-400", "rgba(0,0,0,0.36)"),
    ("--text-tertiary-hover", "--color-neutral-alpha-light-500", "rgba(0,0,0,0.55)"),
    ("--text-disabled", "--color-neutral-alpha-light-300", "rgba(0,0,0,0.17)"),
];

const TEXT_BRAND: &Aliases = &[
    ("--text-brand-secondary", "--color-brand-700", "#004EEB"),
    ("--text-brand-secondary-hover", "--color-brand-600", "#155EEF"),
    ("--text-brand-secondary-active", "--color-brand-800", "#0040C1"),
];

const TEXT_ON_COLOR: &Aliases = &[
    ("--text-on-color", "--color-base-white", "#FFFFFF"),
    ("--text-on-color-secondary", "--color-neutral-alpha-dark-900", "rgba(255,255,255,0.91)"),
    ("--text-on-color-secondary-hover", "--color-neutral-alpha-dark-800", "rgba(255,255,255,0.85)"),
    ("--text-on-color-tertiary", "--color-neutral-alpha-dark-600", "rgba(255,255,255,0.68)"),
    ("--text-on-color-tertiary-hover", "--color-neutral-alpha-dark-500", "rgba(255,255,255,0.55)"),
];

const BORDER: &Aliases = &[
    ("--border-tertiary", "--color-neutral-alpha-light-100", "rgba(0,0,0,0.04)"),
    ("--border-disabled", "--color-neutral-alpha-light-200", "rgba(0,0,0,0.10)"),
];

const ICON: &Aliases = &[
    ("--icon-brand", "--color-brand-300", "#84ADFF"),
    ("--icon-brand-hover", "--color-brand-200", "#B2CCFF"),
];

const FOCUS: &Aliases = &[("--focus-ring", "--color-brand-500", "#2970FF")];

fn group(name: &str, aliases: &Aliases) -> SemanticGroupDef {
    SemanticGroupDef {
        name: name.to_string(),
        tokens: aliases
            .iter()
            .map(|(token, primitive_ref, recorded)| SemanticDef {
                token: token.to_string(),
                primitive_ref: primitive_ref.to_string(),
                resolved_value: Some(recorded.to_string()),
            })
            .collect(),
    }
}

pub fn groups() -> Vec<SemanticGroupDef> {
    vec![
        group("Background", BACKGROUND),
        group("Text", TEXT),
        group("Text — Brand", TEXT_BRAND),
        group("Text — On Color", TEXT_ON_COLOR),
        group("Border", BORDER),
        group("Icon", ICON),
        group("Focus", FOCUS),
    ]
}
