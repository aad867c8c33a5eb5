// ABOUTME: Built-in primitive color palette: base, neutral, alpha ramps, brand and status hues
// ABOUTME: Each scale is listed lightest to darkest by weight step

use crate::source::{PrimitiveDef, PrimitiveGroupDef};

type Steps = [(&'static str, &'static str)];

const NEUTRAL: &Steps = &[
    ("50", "#FAFAFA"),
    ("100", "#F5F5F5"),
    ("200", "#E5E5E5"),
    ("300", "#D4D4D4"),
    ("400", "#A3A3A3"),
    ("500", "#737373"),
    ("600", "#525252"),
    ("700", "#404040"),
    ("800", "#262626"),
    ("900", "#171717"),
    ("950", "#0A0A0A"),
];

// 950 is an opaque ceiling, not the next alpha step.
const NEUTRAL_ALPHA_LIGHT: &Steps = &[
    ("50", "rgba(0,0,0,0.02)"),
    ("100", "rgba(0,0,0,0.04)"),
    ("200", "rgba(0,0,0,0.10)"),
    ("300", "rgba(0,0,0,0.17)"),
    ("400", "rgba(0,0,0,0.36)"),
    ("500", "rgba(0,0,0,0.55)"),
    ("600", "rgba(0,0,0,0.68)"),
    ("700", "rgba(0,0,0,0.75)"),
    ("800", "rgba(0,0,0,0.85)"),
    ("900", "rgba(0,0,0,0.91)"),
    ("950", "#0A0A0A"),
];

const NEUTRAL_ALPHA_DARK: &Steps = &[
    ("50", "rgba(255,255,255,0.02)"),
    ("100", "rgba(255,255,255,0.04)"),
    ("200", "rgba(255,255,255,0.10)"),
    ("300", "rgba(255,255,255,0.17)"),
    ("400", "rgba(255,255,255,0.36)"),
    ("500", "rgba(255,255,255,0.55)"),
    ("600", "rgba(255,255,255,0.68)"),
    ("700", "rgba(255,255,255,0.75)"),
    ("800", "rgba(255,255,255,0.85)"),
    ("900", "rgba(255,255,255,0.91)"),
    ("950", "#FFFFFF"),
];

// Information shares the brand hue.
const BLUE: &Steps = &[
    ("25", "#F5F8FF"),
    ("50", "#EFF4FF"),
    ("100", "#D1E0FF"),
    ("200", "#B2CCFF"),
    ("300", "#84ADFF"),
    ("400", "#528BFF"),
    ("500", "#2970FF"),
    ("600", "#155EEF"),
    ("700", "#004EEB"),
    ("800", "#0040C1"),
    ("900", "#00359E"),
    ("950", "#002266"),
];

const SUCCESS: &Steps = &[
    ("25", "#F6FEF9"),
    ("50", "#ECFDF3"),
    ("100", "#DCFAE6"),
    ("200", "#ABEFC6"),
    ("300", "#75E0A7"),
    ("400", "#47CD89"),
    ("500", "#17B26A"),
    ("600", "#079455"),
    ("700", "#067647"),
    ("800", "#085D3A"),
    ("900", "#074D31"),
    ("950", "#053321"),
];

const ERROR: &Steps = &[
    ("25", "#FFFBFA"),
    ("50", "#FEF3F2"),
    ("100", "#FEE4E2"),
    ("200", "#FECDCA"),
    ("300", "#FDA29B"),
    ("400", "#F97066"),
    ("500", "#F04438"),
    ("600", "#D92D20"),
    ("700", "#B42318"),
    ("800", "#912018"),
    ("900", "#7A271A"),
    ("950", "#55160C"),
];

const WARNING: &Steps = &[
    ("25", "#FFFCF5"),
    ("50", "#FFFAEB"),
    ("100", "#FEF0C7"),
    ("200", "#FEDF89"),
    ("300", "#FEC84B"),
    ("400", "#FDB022"),
    ("500", "#F79009"),
    ("600", "#DC6803"),
    ("700", "#B54708"),
    ("800", "#93370D"),
    ("900", "#7A2E0E"),
    ("950", "#4E1D09"),
];

fn scale(name: &str, slug: &str, steps: &Steps) -> PrimitiveGroupDef {
    PrimitiveGroupDef {
        name: name.to_string(),
        scales: steps
            .iter()
            .map(|(label, value)| PrimitiveDef {
                label: label.to_string(),
                token: format!("--color-{slug}-{label}"),
                value: value.to_string(),
            })
            .collect(),
    }
}

fn base() -> PrimitiveGroupDef {
    let entry = |label: &str, slug: &str, value: &str| PrimitiveDef {
        label: label.to_string(),
        token: format!("--color-base-{slug}"),
        value: value.to_string(),
    };

    PrimitiveGroupDef {
        name: "Base".to_string(),
        scales: vec![
            entry("White", "white", "#FFFFFF"),
            entry("Black", "black", "#000000"),
        ],
    }
}

pub fn groups() -> Vec<PrimitiveGroupDef> {
    vec![
        base(),
        scale("Neutral", "neutral", NEUTRAL),
        scale("Neutral Alpha (Light)", "neutral-alpha-light", NEUTRAL_ALPHA_LIGHT),
        scale("Neutral Alpha (Dark)", "neutral-alpha-dark", NEUTRAL_ALPHA_DARK),
        scale("Brand", "brand", BLUE),
        scale("Information", "information", BLUE),
        scale("Success", "success", SUCCESS),
        scale("Error", "error", ERROR),
        scale("Warning", "warning", WARNING),
    ]
}
