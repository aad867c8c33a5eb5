// ABOUTME: Immutable token registry built once from a TokenSource and shared by reference
// ABOUTME: Enforces consistency at construction and answers lookups, resolution, and filters

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokenbook_logging::{debug, error, info};

use crate::catalog;
use crate::color::ColorLiteral;
use crate::error::{Result, TokenError, TokenKind};
use crate::shadow::{ShadowValue, shadow_token_id};
use crate::source::{
    PrimitiveDef, PrimitiveGroupDef, RadiusDef, SemanticDef, SemanticGroupDef, ShadowDef,
    TokenSource, TypographyDef,
};
use crate::typography::TypographyToken;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveToken {
    /// Step label as displayed, e.g. "500" or "White"
    pub label: String,
    /// Stable identifier, e.g. "neutral-500"
    pub name: String,
    /// Lookup key, e.g. "--color-neutral-500"
    pub css_variable: String,
    pub value: ColorLiteral,
    /// The value as written in the catalog, e.g. "rgba(0,0,0,0.10)"
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveGroup {
    pub name: String,
    pub scales: Vec<PrimitiveToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticToken {
    pub token: String,
    pub primitive_ref: String,
    /// Derived from the primitive table when the registry was built.
    pub resolved_value: ColorLiteral,
    /// The referenced primitive's value as written in the catalog.
    pub resolved_literal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticGroup {
    pub name: String,
    pub tokens: Vec<SemanticToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadiusToken {
    pub label: String,
    pub token: String,
    pub px: u32,
}

impl RadiusToken {
    pub fn css_value(&self) -> String {
        format!("{}px", self.px)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowToken {
    pub token: String,
    pub value: ShadowValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Primitive,
    Semantic,
}

/// One row of a listed group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenEntry<'a> {
    Primitive(&'a PrimitiveToken),
    Semantic(&'a SemanticToken),
}

impl<'a> TokenEntry<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Primitive(token) => &token.css_variable,
            Self::Semantic(token) => &token.token,
        }
    }

    pub fn value(&self) -> &'a ColorLiteral {
        match *self {
            Self::Primitive(token) => &token.value,
            Self::Semantic(token) => &token.resolved_value,
        }
    }
}

/// A semantic token with its group, as shown in the mapping view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenMapping<'a> {
    pub group: &'a str,
    pub token: &'a str,
    pub primitive_ref: &'a str,
    pub resolved_value: &'a ColorLiteral,
    pub resolved_literal: &'a str,
}

impl TokenMapping<'_> {
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.token.to_lowercase().contains(needle)
            || self.primitive_ref.to_lowercase().contains(needle)
            || self.group.to_lowercase().contains(needle)
    }
}

type Slot = (usize, usize);

/// Validated, indexed design tokens. Read-only once built.
#[derive(Debug, Clone)]
pub struct Registry {
    primitive_groups: Vec<PrimitiveGroup>,
    semantic_groups: Vec<SemanticGroup>,
    radii: Vec<RadiusToken>,
    shadows: Vec<ShadowToken>,
    typography: Vec<TypographyToken>,
    primitive_index: HashMap<String, Slot>,
    semantic_index: HashMap<String, Slot>,
    radius_index: HashMap<String, usize>,
    shadow_index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry, failing on the first broken invariant.
    pub fn new(source: TokenSource) -> Result<Self> {
        Self::build(source).inspect_err(|err| {
            if err.is_consistency() {
                error!(error = %err, "Token catalog failed consistency checks");
            }
        })
    }

    /// The built-in design system.
    pub fn builtin() -> Result<Self> {
        Self::new(catalog::builtin())
    }

    fn build(source: TokenSource) -> Result<Self> {
        let TokenSource {
            primitives,
            semantics,
            radii,
            shadows,
            typography,
        } = source;

        let (primitive_groups, primitive_index) = build_primitives(primitives)?;
        let (semantic_groups, semantic_index) =
            build_semantics(semantics, &primitive_groups, &primitive_index)?;
        let (radii, radius_index) = build_radii(radii)?;
        let (shadows, shadow_index) = build_shadows(shadows)?;
        let typography = build_typography(typography)?;

        let registry = Self {
            primitive_groups,
            semantic_groups,
            radii,
            shadows,
            typography,
            primitive_index,
            semantic_index,
            radius_index,
            shadow_index,
        };

        info!(
            primitive_groups = registry.primitive_groups.len(),
            primitives = registry.primitive_count(),
            semantic_groups = registry.semantic_groups.len(),
            semantics = registry.semantic_count(),
            radii = registry.radii.len(),
            shadows = registry.shadows.len(),
            typography = registry.typography.len(),
            "Token registry built"
        );

        Ok(registry)
    }

    /// Look up a primitive by CSS variable (`--color-brand-600`) or name (`brand-600`).
    pub fn primitive(&self, id: &str) -> Result<&PrimitiveToken> {
        match self.primitive_index.get(id) {
            Some(&(group, index)) => Ok(&self.primitive_groups[group].scales[index]),
            None => {
                debug!(id, "Primitive token lookup missed");
                Err(TokenError::not_found(TokenKind::Primitive, id))
            }
        }
    }

    pub fn semantic(&self, token: &str) -> Result<&SemanticToken> {
        match self.semantic_index.get(token) {
            Some(&(group, index)) => Ok(&self.semantic_groups[group].tokens[index]),
            None => {
                debug!(token, "Semantic token lookup missed");
                Err(TokenError::not_found(TokenKind::Semantic, token))
            }
        }
    }

    /// Follow a semantic token to its primitive's value. Exactly one hop.
    pub fn resolve(&self, token: &str) -> Result<&ColorLiteral> {
        let semantic = self.semantic(token)?;
        let primitive = self.primitive(&semantic.primitive_ref)?;
        Ok(&primitive.value)
    }

    pub fn radius(&self, token: &str) -> Result<&RadiusToken> {
        self.radius_index
            .get(token)
            .map(|&index| &self.radii[index])
            .ok_or_else(|| TokenError::not_found(TokenKind::Radius, token))
    }

    /// Accepts the same spellings as authored catalogs: `--shadow-xs`, `shadow-xs` or `xs`.
    pub fn shadow(&self, token: &str) -> Result<&ShadowToken> {
        self.shadow_index
            .get(&shadow_token_id(token))
            .map(|&index| &self.shadows[index])
            .ok_or_else(|| TokenError::not_found(TokenKind::Shadow, token))
    }

    /// The box-shadow expression for a token, with composites expanded in order.
    pub fn shadow_expression(&self, token: &str) -> Result<String> {
        match &self.shadow(token)?.value {
            ShadowValue::Layers(expression) => Ok(expression.clone()),
            ShadowValue::Composite(parts) => {
                let layers = parts
                    .iter()
                    .map(|part| match &self.shadow(part)?.value {
                        ShadowValue::Layers(expression) => Ok(expression.as_str()),
                        // Rejected at construction.
                        ShadowValue::Composite(_) => Err(TokenError::NestedShadowComposite {
                            token: token.to_string(),
                            layer: part.clone(),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(layers.join(", "))
            }
        }
    }

    /// Tokens of one group in declared order. Unknown or empty groups give an empty list.
    pub fn list_group(&self, kind: GroupKind, group_name: &str) -> Vec<TokenEntry<'_>> {
        match kind {
            GroupKind::Primitive => self
                .primitive_groups
                .iter()
                .filter(|group| group.name.eq_ignore_ascii_case(group_name))
                .flat_map(|group| group.scales.iter().map(TokenEntry::Primitive))
                .collect(),
            GroupKind::Semantic => self
                .semantic_groups
                .iter()
                .filter(|group| group.name.eq_ignore_ascii_case(group_name))
                .flat_map(|group| group.tokens.iter().map(TokenEntry::Semantic))
                .collect(),
        }
    }

    /// Every semantic token with its group, in registry order.
    pub fn mappings(&self) -> impl Iterator<Item = TokenMapping<'_>> {
        self.semantic_groups.iter().flat_map(|group| {
            group.tokens.iter().map(move |token| TokenMapping {
                group: &group.name,
                token: &token.token,
                primitive_ref: &token.primitive_ref,
                resolved_value: &token.resolved_value,
                resolved_literal: &token.resolved_literal,
            })
        })
    }

    /// Case-insensitive substring search over token id, primitive reference and
    /// group name. Keeps registry order; an empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<TokenMapping<'_>> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.mappings().collect();
        }
        self.mappings()
            .filter(|mapping| mapping.matches(&needle))
            .collect()
    }

    pub fn primitive_groups(&self) -> &[PrimitiveGroup] {
        &self.primitive_groups
    }

    pub fn semantic_groups(&self) -> &[SemanticGroup] {
        &self.semantic_groups
    }

    pub fn radii(&self) -> &[RadiusToken] {
        &self.radii
    }

    pub fn shadows(&self) -> &[ShadowToken] {
        &self.shadows
    }

    pub fn typography(&self) -> &[TypographyToken] {
        &self.typography
    }

    pub fn primitive_count(&self) -> usize {
        self.primitive_groups.iter().map(|g| g.scales.len()).sum()
    }

    pub fn semantic_count(&self) -> usize {
        self.semantic_groups.iter().map(|g| g.tokens.len()).sum()
    }

    /// Snapshot the registry in authored form, with resolved values filled in.
    ///
    /// Colors keep the text they were authored with, so `rgba(0,0,0,0.10)`
    /// exports as written rather than as `ColorLiteral`'s `rgba(0,0,0,0.1)`.
    pub fn export(&self) -> TokenSource {
        TokenSource {
            primitives: self
                .primitive_groups
                .iter()
                .map(|group| PrimitiveGroupDef {
                    name: group.name.clone(),
                    scales: group
                        .scales
                        .iter()
                        .map(|token| PrimitiveDef {
                            label: token.label.clone(),
                            token: token.css_variable.clone(),
                            value: token.literal.clone(),
                        })
                        .collect(),
                })
                .collect(),
            semantics: self
                .semantic_groups
                .iter()
                .map(|group| SemanticGroupDef {
                    name: group.name.clone(),
                    tokens: group
                        .tokens
                        .iter()
                        .map(|token| SemanticDef {
                            token: token.token.clone(),
                            primitive_ref: token.primitive_ref.clone(),
                            resolved_value: Some(token.resolved_literal.clone()),
                        })
                        .collect(),
                })
                .collect(),
            radii: self
                .radii
                .iter()
                .map(|radius| RadiusDef {
                    label: radius.label.clone(),
                    token: radius.token.clone(),
                    value: radius.css_value(),
                })
                .collect(),
            shadows: self
                .shadows
                .iter()
                .map(|shadow| ShadowDef {
                    token: shadow.token.clone(),
                    value: shadow.value.to_string(),
                })
                .collect(),
            typography: self
                .typography
                .iter()
                .map(|token| TypographyDef {
                    utility: token.utility.clone(),
                    role: token.role,
                    size_px: token.size_px,
                    uppercase: token.uppercase,
                })
                .collect(),
        }
    }
}

/// `--color-neutral-500` is named `neutral-500`.
fn primitive_name(css_variable: &str) -> &str {
    let bare = css_variable.trim_start_matches("--");
    bare.strip_prefix("color-").unwrap_or(bare)
}

fn claim<K>(index: &mut HashMap<String, K>, key: &str, slot: K, kind: TokenKind) -> Result<()> {
    match index.entry(key.to_string()) {
        Entry::Occupied(_) => Err(TokenError::duplicate(kind, key)),
        Entry::Vacant(vacant) => {
            vacant.insert(slot);
            Ok(())
        }
    }
}

fn build_primitives(
    defs: Vec<PrimitiveGroupDef>,
) -> Result<(Vec<PrimitiveGroup>, HashMap<String, Slot>)> {
    let mut groups = Vec::with_capacity(defs.len());
    let mut index = HashMap::new();

    for (group_slot, group) in defs.into_iter().enumerate() {
        let mut previous_step: Option<(u32, String)> = None;
        let mut previous_alpha: Option<f32> = None;
        let mut scales = Vec::with_capacity(group.scales.len());

        for (token_slot, def) in group.scales.into_iter().enumerate() {
            let value: ColorLiteral =
                def.value
                    .parse()
                    .map_err(|source| TokenError::InvalidColor {
                        token: def.token.clone(),
                        source,
                    })?;

            if let Ok(step) = def.label.parse::<u32>() {
                if let Some((previous, previous_label)) = &previous_step
                    && step <= *previous
                {
                    return Err(TokenError::StepOrder {
                        group: group.name.clone(),
                        label: def.label.clone(),
                        previous: previous_label.clone(),
                    });
                }
                previous_step = Some((step, def.label.clone()));
            }

            if let ColorLiteral::AlphaBlended { a, .. } = value {
                if let Some(previous) = previous_alpha
                    && a <= previous
                {
                    return Err(TokenError::AlphaRamp {
                        group: group.name.clone(),
                        token: def.token.clone(),
                        previous,
                    });
                }
                previous_alpha = Some(a);
            }

            let name = primitive_name(&def.token).to_string();
            let slot = (group_slot, token_slot);
            claim(&mut index, &def.token, slot, TokenKind::Primitive)?;
            if name != def.token {
                claim(&mut index, &name, slot, TokenKind::Primitive)?;
            }

            scales.push(PrimitiveToken {
                label: def.label,
                name,
                css_variable: def.token,
                value,
                literal: def.value.trim().to_string(),
            });
        }

        groups.push(PrimitiveGroup {
            name: group.name,
            scales,
        });
    }

    Ok((groups, index))
}

fn build_semantics(
    defs: Vec<SemanticGroupDef>,
    primitives: &[PrimitiveGroup],
    primitive_index: &HashMap<String, Slot>,
) -> Result<(Vec<SemanticGroup>, HashMap<String, Slot>)> {
    let mut groups = Vec::with_capacity(defs.len());
    let mut index = HashMap::new();

    for (group_slot, group) in defs.into_iter().enumerate() {
        let mut tokens = Vec::with_capacity(group.tokens.len());

        for (token_slot, def) in group.tokens.into_iter().enumerate() {
            let &(p_group, p_index) = primitive_index.get(&def.primitive_ref).ok_or_else(|| {
                TokenError::DanglingReference {
                    token: def.token.clone(),
                    primitive_ref: def.primitive_ref.clone(),
                }
            })?;
            let primitive = &primitives[p_group].scales[p_index];
            let actual = primitive.value;

            if let Some(recorded) = &def.resolved_value {
                let recorded_value: ColorLiteral =
                    recorded.parse().map_err(|source| TokenError::InvalidColor {
                        token: def.token.clone(),
                        source,
                    })?;
                if recorded_value != actual {
                    return Err(TokenError::ResolvedValueMismatch {
                        token: def.token.clone(),
                        primitive_ref: def.primitive_ref.clone(),
                        recorded: recorded.clone(),
                        actual: primitive.literal.clone(),
                    });
                }
            }

            claim(
                &mut index,
                &def.token,
                (group_slot, token_slot),
                TokenKind::Semantic,
            )?;

            tokens.push(SemanticToken {
                token: def.token,
                primitive_ref: def.primitive_ref,
                resolved_value: actual,
                resolved_literal: primitive.literal.clone(),
            });
        }

        groups.push(SemanticGroup {
            name: group.name,
            tokens,
        });
    }

    Ok((groups, index))
}

fn parse_px(value: &str) -> Option<u32> {
    value.trim().strip_suffix("px")?.parse().ok()
}

fn build_radii(defs: Vec<RadiusDef>) -> Result<(Vec<RadiusToken>, HashMap<String, usize>)> {
    let mut radii = Vec::with_capacity(defs.len());
    let mut index = HashMap::new();

    for (slot, def) in defs.into_iter().enumerate() {
        let px = parse_px(&def.value).ok_or_else(|| TokenError::InvalidRadius {
            token: def.token.clone(),
            value: def.value.clone(),
        })?;
        claim(&mut index, &def.token, slot, TokenKind::Radius)?;
        radii.push(RadiusToken {
            label: def.label,
            token: def.token,
            px,
        });
    }

    Ok((radii, index))
}

fn build_shadows(defs: Vec<ShadowDef>) -> Result<(Vec<ShadowToken>, HashMap<String, usize>)> {
    let mut shadows = Vec::with_capacity(defs.len());
    let mut index = HashMap::new();

    for (slot, def) in defs.into_iter().enumerate() {
        let token = shadow_token_id(&def.token);
        claim(&mut index, &token, slot, TokenKind::Shadow)?;
        shadows.push(ShadowToken {
            token,
            value: ShadowValue::parse(&def.value),
        });
    }

    // Composites may point forward, so check once every shadow is indexed.
    for shadow in &shadows {
        let ShadowValue::Composite(parts) = &shadow.value else {
            continue;
        };
        for part in parts {
            let Some(&target) = index.get(part) else {
                return Err(TokenError::UnknownShadowLayer {
                    token: shadow.token.clone(),
                    layer: part.clone(),
                });
            };
            if shadows[target].value.is_composite() {
                return Err(TokenError::NestedShadowComposite {
                    token: shadow.token.clone(),
                    layer: part.clone(),
                });
            }
        }
    }

    Ok((shadows, index))
}

fn build_typography(defs: Vec<TypographyDef>) -> Result<Vec<TypographyToken>> {
    let mut seen = HashMap::new();
    let mut scale = Vec::with_capacity(defs.len());

    for (slot, def) in defs.into_iter().enumerate() {
        claim(&mut seen, &def.utility, slot, TokenKind::Typography)?;
        scale.push(TypographyToken {
            utility: def.utility,
            role: def.role,
            size_px: def.size_px,
            uppercase: def.uppercase,
        });
    }

    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primitive(label: &str, token: &str, value: &str) -> PrimitiveDef {
        PrimitiveDef {
            label: label.into(),
            token: token.into(),
            value: value.into(),
        }
    }

    fn semantic(token: &str, primitive_ref: &str, recorded: Option<&str>) -> SemanticDef {
        SemanticDef {
            token: token.into(),
            primitive_ref: primitive_ref.into(),
            resolved_value: recorded.map(Into::into),
        }
    }

    fn small_source() -> TokenSource {
        TokenSource {
            primitives: vec![PrimitiveGroupDef {
                name: "Brand".into(),
                scales: vec![
                    primitive("500", "--color-brand-500", "#2970FF"),
                    primitive("600", "--color-brand-600", "#155EEF"),
                ],
            }],
            semantics: vec![SemanticGroupDef {
                name: "Background".into(),
                tokens: vec![semantic(
                    "--bg-brand-solid",
                    "--color-brand-600",
                    Some("#155eef"),
                )],
            }],
            ..TokenSource::default()
        }
    }

    #[test]
    fn test_primitive_lookup_by_name_and_variable() {
        let registry = Registry::new(small_source()).unwrap();

        let by_var = registry.primitive("--color-brand-600").unwrap();
        let by_name = registry.primitive("brand-600").unwrap();
        assert_eq!(by_var, by_name);
        assert_eq!(by_var.name, "brand-600");
        assert_eq!(by_var.value, ColorLiteral::opaque(0x15, 0x5E, 0xEF));
    }

    #[test]
    fn test_resolve_is_one_hop() {
        let registry = Registry::new(small_source()).unwrap();
        let resolved = registry.resolve("--bg-brand-solid").unwrap();
        assert_eq!(resolved.to_string(), "#155EEF");
        assert_eq!(
            resolved,
            &registry.primitive("--color-brand-600").unwrap().value
        );
    }

    #[test]
    fn test_missing_tokens_are_not_found() {
        let registry = Registry::new(small_source()).unwrap();
        assert!(registry.primitive("--color-brand-601").unwrap_err().is_not_found());
        assert!(registry.semantic("--bg-nope").unwrap_err().is_not_found());
        assert!(registry.resolve("--bg-nope").unwrap_err().is_not_found());
        assert!(registry.radius("--radius-md").unwrap_err().is_not_found());
        assert!(registry.shadow("--shadow-xs").unwrap_err().is_not_found());
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let mut source = small_source();
        source.semantics[0].tokens[0].primitive_ref = "--color-brand-601".into();

        let err = Registry::new(source).unwrap_err();
        assert!(matches!(
            err,
            TokenError::DanglingReference { ref primitive_ref, .. } if primitive_ref == "--color-brand-601"
        ));
    }

    #[test]
    fn test_recorded_value_must_match_primitive() {
        let mut source = small_source();
        source.semantics[0].tokens[0].resolved_value = Some("#2970FF".into());

        let err = Registry::new(source).unwrap_err();
        assert!(matches!(err, TokenError::ResolvedValueMismatch { .. }));
        assert!(err.is_consistency());
    }

    #[test]
    fn test_missing_snapshot_is_derived() {
        let mut source = small_source();
        source.semantics[0].tokens[0].resolved_value = None;

        let registry = Registry::new(source).unwrap();
        let token = registry.semantic("--bg-brand-solid").unwrap();
        assert_eq!(token.resolved_value.to_string(), "#155EEF");
    }

    #[test]
    fn test_duplicate_tokens_rejected() {
        let mut source = small_source();
        source.primitives[0]
            .scales
            .push(primitive("700", "--color-brand-600", "#004EEB"));
        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::DuplicateToken {
                kind: TokenKind::Primitive,
                ..
            }
        ));

        let mut source = small_source();
        source.semantics.push(SemanticGroupDef {
            name: "Again".into(),
            tokens: vec![semantic("--bg-brand-solid", "--color-brand-500", None)],
        });
        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::DuplicateToken {
                kind: TokenKind::Semantic,
                ..
            }
        ));
    }

    #[test]
    fn test_step_labels_must_increase() {
        let mut source = small_source();
        source.primitives[0]
            .scales
            .push(primitive("550", "--color-brand-550", "#1E66F5"));

        let err = Registry::new(source).unwrap_err();
        assert!(matches!(
            err,
            TokenError::StepOrder { ref label, ref previous, .. } if label == "550" && previous == "600"
        ));
    }

    #[test]
    fn test_alpha_ramp_must_increase() {
        let source = TokenSource {
            primitives: vec![PrimitiveGroupDef {
                name: "Neutral Alpha (Light)".into(),
                scales: vec![
                    primitive("50", "--color-neutral-alpha-light-50", "rgba(0,0,0,0.10)"),
                    primitive("100", "--color-neutral-alpha-light-100", "rgba(0,0,0,0.04)"),
                ],
            }],
            ..TokenSource::default()
        };

        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::AlphaRamp { .. }
        ));
    }

    #[test]
    fn test_opaque_step_does_not_break_alpha_ramp() {
        let source = TokenSource {
            primitives: vec![PrimitiveGroupDef {
                name: "Neutral Alpha (Light)".into(),
                scales: vec![
                    primitive("800", "--color-neutral-alpha-light-800", "rgba(0,0,0,0.85)"),
                    primitive("900", "--color-neutral-alpha-light-900", "rgba(0,0,0,0.91)"),
                    primitive("950", "--color-neutral-alpha-light-950", "#0A0A0A"),
                ],
            }],
            ..TokenSource::default()
        };

        let registry = Registry::new(source).unwrap();
        assert!(
            registry
                .primitive("neutral-alpha-light-950")
                .unwrap()
                .value
                .is_opaque()
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut source = small_source();
        source.primitives[0].scales[0].value = "#2970F".into();
        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::InvalidColor { .. }
        ));

        let mut source = small_source();
        source.radii.push(RadiusDef {
            label: "md".into(),
            token: "--radius-md".into(),
            value: "8em".into(),
        });
        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::InvalidRadius { .. }
        ));
    }

    #[test]
    fn test_shadow_composites_expand_one_level() {
        let mut source = small_source();
        source.shadows = vec![
            ShadowDef {
                token: "--shadow-focus-ring-xs".into(),
                value: "focus-ring + shadow-xs".into(),
            },
            ShadowDef {
                token: "--shadow-xs".into(),
                value: "0px 1px 2px 0px rgba(10,13,18,0.05)".into(),
            },
            ShadowDef {
                token: "--shadow-focus-ring".into(),
                value: "0 0 0 2px var(--bg-primary), 0 0 0 4px var(--focus-ring)".into(),
            },
        ];

        let registry = Registry::new(source).unwrap();
        assert_eq!(
            registry.shadow_expression("--shadow-focus-ring-xs").unwrap(),
            "0 0 0 2px var(--bg-primary), 0 0 0 4px var(--focus-ring), 0px 1px 2px 0px rgba(10,13,18,0.05)"
        );
        assert_eq!(
            registry.shadow_expression("--shadow-xs").unwrap(),
            "0px 1px 2px 0px rgba(10,13,18,0.05)"
        );
    }

    #[test]
    fn test_shadow_lookup_accepts_authored_spelling() {
        let mut source = small_source();
        source.shadows = vec![ShadowDef {
            token: "shadow-xs".into(),
            value: "0px 1px 2px 0px rgba(10,13,18,0.05)".into(),
        }];

        let registry = Registry::new(source).unwrap();
        let by_authored = registry.shadow("shadow-xs").unwrap();
        assert_eq!(by_authored.token, "--shadow-xs");
        assert_eq!(registry.shadow("--shadow-xs").unwrap(), by_authored);
        assert!(registry.shadow_expression("shadow-xs").is_ok());
        assert!(registry.shadow("shadow-sm").unwrap_err().is_not_found());
    }

    #[test]
    fn test_shadow_composite_errors() {
        let mut source = small_source();
        source.shadows = vec![ShadowDef {
            token: "--shadow-focus-ring-xs".into(),
            value: "focus-ring + shadow-xs".into(),
        }];
        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::UnknownShadowLayer { .. }
        ));

        let mut source = small_source();
        source.shadows = vec![
            ShadowDef {
                token: "--shadow-a".into(),
                value: "0 0 0 1px red".into(),
            },
            ShadowDef {
                token: "--shadow-b".into(),
                value: "0 0 0 2px blue".into(),
            },
            ShadowDef {
                token: "--shadow-ab".into(),
                value: "shadow-a + shadow-b".into(),
            },
            ShadowDef {
                token: "--shadow-nested".into(),
                value: "shadow-ab + shadow-a".into(),
            },
        ];
        assert!(matches!(
            Registry::new(source).unwrap_err(),
            TokenError::NestedShadowComposite { .. }
        ));
    }

    #[test]
    fn test_list_group_unknown_is_empty() {
        let registry = Registry::new(small_source()).unwrap();
        assert!(registry.list_group(GroupKind::Primitive, "Nope").is_empty());
        assert!(registry.list_group(GroupKind::Semantic, "Brand").is_empty());

        let brand = registry.list_group(GroupKind::Primitive, "brand");
        let ids: Vec<_> = brand.iter().map(TokenEntry::id).collect();
        assert_eq!(ids, ["--color-brand-500", "--color-brand-600"]);
    }

    #[test]
    fn test_authored_literals_survive_export() {
        let source = TokenSource {
            primitives: vec![PrimitiveGroupDef {
                name: "Neutral Alpha (Light)".into(),
                scales: vec![primitive(
                    "200",
                    "--color-neutral-alpha-light-200",
                    "rgba(0,0,0,0.10)",
                )],
            }],
            semantics: vec![SemanticGroupDef {
                name: "Border".into(),
                tokens: vec![semantic(
                    "--border-disabled",
                    "--color-neutral-alpha-light-200",
                    Some("rgba(0,0,0,0.1)"),
                )],
            }],
            ..TokenSource::default()
        };

        let registry = Registry::new(source).unwrap();
        let primitive = registry.primitive("neutral-alpha-light-200").unwrap();
        assert_eq!(primitive.literal, "rgba(0,0,0,0.10)");
        assert_eq!(primitive.value.to_string(), "rgba(0,0,0,0.1)");

        let exported = registry.export();
        assert_eq!(exported.primitives[0].scales[0].value, "rgba(0,0,0,0.10)");
        assert_eq!(
            exported.semantics[0].tokens[0].resolved_value.as_deref(),
            Some("rgba(0,0,0,0.10)")
        );
        assert_eq!(registry.filter("border")[0].resolved_literal, "rgba(0,0,0,0.10)");
    }

    #[test]
    fn test_empty_source_builds_empty_registry() {
        let registry = Registry::new(TokenSource::default()).unwrap();
        assert_eq!(registry.primitive_count(), 0);
        assert!(registry.filter("").is_empty());
        assert!(registry.export() == TokenSource::default());
    }
}
