// ABOUTME: Tests for the built-in design-token catalog and registry behavior end to end
// ABOUTME: Ensures palette ramps, semantic mappings, filtering and export stay consistent

#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::{
        ColorLiteral, GroupKind, Registry, SwatchTreatment, TokenError, TokenSource,
        TypographyRole, is_light,
    };

    fn builtin() -> Registry {
        Registry::builtin().expect("built-in catalog is consistent")
    }

    #[test]
    fn test_builtin_catalog_builds() {
        let registry = builtin();

        let names: Vec<_> = registry
            .primitive_groups()
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Base",
                "Neutral",
                "Neutral Alpha (Light)",
                "Neutral Alpha (Dark)",
                "Brand",
                "Information",
                "Success",
                "Error",
                "Warning",
            ]
        );

        // 2 base, 3 × 11 neutral, 5 × 12 hues
        assert_eq!(registry.primitive_count(), 2 + 33 + 60);
        assert_eq!(registry.semantic_groups().len(), 7);
        assert_eq!(registry.radii().len(), 10);
        assert_eq!(registry.shadows().len(), 5);
    }

    #[test]
    fn test_every_semantic_token_resolves() {
        let registry = builtin();

        for mapping in registry.mappings() {
            let resolved = registry.resolve(mapping.token).unwrap();
            let primitive = registry.primitive(mapping.primitive_ref).unwrap();
            assert_eq!(resolved, &primitive.value, "{}", mapping.token);
            assert_eq!(resolved, mapping.resolved_value);
        }
    }

    #[test]
    fn test_brand_scenario() {
        let registry = builtin();

        let token = registry.semantic("--bg-brand-solid").unwrap();
        assert_eq!(token.primitive_ref, "--color-brand-600");
        assert_eq!(
            registry.resolve("--bg-brand-solid").unwrap().to_string(),
            "#155EEF"
        );
        assert!(!registry.resolve("--bg-brand-solid").unwrap().is_light());
        assert_eq!(
            SwatchTreatment::for_color(registry.resolve("--bg-primary").unwrap()),
            SwatchTreatment::Outlined
        );
    }

    #[test]
    fn test_brand_group_alone() {
        let mut source = catalog::builtin();
        source.primitives.retain(|g| g.name == "Brand");
        source.semantics = vec![crate::source::SemanticGroupDef {
            name: "Background".into(),
            tokens: vec![crate::source::SemanticDef {
                token: "--bg-brand-solid".into(),
                primitive_ref: "--color-brand-600".into(),
                resolved_value: Some("#155EEF".into()),
            }],
        }];
        source.radii.clear();
        source.shadows.clear();
        source.typography.clear();

        let registry = Registry::new(source).unwrap();
        let steps: Vec<_> = registry.primitive_groups()[0]
            .scales
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(steps.first(), Some(&"25"));
        assert_eq!(steps.last(), Some(&"950"));
        assert_eq!(
            registry.resolve("--bg-brand-solid").unwrap().to_string(),
            "#155EEF"
        );
        assert_eq!(
            registry.resolve("--bg-brand-solid").unwrap(),
            registry.resolve("--bg-brand-solid").unwrap()
        );
    }

    #[test]
    fn test_alpha_ramps_increase_and_end_opaque() {
        let registry = builtin();

        for group in ["Neutral Alpha (Light)", "Neutral Alpha (Dark)"] {
            let entries = registry.list_group(GroupKind::Primitive, group);
            assert_eq!(entries.len(), 11, "{group}");

            let (last, ramp) = entries.split_last().unwrap();
            let alphas: Vec<f32> = ramp.iter().map(|e| e.value().alpha()).collect();
            assert!(alphas.windows(2).all(|w| w[0] < w[1]), "{group}: {alphas:?}");
            assert!(last.value().is_opaque(), "{group} 950 should be opaque");
        }
    }

    #[test]
    fn test_information_mirrors_brand() {
        let registry = builtin();
        let brand = registry.list_group(GroupKind::Primitive, "Brand");
        let info = registry.list_group(GroupKind::Primitive, "Information");

        assert_eq!(brand.len(), info.len());
        for (b, i) in brand.iter().zip(&info) {
            assert_eq!(b.value(), i.value());
            assert_ne!(b.id(), i.id());
        }
    }

    #[test]
    fn test_light_classification_of_palette() {
        let registry = builtin();

        assert!(registry.primitive("base-white").unwrap().value.is_light());
        assert!(!registry.primitive("base-black").unwrap().value.is_light());
        assert!(registry.primitive("neutral-200").unwrap().value.is_light());
        assert!(!registry.primitive("neutral-500").unwrap().value.is_light());
        // Faint alpha over white reads light, heavy alpha reads dark.
        assert!(registry.primitive("neutral-alpha-light-100").unwrap().value.is_light());
        assert!(!registry.primitive("neutral-alpha-light-900").unwrap().value.is_light());

        assert!(is_light("not-a-color"));
    }

    #[test]
    fn test_filter_brand() {
        let registry = builtin();
        let matches = registry.filter("brand");

        let tokens: Vec<_> = matches.iter().map(|m| m.token).collect();
        assert_eq!(
            tokens,
            [
                "--bg-brand-solid",
                "--bg-brand-solid-hover",
                "--bg-brand-solid-active",
                "--text-brand-secondary",
                "--text-brand-secondary-hover",
                "--text-brand-secondary-active",
                "--icon-brand",
                "--icon-brand-hover",
                // Matched through the primitive reference only.
                "--focus-ring",
            ]
        );
        assert!(matches.iter().all(|m| m.primitive_ref.starts_with("--color-brand-")));

        // Case-insensitive, and group names count.
        assert_eq!(registry.filter("BRAND").len(), matches.len());
        assert!(registry.filter("on color").iter().all(|m| m.group == "Text — On Color"));
    }

    #[test]
    fn test_filter_no_match_and_empty_query() {
        let registry = builtin();
        assert!(registry.filter("zzz-no-match").is_empty());
        assert_eq!(registry.filter("").len(), registry.semantic_count());
    }

    #[test]
    fn test_filter_keeps_registry_order() {
        let registry = builtin();
        let all: Vec<_> = registry.mappings().map(|m| m.token).collect();
        let filtered: Vec<_> = registry.filter("secondary").iter().map(|m| m.token).collect();

        let positions: Vec<usize> = filtered
            .iter()
            .map(|t| all.iter().position(|a| a == t).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(registry.filter("secondary"), registry.filter("secondary"));
    }

    #[test]
    fn test_radii_and_shadows() {
        let registry = builtin();

        assert_eq!(registry.radius("--radius-md").unwrap().px, 8);
        assert_eq!(registry.radius("--radius-full").unwrap().css_value(), "9999px");
        assert!(registry.radii().windows(2).all(|w| w[0].px < w[1].px));

        let composite = registry
            .shadow_expression("--shadow-focus-ring-xs-skeuomorphic")
            .unwrap();
        assert!(composite.starts_with("0 0 0 2px var(--bg-primary)"));
        assert!(composite.ends_with("inset 0 0 0 1px rgba(10,13,18,0.18)"));
    }

    #[test]
    fn test_typography_scale() {
        let registry = builtin();
        let scale = registry.typography();

        let caps: Vec<_> = scale.iter().filter(|t| t.uppercase).collect();
        assert_eq!(caps.len(), 1);
        assert_eq!(caps[0].role, TypographyRole::Label);
        assert_eq!(caps[0].size_px, 12);

        let headings = scale.iter().filter(|t| t.role == TypographyRole::Heading);
        assert_eq!(headings.map(|t| t.size_px).max(), Some(72));
    }

    #[test]
    fn test_export_round_trips() {
        let registry = builtin();
        let exported = registry.export();

        let toml = exported.to_toml_string().unwrap();
        let reloaded = Registry::new(TokenSource::from_toml_str(&toml).unwrap()).unwrap();
        assert_eq!(reloaded.export(), exported);

        let json = serde_json::to_string(&exported).unwrap();
        let from_json: TokenSource = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, exported);
    }

    #[test]
    fn test_builtin_is_deterministic() {
        assert_eq!(catalog::builtin(), catalog::builtin());
        assert_eq!(builtin().export(), builtin().export());
    }

    #[test]
    fn test_loaded_catalog_with_broken_snapshot_fails() {
        let input = r##"
            [[primitives]]
            name = "Brand"

            [[primitives.scales]]
            label = "600"
            token = "--color-brand-600"
            value = "#155EEF"

            [[semantics]]
            name = "Background"

            [[semantics.tokens]]
            token = "--bg-brand-solid"
            primitive_ref = "--color-brand-600"
            resolved_value = "#004EEB"
        "##;

        let source = TokenSource::from_toml_str(input).unwrap();
        let err = Registry::new(source).unwrap_err();
        assert!(matches!(err, TokenError::ResolvedValueMismatch { .. }));
        assert!(err.to_string().contains("--bg-brand-solid"));
    }

    #[test]
    fn test_loaded_catalog_with_alpha_literal() {
        let input = r##"
            [[primitives]]
            name = "Neutral Alpha (Dark)"

            [[primitives.scales]]
            label = "500"
            token = "--color-neutral-alpha-dark-500"
            value = "rgba(255,255,255,0.55)"
        "##;

        let registry = Registry::new(TokenSource::from_toml_str(input).unwrap()).unwrap();
        assert_eq!(
            registry.primitive("neutral-alpha-dark-500").unwrap().value,
            ColorLiteral::rgba(255.0, 255.0, 255.0, 0.55)
        );
    }
}
