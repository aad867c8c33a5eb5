// ABOUTME: Plain-text views of the registry, one per preview tab
// ABOUTME: Tables are column-aligned and light swatches are marked so they stay visible

use std::io::{self, Write};
use tokenbook_tokens::{
    ColorLiteral, GroupKind, Registry, SwatchTreatment, TokenEntry, TokenMapping, TypographyRole,
};

const OUTLINED: &str = "□";
const SOLID: &str = "■";

fn swatch(color: &ColorLiteral) -> &'static str {
    match SwatchTreatment::for_color(color) {
        SwatchTreatment::Outlined => OUTLINED,
        SwatchTreatment::Solid => SOLID,
    }
}

/// Column-aligned rows under a header. The last column is left ragged.
fn table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    table_line(out, &widths, headers.iter().copied())?;
    for row in rows {
        table_line(out, &widths, row.iter().map(String::as_str))?;
    }
    Ok(())
}

fn table_line<'a, W: Write>(
    out: &mut W,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let mut text = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        text.push_str(cell);
        if i + 1 < widths.len() {
            let pad = width - cell.chars().count();
            text.push_str(&" ".repeat(pad + 2));
        }
    }
    writeln!(out, "{}", text.trim_end())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

fn entry_rows(entries: &[TokenEntry<'_>]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|entry| match entry {
            TokenEntry::Primitive(token) => vec![
                swatch(&token.value).to_string(),
                token.label.clone(),
                token.css_variable.clone(),
                token.literal.clone(),
            ],
            TokenEntry::Semantic(token) => vec![
                swatch(&token.resolved_value).to_string(),
                token.token.clone(),
                token.primitive_ref.clone(),
                token.resolved_literal.clone(),
            ],
        })
        .collect()
}

fn missing_group<W: Write>(out: &mut W, kind: &str, name: &str) -> io::Result<()> {
    writeln!(out, "No {kind} group named \"{name}\"")
}

/// Primitive color scales followed by the radius scale.
pub fn primitives<W: Write>(out: &mut W, registry: &Registry, group: Option<&str>) -> io::Result<()> {
    const HEADERS: &[&str] = &["", "Step", "Token", "Value"];

    if let Some(name) = group {
        let entries = registry.list_group(GroupKind::Primitive, name);
        if entries.is_empty() {
            return missing_group(out, "primitive", name);
        }
        return table(out, HEADERS, &entry_rows(&entries));
    }

    for group in registry.primitive_groups() {
        heading(out, &group.name)?;
        let entries = registry.list_group(GroupKind::Primitive, &group.name);
        table(out, HEADERS, &entry_rows(&entries))?;
        writeln!(out)?;
    }

    heading(out, "Radius")?;
    let rows: Vec<_> = registry
        .radii()
        .iter()
        .map(|r| vec![r.label.clone(), r.token.clone(), r.css_value()])
        .collect();
    table(out, &["Name", "Token", "Value"], &rows)
}

/// Semantic aliases followed by the shadow tokens.
pub fn semantic<W: Write>(out: &mut W, registry: &Registry, group: Option<&str>) -> io::Result<()> {
    const HEADERS: &[&str] = &["", "Token", "Primitive", "Value"];

    if let Some(name) = group {
        let entries = registry.list_group(GroupKind::Semantic, name);
        if entries.is_empty() {
            return missing_group(out, "semantic", name);
        }
        return table(out, HEADERS, &entry_rows(&entries));
    }

    for group in registry.semantic_groups() {
        heading(out, &group.name)?;
        let entries = registry.list_group(GroupKind::Semantic, &group.name);
        table(out, HEADERS, &entry_rows(&entries))?;
        writeln!(out)?;
    }

    heading(out, "Shadow")?;
    let mut rows = Vec::with_capacity(registry.shadows().len());
    for shadow in registry.shadows() {
        let expression = registry
            .shadow_expression(&shadow.token)
            .map_err(io::Error::other)?;
        rows.push(vec![shadow.token.clone(), expression]);
    }
    table(out, &["Token", "Value"], &rows)
}

fn mapping_rows(mappings: &[TokenMapping<'_>]) -> Vec<Vec<String>> {
    mappings
        .iter()
        .map(|m| {
            vec![
                swatch(m.resolved_value).to_string(),
                m.token.to_string(),
                "→".to_string(),
                m.primitive_ref.to_string(),
                "→".to_string(),
                m.resolved_literal.to_string(),
            ]
        })
        .collect()
}

/// The semantic → primitive → value chain, optionally filtered.
pub fn mapping<W: Write>(out: &mut W, registry: &Registry, filter: Option<&str>) -> io::Result<()> {
    let query = filter.unwrap_or_default();
    let matches = registry.filter(query);
    if matches.is_empty() {
        return writeln!(out, "No tokens match \"{query}\"");
    }

    let mut start = 0;
    while start < matches.len() {
        let group = matches[start].group;
        let end = matches[start..]
            .iter()
            .position(|m| m.group != group)
            .map_or(matches.len(), |offset| start + offset);

        heading(out, group)?;
        table(
            out,
            &["", "Semantic", "", "Primitive", "", "Value"],
            &mapping_rows(&matches[start..end]),
        )?;
        if end < matches.len() {
            writeln!(out)?;
        }
        start = end;
    }
    Ok(())
}

/// The type scale grouped by role.
pub fn typography<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    let mut first = true;
    for role in TypographyRole::ALL {
        let rows: Vec<_> = registry
            .typography()
            .iter()
            .filter(|t| t.role == role)
            .map(|t| {
                vec![
                    t.utility.clone(),
                    format!("{}px", t.size_px),
                    if t.uppercase { "uppercase" } else { "" }.to_string(),
                ]
            })
            .collect();
        if rows.is_empty() {
            continue;
        }

        if !first {
            writeln!(out)?;
        }
        first = false;

        heading(out, &role.to_string())?;
        writeln!(out, "{}", role.description())?;
        table(out, &["Utility", "Size", "Case"], &rows)?;
    }
    Ok(())
}
