// ABOUTME: Authored form of a token catalog, as written in TOML or built in code
// ABOUTME: The registry validates and indexes a TokenSource; exports round-trip through it

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TokenError};
use crate::typography::TypographyRole;

/// A whole catalog before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSource {
    pub primitives: Vec<PrimitiveGroupDef>,
    pub semantics: Vec<SemanticGroupDef>,
    pub radii: Vec<RadiusDef>,
    pub shadows: Vec<ShadowDef>,
    pub typography: Vec<TypographyDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveGroupDef {
    pub name: String,
    #[serde(default)]
    pub scales: Vec<PrimitiveDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDef {
    pub label: String,
    pub token: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticGroupDef {
    pub name: String,
    #[serde(default)]
    pub tokens: Vec<SemanticDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticDef {
    pub token: String,
    pub primitive_ref: String,
    /// Snapshot of the value the author expects. Checked, never used as the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusDef {
    pub label: String,
    pub token: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowDef {
    pub token: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyDef {
    pub utility: String,
    pub role: TypographyRole,
    pub size_px: u32,
    #[serde(default)]
    pub uppercase: bool,
}

impl TokenSource {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TokenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.iter().map(|g| g.scales.len()).sum()
    }

    pub fn semantic_count(&self) -> usize {
        self.semantics.iter().map(|g| g.tokens.len()).sum()
    }
}
