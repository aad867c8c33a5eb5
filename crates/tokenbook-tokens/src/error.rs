// ABOUTME: Error types for token lookup, registry construction, and catalog loading
// ABOUTME: Separates lookup misses from construction-time consistency failures

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::color::ColorParseError;

pub type Result<T> = std::result::Result<T, TokenError>;

/// Which table a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Primitive,
    Semantic,
    Radius,
    Shadow,
    Typography,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primitive => "primitive",
            Self::Semantic => "semantic",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
            Self::Typography => "typography",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("{kind} token '{id}' not found")]
    NotFound { kind: TokenKind, id: String },

    #[error("semantic token '{token}' references missing primitive '{primitive_ref}'")]
    DanglingReference {
        token: String,
        primitive_ref: String,
    },

    #[error(
        "semantic token '{token}' records resolved value {recorded} but '{primitive_ref}' is {actual}"
    )]
    ResolvedValueMismatch {
        token: String,
        primitive_ref: String,
        recorded: String,
        actual: String,
    },

    #[error("{kind} token '{id}' is defined more than once")]
    DuplicateToken { kind: TokenKind, id: String },

    #[error("primitive group '{group}': step '{label}' does not follow '{previous}'")]
    StepOrder {
        group: String,
        label: String,
        previous: String,
    },

    #[error("primitive group '{group}': alpha of '{token}' does not increase past {previous}")]
    AlphaRamp {
        group: String,
        token: String,
        previous: f32,
    },

    #[error("shadow '{token}' composes unknown shadow '{layer}'")]
    UnknownShadowLayer { token: String, layer: String },

    #[error("shadow '{token}' composes '{layer}', which is itself a composite")]
    NestedShadowComposite { token: String, layer: String },

    #[error("invalid color for token '{token}': {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },

    #[error("invalid radius for token '{token}': '{value}'")]
    InvalidRadius { token: String, value: String },

    #[error("failed to parse token catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read token catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TokenError {
    pub fn not_found<S: Into<String>>(kind: TokenKind, id: S) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn duplicate<S: Into<String>>(kind: TokenKind, id: S) -> Self {
        Self::DuplicateToken {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Errors raised while building a registry from a catalog that parsed fine
    /// but breaks one of the registry invariants.
    pub fn is_consistency(&self) -> bool {
        matches!(
            self,
            Self::DanglingReference { .. }
                | Self::ResolvedValueMismatch { .. }
                | Self::DuplicateToken { .. }
                | Self::StepOrder { .. }
                | Self::AlphaRamp { .. }
                | Self::UnknownShadowLayer { .. }
                | Self::NestedShadowComposite { .. }
                | Self::InvalidColor { .. }
                | Self::InvalidRadius { .. }
        )
    }
}
