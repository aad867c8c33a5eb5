// ABOUTME: Design-token registry: primitive palette, semantic aliases, radii, shadows, type scale
// ABOUTME: Built once from a TokenSource, checked for consistency, then shared read-only

pub mod catalog;
pub mod color;
pub mod error;
pub mod registry;
pub mod shadow;
pub mod source;
pub mod typography;

#[cfg(test)]
mod tests;

pub use color::{ColorLiteral, ColorParseError, LIGHT_LUMA_THRESHOLD, SwatchTreatment, is_light};
pub use error::{Result, TokenError, TokenKind};
pub use registry::{
    GroupKind, PrimitiveGroup, PrimitiveToken, RadiusToken, Registry, SemanticGroup,
    SemanticToken, ShadowToken, TokenEntry, TokenMapping,
};
pub use shadow::ShadowValue;
pub use source::TokenSource;
pub use typography::{TypographyRole, TypographyToken};
