// ABOUTME: Command-line arguments for the tokenbook preview, parsed with clap derive
// ABOUTME: One subcommand per preview tab plus resolve, classify and export utilities

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Browse the design-token catalog from the terminal
#[derive(Debug, Parser)]
#[command(name = "tokenbook")]
#[command(version, about)]
pub struct Cli {
    /// Configuration file (default: <config dir>/tokenbook/tokenbook.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Token catalog in TOML, replacing the built-in design system
    #[arg(short, long, global = true)]
    pub tokens: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Primitive color scales and the radius scale
    Primitives {
        /// Only show this group, e.g. "Brand"
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Semantic aliases and the shadow tokens
    Semantic {
        /// Only show this group, e.g. "Background"
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Semantic token to primitive to value chain
    Mapping {
        /// Case-insensitive search over token, primitive and group
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Typography utilities by role
    Typography,

    /// Print the value a semantic token resolves to
    Resolve {
        /// Semantic token, e.g. --bg-brand-solid
        #[arg(allow_hyphen_values = true)]
        token: String,
    },

    /// Classify a color literal as light or dark
    Classify {
        /// `#RRGGBB` or `rgba(r,g,b,a)`
        color: String,
    },

    /// Print the whole catalog in a machine-readable form
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Toml,
}
