use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use crate::cli::subcommands::{SchemaCommands, VocabCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Convert a document between JSON and XML.
    Convert(ConvertArgs),
    /// Check a document against its schema and the configured rules.
    Validate(ValidateArgs),
    /// Inspect the JSON Schemas of the record types.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Inspect the URI vocabularies.
    Vocab {
        #[command(subcommand)]
        action: VocabCommands,
    },
}

/// Serialization of a document on disk.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl DocumentFormat {
    /// `.xml` files are XML; everything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Self::Xml,
            _ => Self::Json,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Json => Self::Xml,
            Self::Xml => Self::Json,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ConvertArgs {
    /// Input document (`.xml` for XML, anything else for JSON).
    pub input: PathBuf,

    /// Target format (defaults to the opposite of the input).
    #[arg(long)]
    pub to: Option<DocumentFormat>,

    /// Write here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Input document (`.xml` for XML, anything else for JSON).
    pub input: PathBuf,
}
