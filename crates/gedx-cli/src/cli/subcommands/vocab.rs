use clap::{Subcommand, ValueEnum};

/// Registered vocabularies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Vocabulary {
    ChangeOperation,
    ChangeObjectType,
    ChangeObjectModifier,
}

/// Vocabulary commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VocabCommands {
    /// List every variant with its URI.
    List { vocabulary: Vocabulary },
    /// Resolve a URI to a variant, or report it as custom.
    Decode { vocabulary: Vocabulary, uri: String },
}
