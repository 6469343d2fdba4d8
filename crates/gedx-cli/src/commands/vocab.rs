use anyhow::bail;
use gedx_core::codec::{Term, UriEnum};
use gedx_core::enums::{ChangeObjectModifier, ChangeObjectType, ChangeOperation};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{VocabCommands, Vocabulary};
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    pub variant: String,
    pub local_name: &'static str,
    pub namespace: &'static str,
    pub uri: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub vocabulary: &'static str,
    pub uri: String,
    pub known: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Handle `gedx vocab`.
pub fn handle(action: &VocabCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        VocabCommands::List { vocabulary } => output(&list(*vocabulary), flags.format),
        VocabCommands::Decode { vocabulary, uri } => {
            output(&decode(*vocabulary, uri)?, flags.format)
        }
    }
}

#[must_use]
pub fn list(vocabulary: Vocabulary) -> Vec<VocabEntry> {
    match vocabulary {
        Vocabulary::ChangeOperation => entries::<ChangeOperation>(),
        Vocabulary::ChangeObjectType => entries::<ChangeObjectType>(),
        Vocabulary::ChangeObjectModifier => entries::<ChangeObjectModifier>(),
    }
}

pub fn decode(vocabulary: Vocabulary, uri: &str) -> anyhow::Result<Decoded> {
    match vocabulary {
        Vocabulary::ChangeOperation => decode_in::<ChangeOperation>(uri),
        Vocabulary::ChangeObjectType => decode_in::<ChangeObjectType>(uri),
        Vocabulary::ChangeObjectModifier => decode_in::<ChangeObjectModifier>(uri),
    }
}

fn entries<T: UriEnum>() -> Vec<VocabEntry> {
    T::ENTRIES
        .iter()
        .map(|entry| VocabEntry {
            variant: format!("{:?}", entry.variant),
            local_name: entry.local_name,
            namespace: entry.namespace,
            uri: entry.uri,
        })
        .collect()
}

fn decode_in<T: UriEnum>(uri: &str) -> anyhow::Result<Decoded> {
    let Some(term) = Term::<T>::decode(uri) else {
        bail!("an empty URI does not decode to a {} term", T::VOCABULARY);
    };
    Ok(Decoded {
        vocabulary: T::VOCABULARY,
        uri: term.uri().to_string(),
        known: !term.is_custom(),
        variant: term.known().map(|variant| format!("{variant:?}")),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn list_follows_declaration_order() {
        let ops = list(Vocabulary::ChangeOperation);
        assert_eq!(ops.len(), ChangeOperation::ENTRIES.len());
        assert_eq!(ops[0].variant, "Create");
        assert_eq!(ops[0].uri, "http://gedcomx.org/Create");
    }

    #[test]
    fn modifier_list_spans_namespaces() {
        let modifiers = list(Vocabulary::ChangeObjectModifier);
        assert!(
            modifiers
                .iter()
                .any(|entry| entry.namespace == gedx_core::codec::FAMILYSEARCH_NAMESPACE)
        );
    }

    #[test]
    fn decode_known_and_custom() {
        let known = decode(Vocabulary::ChangeObjectType, "http://gedcomx.org/Person").unwrap();
        assert_eq!(
            known,
            Decoded {
                vocabulary: "change-object-type",
                uri: "http://gedcomx.org/Person".into(),
                known: true,
                variant: Some("Person".into()),
            }
        );

        let custom = decode(Vocabulary::ChangeOperation, "http://example.org/Unknown").unwrap();
        assert!(!custom.known);
        assert_eq!(custom.variant, None);
        assert_eq!(custom.uri, "http://example.org/Unknown");
    }

    #[test]
    fn decode_empty_is_an_error() {
        assert!(decode(Vocabulary::ChangeOperation, "").is_err());
    }
}
