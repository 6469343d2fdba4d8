//! Enum-URI codec.
//!
//! Every vocabulary in the model (change operations, object types, object
//! modifiers) is a closed set of symbolic variants, each bound to a canonical
//! URI formed by appending the variant's local name to its namespace. The
//! [`uri_enum!`] macro declares such a vocabulary from a single table of rows
//! and implements [`UriEnum`] for it.
//!
//! Decoding never fails: a URI that is not registered becomes
//! [`Term::Custom`], which re-encodes to exactly the input string. Absent or
//! empty input decodes to `None`.
//!
//! ```
//! use gedx_core::codec::{Term, UriEnum};
//! use gedx_core::enums::ChangeOperation;
//!
//! assert_eq!(ChangeOperation::Create.uri(), "http://gedcomx.org/Create");
//!
//! let known = Term::<ChangeOperation>::decode("http://gedcomx.org/Create");
//! assert_eq!(known, Some(Term::Known(ChangeOperation::Create)));
//!
//! let custom = Term::<ChangeOperation>::decode("http://example.org/Unknown").unwrap();
//! assert!(custom.is_custom());
//! assert_eq!(custom.uri(), "http://example.org/Unknown");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;
use crate::uri::Uri;

/// Namespace literals usable inside `concat!`.
macro_rules! namespace {
    (gedcomx) => {
        "http://gedcomx.org/"
    };
    (familysearch) => {
        "http://familysearch.org/v1/"
    };
}
pub(crate) use namespace;

/// Namespace of the core GEDCOM X vocabularies.
pub const GEDCOMX_NAMESPACE: &str = namespace!(gedcomx);

/// Namespace of FamilySearch-specific vocabulary extensions.
pub const FAMILYSEARCH_NAMESPACE: &str = namespace!(familysearch);

/// One row of a vocabulary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T: 'static> {
    pub variant: T,
    pub local_name: &'static str,
    pub namespace: &'static str,
    /// `namespace` immediately followed by `local_name`.
    pub uri: &'static str,
}

/// A closed vocabulary whose variants map one-to-one onto canonical URIs.
pub trait UriEnum: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Short kebab-case name of the vocabulary, used in diagnostics.
    const VOCABULARY: &'static str;

    /// The registration table, in declaration order.
    const ENTRIES: &'static [Entry<Self>];

    /// Table row for this variant.
    fn entry(self) -> &'static Entry<Self>;

    /// Exact-match lookup of a registered URI.
    fn from_uri(uri: &str) -> Option<Self>;

    #[must_use]
    fn uri(self) -> &'static str {
        self.entry().uri
    }

    #[must_use]
    fn local_name(self) -> &'static str {
        self.entry().local_name
    }

    #[must_use]
    fn namespace(self) -> &'static str {
        self.entry().namespace
    }

    fn variants() -> impl Iterator<Item = Self> {
        Self::ENTRIES.iter().map(|entry| entry.variant)
    }
}

/// Inverse (URI → variant) lookup, built once per vocabulary.
#[derive(Debug)]
pub struct UriIndex<T: UriEnum> {
    by_uri: HashMap<&'static str, T>,
}

impl<T: UriEnum> UriIndex<T> {
    #[must_use]
    pub fn build() -> Self {
        let mut by_uri = HashMap::with_capacity(T::ENTRIES.len());
        for entry in T::ENTRIES {
            let previous = by_uri.insert(entry.uri, entry.variant);
            debug_assert!(
                previous.is_none(),
                "duplicate URI {} in vocabulary {}",
                entry.uri,
                T::VOCABULARY
            );
        }
        Self { by_uri }
    }

    #[must_use]
    pub fn lookup(&self, uri: &str) -> Option<T> {
        self.by_uri.get(uri).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_uri.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_uri.is_empty()
    }
}

/// Declare a vocabulary enum together with its URI table.
///
/// ```text
/// uri_enum! {
///     /// Doc comment.
///     pub enum ChangeOperation in "change-operation" {
///         Create => (gedcomx, "Create"),
///     }
/// }
/// ```
///
/// The namespace column names one of the `namespace!` shortcuts so the
/// canonical URI can be assembled with `concat!` at compile time.
macro_rules! uri_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $vocab:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($ns:ident, $local:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::codec::UriEnum for $name {
            const VOCABULARY: &'static str = $vocab;

            const ENTRIES: &'static [$crate::codec::Entry<Self>] = &[
                $(
                    $crate::codec::Entry {
                        variant: Self::$variant,
                        local_name: $local,
                        namespace: $crate::codec::namespace!($ns),
                        uri: concat!($crate::codec::namespace!($ns), $local),
                    },
                )+
            ];

            fn entry(self) -> &'static $crate::codec::Entry<Self> {
                &Self::ENTRIES[self as usize]
            }

            fn from_uri(uri: &str) -> Option<Self> {
                static INDEX: ::std::sync::OnceLock<$crate::codec::UriIndex<$name>> =
                    ::std::sync::OnceLock::new();
                INDEX.get_or_init($crate::codec::UriIndex::build).lookup(uri)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codec::UriEnum::uri(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::codec::UriEnum::uri(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::codec::deserialize_known(deserializer)
            }
        }

        impl ::schemars::JsonSchema for $name {
            fn schema_name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(stringify!($name))
            }

            fn json_schema(_generator: &mut ::schemars::SchemaGenerator) -> ::schemars::Schema {
                $crate::codec::known_schema::<Self>()
            }
        }
    };
}
pub(crate) use uri_enum;

/// A decoded vocabulary value: either a registered variant or a preserved
/// unknown URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term<T> {
    Known(T),
    Custom(Uri),
}

impl<T: UriEnum> Term<T> {
    /// Decode a URI. Empty input is "no value", not a custom term.
    #[must_use]
    pub fn decode(uri: &str) -> Option<Self> {
        if uri.is_empty() {
            return None;
        }
        let term = T::from_uri(uri).map_or_else(
            || {
                tracing::trace!(
                    vocabulary = T::VOCABULARY,
                    uri,
                    "unregistered URI kept as custom term"
                );
                Self::Custom(Uri::from(uri))
            },
            Self::Known,
        );
        Some(term)
    }

    /// Wire form of this term.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Known(variant) => variant.uri(),
            Self::Custom(uri) => uri.as_str(),
        }
    }

    #[must_use]
    pub fn encode(&self) -> Uri {
        Uri::from(self.uri())
    }

    #[must_use]
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(variant) => Some(*variant),
            Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl<T: UriEnum> From<T> for Term<T> {
    fn from(variant: T) -> Self {
        Self::Known(variant)
    }
}

impl<T: UriEnum> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl<T: UriEnum> Serialize for Term<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.uri())
    }
}

impl<'de, T: UriEnum> Deserialize<'de> for Term<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::decode(&raw).ok_or_else(|| serde::de::Error::custom("empty URI"))
    }
}

/// Decode an optional URI. `None` and `""` both yield `None`.
#[must_use]
pub fn decode<T: UriEnum>(uri: Option<&str>) -> Option<Term<T>> {
    uri.and_then(Term::decode)
}

#[must_use]
pub fn encode<T: UriEnum>(term: &Term<T>) -> Uri {
    term.encode()
}

/// Strict lookup for contexts that cannot carry a custom term.
///
/// # Errors
///
/// Returns `CoreError::UnknownTerm` when `uri` is not registered in `T`.
pub fn parse_known<T: UriEnum>(uri: &str) -> Result<T, CoreError> {
    T::from_uri(uri).ok_or_else(|| CoreError::UnknownTerm {
        vocabulary: T::VOCABULARY,
        uri: uri.to_string(),
    })
}

#[doc(hidden)]
pub fn deserialize_known<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: UriEnum,
{
    let raw = String::deserialize(deserializer)?;
    parse_known(&raw).map_err(serde::de::Error::custom)
}

#[doc(hidden)]
#[must_use]
pub fn known_schema<T: UriEnum>() -> schemars::Schema {
    let uris: Vec<&'static str> = T::ENTRIES.iter().map(|entry| entry.uri).collect();
    schemars::json_schema!({
        "type": "string",
        "enum": uris,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    uri_enum! {
        /// Small vocabulary local to these tests.
        enum Colour in "colour" {
            Red => (gedcomx, "Red"),
            Green => (familysearch, "Green"),
        }
    }

    #[test]
    fn canonical_uri_is_namespace_then_local_name() {
        assert_eq!(Colour::Red.uri(), "http://gedcomx.org/Red");
        assert_eq!(Colour::Green.uri(), "http://familysearch.org/v1/Green");
        for entry in Colour::ENTRIES {
            assert_eq!(entry.uri, format!("{}{}", entry.namespace, entry.local_name));
        }
    }

    #[test]
    fn entry_matches_declaration_order() {
        let variants: Vec<Colour> = Colour::variants().collect();
        assert_eq!(variants, vec![Colour::Red, Colour::Green]);
        assert_eq!(Colour::Green.local_name(), "Green");
        assert_eq!(Colour::Green.namespace(), FAMILYSEARCH_NAMESPACE);
    }

    #[test]
    fn index_covers_every_entry() {
        let index = UriIndex::<Colour>::build();
        assert_eq!(index.len(), Colour::ENTRIES.len());
        assert_eq!(index.lookup("http://gedcomx.org/Red"), Some(Colour::Red));
        assert_eq!(index.lookup("http://gedcomx.org/Blue"), None);
    }

    #[test]
    fn lookup_is_exact_not_prefix() {
        assert_eq!(Colour::from_uri("http://gedcomx.org/Re"), None);
        assert_eq!(Colour::from_uri("http://gedcomx.org/Red/"), None);
        assert_eq!(Colour::from_uri("HTTP://GEDCOMX.ORG/RED"), None);
        assert_eq!(Colour::from_uri("Red"), None);
    }

    #[test]
    fn absent_and_empty_decode_to_none() {
        assert_eq!(decode::<Colour>(None), None);
        assert_eq!(decode::<Colour>(Some("")), None);
    }

    #[test]
    fn unknown_uri_round_trips_verbatim() {
        let raw = "urn:local:not registered";
        let term = decode::<Colour>(Some(raw)).unwrap();
        assert_eq!(term, Term::Custom(Uri::from(raw)));
        assert_eq!(encode(&term), raw);
    }

    #[test]
    fn term_serde_uses_uri_string() {
        let term = Term::Known(Colour::Green);
        let json = serde_json::to_string(&term).unwrap();
        assert_eq!(json, "\"http://familysearch.org/v1/Green\"");
        let back: Term<Colour> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, term);

        let custom: Term<Colour> = serde_json::from_str("\"urn:x\"").unwrap();
        assert!(custom.is_custom());
        assert!(serde_json::from_str::<Term<Colour>>("\"\"").is_err());
    }

    #[test]
    fn known_variant_serde_is_strict() {
        let json = serde_json::to_string(&Colour::Red).unwrap();
        assert_eq!(json, "\"http://gedcomx.org/Red\"");
        assert_eq!(serde_json::from_str::<Colour>(&json).unwrap(), Colour::Red);
        assert!(serde_json::from_str::<Colour>("\"urn:x\"").is_err());
    }

    #[test]
    fn parse_known_reports_vocabulary() {
        let err = parse_known::<Colour>("urn:x").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownTerm { vocabulary: "colour", .. }
        ));
    }

    #[test]
    fn known_schema_lists_every_uri() {
        let schema = serde_json::to_value(known_schema::<Colour>()).unwrap();
        assert_eq!(
            schema["enum"],
            serde_json::json!(["http://gedcomx.org/Red", "http://familysearch.org/v1/Green"])
        );
    }
}
