//! Namespace-qualified sequence identifiers and aliases.
//!
//! Identifiers take the form `namespace:value` (e.g. `refseq:NM_152263.3`,
//! `ga4gh:SQ.ijXOSP3XSsuLWZhXQ7_TJ5JXu4RJO6VT`, `GRCh38:7`) or a bare value
//! (`NM_152263.3`). Nothing here changes case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known repository namespaces
pub mod namespace {
    pub const REFSEQ: &str = "refseq";
    pub const ENSEMBL: &str = "ensembl";
    pub const GA4GH: &str = "ga4gh";
    pub const MD5: &str = "MD5";
}

/// An identifier as supplied by a caller, split on its first `:`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceIdentifier {
    pub namespace: Option<String>,
    pub value: String,
}

impl SequenceIdentifier {
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((ns, value)) if !ns.is_empty() && !value.is_empty() => Self {
                namespace: Some(ns.to_string()),
                value: value.to_string(),
            },
            _ => Self {
                namespace: None,
                value: s.to_string(),
            },
        }
    }

    /// Whether `alias` names this identifier. A bare identifier matches an
    /// alias in any namespace; a qualified one needs the namespace to agree.
    pub fn matches(&self, alias: &Alias) -> bool {
        alias.alias == self.value
            && self
                .namespace
                .as_deref()
                .map_or(true, |ns| ns == alias.namespace)
    }
}

impl fmt::Display for SequenceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{ns}:{}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// One row of the repository's alias index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alias {
    pub namespace: String,
    pub alias: String,
}

impl Alias {
    pub fn new(namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: alias.into(),
        }
    }

    /// Parse a `namespace:alias` string; `None` when the namespace is missing
    pub fn parse_qualified(s: &str) -> Option<Self> {
        let (ns, alias) = s.split_once(':')?;
        if ns.is_empty() || alias.is_empty() {
            return None;
        }
        Some(Self::new(ns, alias))
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified_identifier() {
        let id = SequenceIdentifier::parse("refseq:NM_152263.3");
        assert_eq!(id.namespace.as_deref(), Some("refseq"));
        assert_eq!(id.value, "NM_152263.3");
        assert_eq!(id.to_string(), "refseq:NM_152263.3");
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let id = SequenceIdentifier::parse("gnl:ID:abc");
        assert_eq!(id.namespace.as_deref(), Some("gnl"));
        assert_eq!(id.value, "ID:abc");
    }

    #[test]
    fn test_parse_bare_identifier() {
        let id = SequenceIdentifier::parse("ugqOFdlaed2cnxrGa7zngGMrLlY");
        assert!(id.namespace.is_none());
        assert_eq!(id.value, "ugqOFdlaed2cnxrGa7zngGMrLlY");

        // Degenerate colons are kept as part of the value
        assert!(SequenceIdentifier::parse(":abc").namespace.is_none());
        assert!(SequenceIdentifier::parse("abc:").namespace.is_none());
    }

    #[test]
    fn test_matches_respects_namespace() {
        let alias = Alias::new("refseq", "NC_000002.12");
        assert!(SequenceIdentifier::parse("NC_000002.12").matches(&alias));
        assert!(SequenceIdentifier::parse("refseq:NC_000002.12").matches(&alias));
        assert!(!SequenceIdentifier::parse("ensembl:NC_000002.12").matches(&alias));
        // Case is significant
        assert!(!SequenceIdentifier::parse("nc_000002.12").matches(&alias));
    }

    #[test]
    fn test_alias_display_and_parse() {
        let alias = Alias::parse_qualified("GRCh38:chr2").unwrap();
        assert_eq!(alias.namespace, "GRCh38");
        assert_eq!(alias.alias, "chr2");
        assert_eq!(alias.to_string(), "GRCh38:chr2");
        assert!(Alias::parse_qualified("NC_000002.12").is_none());
    }
}
