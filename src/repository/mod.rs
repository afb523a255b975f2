//! The sequence-repository capability consumed by [`SequenceAccess`].
//!
//! A repository stores sequences keyed by an internal id, addressable through
//! any of their namespace-qualified aliases. [`SequenceRepository`] is the
//! narrow surface the engine needs; [`SequenceStore`] is a local, file-backed
//! implementation suitable for fixtures and small standalone deployments.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_resolver::repository::{SequenceRepository, SequenceStore};
//! use std::path::Path;
//!
//! let store = SequenceStore::load_from_file(Path::new("seqrepo.json")).unwrap();
//! let aliases = store.translate_identifier("NC_000007.14", Some(&["GRCh38"][..])).unwrap();
//! ```
//!
//! [`SequenceAccess`]: crate::access::SequenceAccess
//! [`SequenceStore`]: store::SequenceStore

use thiserror::Error;

pub mod store;

pub use store::SequenceStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{identifier} matches {count} distinct sequences")]
    Ambiguous { identifier: String, count: usize },

    #[error("start out of range ({start} > {length})")]
    StartOutOfRange { start: u64, length: u64 },

    #[error("stop out of range ({end} > {length})")]
    EndOutOfRange { end: u64, length: u64 },

    #[error("invalid coordinates: start ({start}) > end ({end})")]
    InvalidCoordinates { start: u64, end: u64 },

    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Capabilities of an external sequence repository
///
/// Coordinates are always inter-residue (0-based, half-open). Implementations
/// must report failures through [`RepositoryError`] and never panic on a miss.
pub trait SequenceRepository {
    /// Fetch `[start, end)` of the sequence named by `identifier`.
    /// `None` bounds default to the sequence origin and end.
    ///
    /// # Errors
    ///
    /// `NotFound`/`Ambiguous` when the identifier does not name exactly one
    /// sequence, `StartOutOfRange`/`EndOutOfRange`/`InvalidCoordinates` for bad
    /// bounds, `Unavailable` for transport failures.
    fn fetch(
        &self,
        identifier: &str,
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<String, RepositoryError>;

    /// Every `namespace:alias` of the sequence named by `identifier`, which is
    /// parsed as `namespace:value` (namespace optional). Restricted to
    /// `target_namespaces` when given.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Ambiguous` when the identifier does not name exactly one
    /// sequence, `Unavailable` for transport failures.
    fn translate_identifier(
        &self,
        identifier: &str,
        target_namespaces: Option<&[&str]>,
    ) -> Result<Vec<String>, RepositoryError>;

    /// Every `namespace:alias` of the sequence whose alias index contains
    /// `alias` verbatim. No namespace parsing happens here, so an
    /// assembly-qualified string like `GRCh38:2` does not resolve.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Ambiguous` when the alias does not name exactly one
    /// sequence, `Unavailable` for transport failures.
    fn translate_alias(&self, alias: &str) -> Result<Vec<String>, RepositoryError>;
}

impl<R: SequenceRepository + ?Sized> SequenceRepository for &R {
    fn fetch(
        &self,
        identifier: &str,
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<String, RepositoryError> {
        (**self).fetch(identifier, start, end)
    }

    fn translate_identifier(
        &self,
        identifier: &str,
        target_namespaces: Option<&[&str]>,
    ) -> Result<Vec<String>, RepositoryError> {
        (**self).translate_identifier(identifier, target_namespaces)
    }

    fn translate_alias(&self, alias: &str) -> Result<Vec<String>, RepositoryError> {
        (**self).translate_alias(alias)
    }
}
