//! Genes and CDS segments overlapping a genomic interval.
//!
//! The query interval is normalized to the annotation table's 1-based
//! inclusive convention before filtering:
//!
//! | Mode | Input | Normalized |
//! |------|-------|------------|
//! | residue | `[s, e]` | `[s, e]` |
//! | inter-residue, `s != e` | `[s, e)` | `[s + 1, e]` |
//! | inter-residue, `s == e` | `[s, s)` | `[s, s + 1]` |
//!
//! The zero-width case is anchored at its right edge, so `[1000, 1000)` and
//! `[1000, 1001)` reach different rows.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_resolver::access::SequenceAccess;
//! use seq_resolver::annotation::AnnotationTable;
//! use seq_resolver::core::types::CoordinateMode;
//! use seq_resolver::overlap::FeatureOverlapResolver;
//! use seq_resolver::repository::SequenceStore;
//! use std::path::Path;
//!
//! let store = SequenceStore::load_from_file(Path::new("seqrepo.json")).unwrap();
//! let access = SequenceAccess::new(store);
//! let table = AnnotationTable::load(Path::new("mane.gff")).unwrap();
//! let resolver = FeatureOverlapResolver::new(&access, table);
//!
//! let overlap = resolver
//!     .get_overlap(140_753_336, 140_753_336, None, Some("NC_000007.14"), CoordinateMode::Residue)
//!     .unwrap();
//! if let Some(genes) = overlap {
//!     for (gene, rows) in genes {
//!         println!("{gene}: {} CDS rows", rows.len());
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::access::AccessError;
use crate::core::types::{Assembly, ErrorKind};

pub mod resolver;

pub use resolver::FeatureOverlapResolver;

/// One CDS row clipped to the query interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdsOverlap {
    pub info_name: String,
    pub cds_start: u64,
    pub cds_stop: u64,
    pub overlap_start: u64,
    pub overlap_stop: u64,
}

/// Overlapping rows grouped by gene symbol
pub type FeatureOverlap = BTreeMap<String, Vec<CdsOverlap>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    #[error("`chromosome` must be 1, ..., 22, X, or Y (got {0})")]
    InvalidChromosome(String),

    #[error("Must provide either `chromosome` or `identifier`")]
    MissingLocation,

    #[error("start ({start}) cannot be greater than end ({end})")]
    InvalidRange { start: u64, end: u64 },

    #[error("Unable to find {assembly} aliases for: {identifier}")]
    NoAssemblyAliases { assembly: Assembly, identifier: String },

    #[error("Unable to find {assembly} chromosome for: {identifier}")]
    NoAssemblyChromosome { assembly: Assembly, identifier: String },

    #[error(transparent)]
    Lookup(#[from] AccessError),
}

impl OverlapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChromosome(_) | Self::MissingLocation | Self::InvalidRange { .. } => {
                ErrorKind::Validation
            }
            Self::NoAssemblyAliases { .. } | Self::NoAssemblyChromosome { .. } => {
                ErrorKind::LookupMiss
            }
            Self::Lookup(e) => e.kind(),
        }
    }
}
