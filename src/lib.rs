//! # seq-resolver
//!
//! A library for resolving sequence identifiers, fetching reference sequence
//! slices, and finding the CDS features that overlap a genomic interval.
//!
//! Human sequence data is addressed through many equivalent identifiers: a
//! RefSeq accession, an Ensembl transcript id, a GA4GH digest, or an
//! assembly-qualified chromosome such as `GRCh38:7`. Positions come in two
//! conventions as well. `seq-resolver` puts one uniform, error-reporting
//! surface over a sequence repository and a CDS annotation table.
//!
//! ## Features
//!
//! - **Coordinate modes**: Residue (1-based inclusive) and inter-residue (0-based half-open)
//! - **Identifier translation**: Every alias of a sequence, filtered by namespace
//! - **Chromosome mapping**: Chromosome names to RefSeq accessions and back
//! - **FASTA export**: Pipe-delimited alias headers, 60-column residues
//! - **Feature overlap**: CDS rows clipped to a query interval, grouped by gene
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_resolver::{AnnotationTable, CoordinateMode, FeatureOverlapResolver, SequenceAccess, SequenceStore};
//! use std::path::Path;
//!
//! let store = SequenceStore::from_fasta(Path::new("genome.fa"), Some(Path::new("aliases.tsv")), Some("refseq")).unwrap();
//! let access = SequenceAccess::new(store);
//!
//! let slice = access
//!     .get_reference_sequence("NM_002529.3", Some(1), Some(10), CoordinateMode::Residue)
//!     .unwrap();
//! println!("{slice}");
//!
//! let table = AnnotationTable::load(Path::new("mane.gff")).unwrap();
//! let resolver = FeatureOverlapResolver::new(&access, table);
//! let overlap = resolver
//!     .get_overlap(140_753_336, 140_753_336, Some("7"), None, CoordinateMode::Residue)
//!     .unwrap();
//! println!("{overlap:?}");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Coordinate modes, assemblies, chromosomes, identifiers, CDS records
//! - [`repository`]: The sequence-repository trait and a local store
//! - [`access`]: Uniform sequence access and FASTA export
//! - [`annotation`]: CDS annotation table
//! - [`overlap`]: Feature overlap queries
//! - [`parsing`]: Parsers for GFF3, FASTA, and alias tables
//! - [`cli`]: Command-line interface implementation

pub mod access;
pub mod annotation;
pub mod cli;
pub mod core;
pub mod overlap;
pub mod parsing;
pub mod repository;
pub mod utils;

// Re-export commonly used types for convenience
pub use access::{AccessError, ExportError, SequenceAccess};
pub use annotation::{AnnotationError, AnnotationTable, LoadOptions};
pub use core::chromosome::Chromosome;
pub use core::feature::CdsRecord;
pub use core::types::*;
pub use overlap::{CdsOverlap, FeatureOverlap, FeatureOverlapResolver, OverlapError};
pub use repository::{RepositoryError, SequenceRepository, SequenceStore};
