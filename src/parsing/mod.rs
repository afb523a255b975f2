//! Parsers for the files that back the engine.
//!
//! This module provides parsers for:
//!
//! - **GFF3 annotation files**: CDS rows for the annotation table
//! - **FASTA files**: Sequences for a local sequence store
//! - **Alias tables**: Namespace-qualified aliases for those sequences
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_resolver::parsing::gff::{parse_cds_file, DEFAULT_HEADER_LINES};
//! use std::path::Path;
//!
//! let records = parse_cds_file(Path::new("MANE.GRCh38.v1.3.refseq_genomic.gff.gz"), DEFAULT_HEADER_LINES).unwrap();
//! println!("{} CDS rows", records.len());
//! ```
//!
//! ## GFF columns consumed
//!
//! | Index | Column | Use |
//! |-------|--------|-----|
//! | 0 | seqid | Chromosome (normalized) |
//! | 2 | type | Only `CDS` rows are kept |
//! | 3 | start | 1-based start |
//! | 4 | end | 1-based inclusive end |
//! | 8 | attributes | `Name=` and `gene=` |

use std::path::Path;

use thiserror::Error;

pub mod aliases;
pub mod fasta;
pub mod gff;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Line {line}: CDS record is missing the `{key}=` attribute")]
    MissingAttribute { line: usize, key: &'static str },

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed")]
    TooManyRecords(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}
