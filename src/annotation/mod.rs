//! CDS annotation table loaded from a GFF3 file.
//!
//! The table is built once and is read-only afterwards, so it can be shared
//! between threads without locking.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_resolver::annotation::AnnotationTable;
//! use std::path::Path;
//!
//! let table = AnnotationTable::load(Path::new("MANE.GRCh38.v1.3.refseq_genomic.gff")).unwrap();
//! for record in table.records_on("7") {
//!     println!("{}\t{}-{}", record.gene, record.cds_start, record.cds_stop);
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::gff::DEFAULT_HEADER_LINES;
use crate::parsing::ParseError;

pub mod table;

pub use table::AnnotationTable;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Failed to load annotation table {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to parse annotation table: {0}")]
    Parse(#[from] ParseError),
}

/// Options controlling how an annotation file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Lines skipped unconditionally at the top of the file
    pub header_lines: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}
