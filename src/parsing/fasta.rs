//! Reader for FASTA files using noodles.
//!
//! Loads whole sequences into memory for a local sequence store.
//! Files ending in `.gz` or `.bgz` are decompressed on the fly.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::parsing::{is_gzipped, ParseError};
use crate::utils::validation::check_record_limit;

/// A sequence read from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSequence {
    /// Record name (first word of the definition line)
    pub name: String,
    /// Residues exactly as stored in the file (case preserved)
    pub sequence: String,
}

/// Read every sequence of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no sequences are found, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn read_fasta_file(path: &Path) -> Result<Vec<FastaSequence>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        read_fasta(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        read_fasta(BufReader::new(file))
    }
}

/// Read every sequence from a buffered FASTA source
///
/// # Errors
///
/// See [`read_fasta_file`].
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaSequence>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut sequences = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if check_record_limit(sequences.len()).is_some() {
            return Err(ParseError::TooManyRecords(sequences.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        sequences.push(FastaSequence { name, sequence });
    }

    if sequences.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(sequences)
}
