//! FASTA export of a single repository sequence.
//!
//! The definition line lists the sequence's `ensembl`, `refseq` and `ga4gh`
//! aliases joined by `|`, in that namespace order:
//!
//! ```text
//! >ensembl:ENST00000331728.9|refseq:NM_005569.4|ga4gh:SQ.7_mlQyDN-uWH0RlxTQFvFEv6ykd2D-xF
//! GTCTTCCCGCGCCTGAGGCGGCGGCGGCAGGAGCTGAGGGGAGTTGTAGGGAACTGAGGG
//! ...
//! ```
//!
//! A query that is not itself one of those aliases (a SEGUID or MD5 digest,
//! say) is prepended as `gnl|ID|<query>`. Residues are wrapped at 60 per line
//! and the last line has no trailing newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::access::{AccessError, SequenceAccess};
use crate::core::identifier::{namespace, Alias};
use crate::core::types::CoordinateMode;
use crate::repository::SequenceRepository;
use crate::utils::validation::FASTA_LINE_WIDTH;

/// Namespaces shown in the definition line, in display order
pub const HEADER_NAMESPACES: [&str; 3] = [namespace::ENSEMBL, namespace::REFSEQ, namespace::GA4GH];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Lookup(#[from] AccessError),

    #[error("Failed to write FASTA: {0}")]
    Io(#[from] std::io::Error),
}

impl<R: SequenceRepository> SequenceAccess<R> {
    /// Write the sequence named by `identifier` as a FASTA file at `destination`.
    ///
    /// The record is built in memory first, so nothing is created at
    /// `destination` when the lookup fails.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Lookup` if the identifier cannot be resolved, or
    /// `ExportError::Io` if the file cannot be written.
    pub fn get_fasta_file(&self, identifier: &str, destination: &Path) -> Result<(), ExportError> {
        let mut record = Vec::new();
        self.write_fasta(identifier, &mut record)?;

        let mut writer = BufWriter::new(File::create(destination)?);
        writer.write_all(&record)?;
        writer.flush()?;
        info!(identifier, path = %destination.display(), "Wrote FASTA");
        Ok(())
    }

    /// Write the FASTA record for `identifier` to any writer.
    ///
    /// # Errors
    ///
    /// See [`get_fasta_file`](Self::get_fasta_file).
    pub fn write_fasta<W: Write>(&self, identifier: &str, mut writer: W) -> Result<(), ExportError> {
        let sequence =
            self.get_reference_sequence(identifier, None, None, CoordinateMode::InterResidue)?;
        let aliases = self.translate_identifier(identifier, Some(&HEADER_NAMESPACES[..]))?;
        let header = fasta_header(identifier, &aliases);
        debug!(identifier, header = %header, "Exporting FASTA record");

        write!(writer, ">{header}")?;
        for line in sequence.as_bytes().chunks(FASTA_LINE_WIDTH) {
            writer.write_all(b"\n")?;
            writer.write_all(line)?;
        }
        Ok(())
    }
}

/// Build a definition line (without the leading `>`) from qualified aliases
pub fn fasta_header(identifier: &str, aliases: &[String]) -> String {
    let parsed: Vec<Alias> = aliases
        .iter()
        .filter_map(|a| Alias::parse_qualified(a))
        .collect();

    // Stable within a namespace, so repository order is kept
    let mut ordered: Vec<&Alias> = parsed
        .iter()
        .filter(|a| HEADER_NAMESPACES.contains(&a.namespace.as_str()))
        .collect();
    ordered.sort_by_key(|a| {
        HEADER_NAMESPACES
            .iter()
            .position(|ns| *ns == a.namespace)
            .unwrap_or(HEADER_NAMESPACES.len())
    });

    let listed = ordered
        .iter()
        .any(|a| a.alias == identifier || a.to_string() == identifier);

    let mut fields: Vec<String> = Vec::with_capacity(ordered.len() + 1);
    if !listed {
        fields.push(format!("gnl|ID|{identifier}"));
    }
    fields.extend(ordered.iter().map(ToString::to_string));
    fields.join("|")
}
