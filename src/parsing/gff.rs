//! Parser for CDS rows of GFF3 annotation files (e.g. MANE RefSeq GFF).
//!
//! Supports both uncompressed and gzip/bgzip compressed files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::core::feature::{normalize_chromosome_name, CdsRecord, CDS_FEATURE_TYPE};
use crate::parsing::{is_gzipped, ParseError};
use crate::utils::validation::check_record_limit;

/// Number of leading non-data lines in a MANE GFF release
pub const DEFAULT_HEADER_LINES: usize = 9;

const GFF_COLUMNS: usize = 9;

/// Parse the CDS rows of a GFF3 file, skipping its first `header_lines` lines.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// for short rows or bad coordinates, `ParseError::MissingAttribute` when a CDS row
/// lacks `Name=` or `gene=`, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_cds_file(path: &Path, header_lines: usize) -> Result<Vec<CdsRecord>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        parse_cds_reader(BufReader::new(MultiGzDecoder::new(file)), header_lines)
    } else {
        parse_cds_reader(BufReader::new(file), header_lines)
    }
}

/// Parse CDS rows from GFF3 text
///
/// # Errors
///
/// See [`parse_cds_file`].
pub fn parse_cds_text(text: &str, header_lines: usize) -> Result<Vec<CdsRecord>, ParseError> {
    parse_cds_reader(text.as_bytes(), header_lines)
}

/// Parse CDS rows from any buffered reader
///
/// # Errors
///
/// See [`parse_cds_file`].
pub fn parse_cds_reader<R: BufRead>(
    reader: R,
    header_lines: usize,
) -> Result<Vec<CdsRecord>, ParseError> {
    let mut records = Vec::new();
    let mut skipped_features = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i < header_lines {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < GFF_COLUMNS {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected {GFF_COLUMNS}",
                fields.len()
            )));
        }

        if fields[2] != CDS_FEATURE_TYPE {
            skipped_features += 1;
            continue;
        }

        let cds_start = parse_position(fields[3], line_num)?;
        let cds_stop = parse_position(fields[4], line_num)?;
        if cds_start > cds_stop {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num}: start ({cds_start}) is greater than end ({cds_stop})"
            )));
        }

        let attributes = fields[8];
        let info_name = attribute_value(attributes, "Name").ok_or(ParseError::MissingAttribute {
            line: line_num,
            key: "Name",
        })?;
        let gene = attribute_value(attributes, "gene").ok_or(ParseError::MissingAttribute {
            line: line_num,
            key: "gene",
        })?;

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        records.push(CdsRecord::new(
            normalize_chromosome_name(fields[0]),
            cds_start,
            cds_stop,
            info_name,
            gene,
        ));
    }

    debug!(
        cds = records.len(),
        other = skipped_features,
        "Parsed GFF feature rows"
    );

    Ok(records)
}

fn parse_position(field: &str, line_num: usize) -> Result<u64, ParseError> {
    field.trim().parse().map_err(|_| {
        ParseError::InvalidFormat(format!("Invalid position on line {line_num}: '{field}'"))
    })
}

/// Value of the first `key=value` token in a `;`-delimited attribute column
fn attribute_value<'a>(attributes: &'a str, key: &str) -> Option<&'a str> {
    attributes
        .split(';')
        .filter_map(|token| token.trim().split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}
