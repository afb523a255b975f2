//! Parser for alias tables that attach namespace-qualified aliases to FASTA records.
//!
//! Each data line is either
//! `sequence_name<TAB>namespace<TAB>alias` or `sequence_name<TAB>namespace:alias`.
//! Blank lines and `#` comments are ignored, and an optional header line
//! starting with `sequence_name` or `name` is skipped.

use std::path::Path;

use crate::core::identifier::Alias;
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// One alias attached to a named FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRow {
    pub sequence_name: String,
    pub alias: Alias,
}

/// Parse an alias table file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_alias_file(path: &Path) -> Result<Vec<AliasRow>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_alias_text(&content)
}

/// Parse alias table text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for lines with too few fields or an
/// unqualified two-column alias, or `ParseError::TooManyRecords` if the limit
/// is exceeded.
pub fn parse_alias_text(text: &str) -> Result<Vec<AliasRow>, ParseError> {
    let mut rows = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
            if first == "sequence_name" || first == "name" {
                continue;
            }
        }

        let line_num = i + 1;

        let alias = match fields.as_slice() {
            [_, namespace, alias, ..] if !namespace.is_empty() && !alias.is_empty() => {
                Alias::new(*namespace, *alias)
            }
            [_, qualified] => Alias::parse_qualified(qualified).ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "Alias on line {line_num} must be namespace-qualified: '{qualified}'"
                ))
            })?,
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {line_num} must have a sequence name, namespace and alias"
                )))
            }
        };

        if check_record_limit(rows.len()).is_some() {
            return Err(ParseError::TooManyRecords(rows.len()));
        }

        rows.push(AliasRow {
            sequence_name: fields[0].to_string(),
            alias,
        });
    }

    Ok(rows)
}
