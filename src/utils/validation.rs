//! Centralized validation and helper functions.

/// Maximum number of records (sequences, aliases, or annotation rows) read
/// from a single file (DOS protection)
pub const MAX_RECORDS: usize = 5_000_000;

/// Number of residues per line when writing FASTA
pub const FASTA_LINE_WIDTH: usize = 60;

/// MD5 of a sequence, computed over its uppercase form (standard convention)
///
/// # Examples
///
/// ```
/// use seq_resolver::utils::validation::sequence_md5;
///
/// assert_eq!(sequence_md5(b"ACGT"), sequence_md5(b"acgt"));
/// assert_eq!(sequence_md5(b"ACGT").len(), 32);
/// ```
#[must_use]
pub fn sequence_md5(sequence: &[u8]) -> String {
    let uppercase: Vec<u8> = sequence.iter().map(u8::to_ascii_uppercase).collect();
    format!("{:x}", md5::compute(&uppercase))
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}
