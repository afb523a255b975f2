use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::identifier::{namespace, Alias, SequenceIdentifier};
use crate::parsing::aliases::parse_alias_file;
use crate::parsing::fasta::read_fasta_file;
use crate::parsing::ParseError;
use crate::repository::{RepositoryError, SequenceRepository};
use crate::utils::validation::sequence_md5;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read sequence store: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse sequence store: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to parse store input: {0}")]
    InputError(#[from] ParseError),

    #[error("Alias table references unknown sequence '{0}'")]
    UnknownSequence(String),

    #[error("Sequence id '{0}' is used by two different sequences")]
    ConflictingSeqId(String),
}

/// Store version for compatibility checking
pub const STORE_VERSION: &str = "1.0.0";

/// Serializable store format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    pub version: String,
    pub created_at: String,
    pub sequences: Vec<SequenceRecord>,
}

/// One stored sequence with every alias that names it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Internal id, unique per distinct sequence
    pub seq_id: String,
    pub sequence: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Alias>,
}

impl SequenceRecord {
    pub fn new(seq_id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            seq_id: seq_id.into(),
            sequence: sequence.into(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, namespace: &str, alias: &str) -> Self {
        self.push_alias(Alias::new(namespace, alias));
        self
    }

    /// Add an alias unless it is already present
    pub fn push_alias(&mut self, alias: Alias) {
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
    }

    pub fn len(&self) -> u64 {
        self.sequence.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// A local sequence repository with alias indexes
#[derive(Debug, Default)]
pub struct SequenceStore {
    /// All stored sequences
    pub records: Vec<SequenceRecord>,

    /// Index: seq_id -> index in records vec
    seq_id_to_index: HashMap<String, usize>,

    /// Index: bare alias value -> indices of records carrying it in any namespace
    alias_to_records: HashMap<String, Vec<usize>>,
}

impl SequenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadError` if the file cannot be read, or
    /// `StoreError::ParseError` if the JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a store from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ParseError` if the JSON is invalid, or
    /// `StoreError::ConflictingSeqId` if one id names two different sequences.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let data: StoreData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != STORE_VERSION {
            warn!(
                expected = STORE_VERSION,
                found = %data.version,
                "Sequence store version mismatch"
            );
        }

        let mut store = Self::new();
        for record in data.sequences {
            store.add_record(record)?;
        }

        info!(sequences = store.len(), "Loaded sequence store");
        Ok(store)
    }

    /// Build a store from a FASTA file and an optional alias table.
    ///
    /// Every record is keyed by the MD5 of its uppercase sequence and gets an
    /// `MD5:<hex>` alias. When `name_namespace` is given, the FASTA record name
    /// is also registered as an alias in that namespace. Records with identical
    /// sequences collapse into one entry carrying the union of their aliases.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InputError` if either file cannot be parsed, or
    /// `StoreError::UnknownSequence` if the alias table names a record that is
    /// not in the FASTA file.
    pub fn from_fasta(
        fasta_path: &Path,
        alias_path: Option<&Path>,
        name_namespace: Option<&str>,
    ) -> Result<Self, StoreError> {
        let sequences = read_fasta_file(fasta_path)?;
        let mut store = Self::new();
        let mut name_to_seq_id: HashMap<String, String> = HashMap::new();

        for fasta in sequences {
            let seq_id = sequence_md5(fasta.sequence.as_bytes());
            let mut record = SequenceRecord::new(&seq_id, fasta.sequence)
                .with_alias(namespace::MD5, &seq_id);
            if let Some(ns) = name_namespace {
                record.push_alias(Alias::new(ns, &fasta.name));
            }
            store.add_record(record)?;
            name_to_seq_id.insert(fasta.name, seq_id);
        }

        if let Some(path) = alias_path {
            for row in parse_alias_file(path)? {
                let seq_id = name_to_seq_id
                    .get(&row.sequence_name)
                    .ok_or_else(|| StoreError::UnknownSequence(row.sequence_name.clone()))?;
                store.add_alias(seq_id, row.alias);
            }
        }

        info!(
            sequences = store.len(),
            path = %fasta_path.display(),
            "Built sequence store from FASTA"
        );
        Ok(store)
    }

    /// Add a sequence record, merging aliases into an existing record with the
    /// same id and sequence. Residues are compared case-insensitively, matching
    /// the uppercase digest used for FASTA-derived ids, and the first record's
    /// residues are kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConflictingSeqId` if the id is already used by a
    /// different sequence.
    pub fn add_record(&mut self, record: SequenceRecord) -> Result<(), StoreError> {
        if let Some(&index) = self.seq_id_to_index.get(&record.seq_id) {
            if !self.records[index]
                .sequence
                .eq_ignore_ascii_case(&record.sequence)
            {
                return Err(StoreError::ConflictingSeqId(record.seq_id));
            }
            for alias in record.aliases {
                self.add_alias_at(index, alias);
            }
            return Ok(());
        }

        let index = self.records.len();
        self.seq_id_to_index.insert(record.seq_id.clone(), index);
        for alias in &record.aliases {
            self.index_alias(index, &alias.alias);
        }
        self.records.push(record);
        Ok(())
    }

    /// Attach an alias to an existing record. Unknown ids are ignored.
    pub fn add_alias(&mut self, seq_id: &str, alias: Alias) {
        if let Some(&index) = self.seq_id_to_index.get(seq_id) {
            self.add_alias_at(index, alias);
        }
    }

    fn add_alias_at(&mut self, index: usize, alias: Alias) {
        if self.records[index].aliases.contains(&alias) {
            return;
        }
        self.index_alias(index, &alias.alias);
        self.records[index].aliases.push(alias);
    }

    fn index_alias(&mut self, index: usize, alias: &str) {
        let indices = self.alias_to_records.entry(alias.to_string()).or_default();
        if !indices.contains(&index) {
            indices.push(index);
        }
    }

    /// Get a record by its internal id
    pub fn get(&self, seq_id: &str) -> Option<&SequenceRecord> {
        self.seq_id_to_index
            .get(seq_id)
            .map(|&idx| &self.records[idx])
    }

    /// Resolve a possibly namespace-qualified identifier to exactly one record
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when nothing matches, or
    /// `RepositoryError::Ambiguous` when several distinct sequences match.
    pub fn resolve(&self, identifier: &str) -> Result<&SequenceRecord, RepositoryError> {
        let parsed = SequenceIdentifier::parse(identifier);
        let matches: Vec<usize> = self
            .alias_to_records
            .get(&parsed.value)
            .map(|indices| {
                indices
                    .iter()
                    .copied()
                    .filter(|&idx| self.records[idx].aliases.iter().any(|a| parsed.matches(a)))
                    .collect()
            })
            .unwrap_or_default();

        self.single(identifier, &matches)
    }

    /// Resolve a raw alias string (no namespace parsing) to exactly one record
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` or `RepositoryError::Ambiguous`.
    pub fn resolve_alias(&self, alias: &str) -> Result<&SequenceRecord, RepositoryError> {
        let matches = self.alias_to_records.get(alias).cloned().unwrap_or_default();
        self.single(alias, &matches)
    }

    fn single(&self, identifier: &str, matches: &[usize]) -> Result<&SequenceRecord, RepositoryError> {
        match matches {
            [] => Err(RepositoryError::NotFound(identifier.to_string())),
            [idx] => Ok(&self.records[*idx]),
            _ => Err(RepositoryError::Ambiguous {
                identifier: identifier.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Export store to JSON
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let data = StoreData {
            version: STORE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            sequences: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of distinct sequences in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SequenceRepository for SequenceStore {
    fn fetch(
        &self,
        identifier: &str,
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<String, RepositoryError> {
        let record = self.resolve(identifier)?;
        let length = record.len();
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(length);

        if end > length {
            return Err(RepositoryError::EndOutOfRange { end, length });
        }
        if start > length {
            return Err(RepositoryError::StartOutOfRange { start, length });
        }
        if start > end {
            return Err(RepositoryError::InvalidCoordinates { start, end });
        }

        // Both bounds are <= length, which fits in usize
        #[allow(clippy::cast_possible_truncation)]
        let range = start as usize..end as usize;
        record
            .sequence
            .get(range)
            .map(str::to_string)
            .ok_or(RepositoryError::InvalidCoordinates { start, end })
    }

    fn translate_identifier(
        &self,
        identifier: &str,
        target_namespaces: Option<&[&str]>,
    ) -> Result<Vec<String>, RepositoryError> {
        let record = self.resolve(identifier)?;
        Ok(qualified_aliases(record, target_namespaces))
    }

    fn translate_alias(&self, alias: &str) -> Result<Vec<String>, RepositoryError> {
        let record = self.resolve_alias(alias)?;
        Ok(qualified_aliases(record, None))
    }
}

fn qualified_aliases(record: &SequenceRecord, target_namespaces: Option<&[&str]>) -> Vec<String> {
    record
        .aliases
        .iter()
        .filter(|alias| {
            target_namespaces.map_or(true, |namespaces| {
                namespaces.contains(&alias.namespace.as_str())
            })
        })
        .map(ToString::to_string)
        .collect()
}
