use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::info;

use crate::annotation::{AnnotationError, LoadOptions};
use crate::core::feature::CdsRecord;
use crate::parsing::gff::{parse_cds_file, parse_cds_text};

/// In-memory CDS rows with a per-chromosome index
#[derive(Debug, Default, Clone)]
pub struct AnnotationTable {
    records: Vec<CdsRecord>,

    /// Index: normalized chromosome -> indices in records vec
    chromosome_to_records: HashMap<String, Vec<usize>>,
}

impl AnnotationTable {
    /// Load a GFF3 file with the default header size
    ///
    /// # Errors
    ///
    /// Returns `AnnotationError::Load` if the file is missing or malformed,
    /// including CDS rows without `Name=` or `gene=`.
    pub fn load(path: &Path) -> Result<Self, AnnotationError> {
        Self::load_with_options(path, &LoadOptions::default())
    }

    /// Load a GFF3 file
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_options(path: &Path, options: &LoadOptions) -> Result<Self, AnnotationError> {
        let records =
            parse_cds_file(path, options.header_lines).map_err(|source| AnnotationError::Load {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_records(records);
        info!(
            records = table.len(),
            chromosomes = table.chromosome_to_records.len(),
            path = %path.display(),
            "Loaded annotation table"
        );
        Ok(table)
    }

    /// Build a table from GFF3 text
    ///
    /// # Errors
    ///
    /// Returns `AnnotationError::Parse` if the text is malformed.
    pub fn from_gff_text(text: &str, options: &LoadOptions) -> Result<Self, AnnotationError> {
        Ok(Self::from_records(parse_cds_text(text, options.header_lines)?))
    }

    /// Build a table from already-parsed rows
    pub fn from_records(records: Vec<CdsRecord>) -> Self {
        let mut chromosome_to_records: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            chromosome_to_records
                .entry(record.chromosome.clone())
                .or_default()
                .push(idx);
        }
        Self {
            records,
            chromosome_to_records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows in file order
    pub fn records(&self) -> &[CdsRecord] {
        &self.records
    }

    /// Rows on a normalized chromosome name (`7`, `X`), in file order
    pub fn records_on<'a>(&'a self, chromosome: &str) -> impl Iterator<Item = &'a CdsRecord> + 'a {
        self.chromosome_to_records
            .get(chromosome)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.records[idx])
    }

    /// Distinct gene symbols, sorted
    pub fn genes(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.gene.as_str()).collect()
    }
}
