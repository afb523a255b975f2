use std::path::Path;

use tracing::debug;

use crate::access::SequenceAccess;
use crate::annotation::{AnnotationError, AnnotationTable, LoadOptions};
use crate::core::chromosome::Chromosome;
use crate::core::types::{Assembly, CoordinateMode};
use crate::overlap::{CdsOverlap, FeatureOverlap, OverlapError};
use crate::repository::SequenceRepository;

/// Answers interval queries against an annotation table, resolving
/// chromosomes through a borrowed [`SequenceAccess`]
pub struct FeatureOverlapResolver<'a, R> {
    access: &'a SequenceAccess<R>,
    table: AnnotationTable,
    assembly: Assembly,
}

impl<'a, R: SequenceRepository> FeatureOverlapResolver<'a, R> {
    /// Create a resolver for a GRCh38 annotation table
    pub fn new(access: &'a SequenceAccess<R>, table: AnnotationTable) -> Self {
        Self {
            access,
            table,
            assembly: Assembly::default(),
        }
    }

    /// Load the annotation table from a GFF3 file and build a resolver
    ///
    /// # Errors
    ///
    /// Returns `AnnotationError` if the table cannot be loaded.
    pub fn load(
        access: &'a SequenceAccess<R>,
        path: &Path,
        options: &LoadOptions,
    ) -> Result<Self, AnnotationError> {
        Ok(Self::new(access, AnnotationTable::load_with_options(path, options)?))
    }

    /// Set the assembly the annotation table was built against
    #[must_use]
    pub fn with_assembly(mut self, assembly: Assembly) -> Self {
        self.assembly = assembly;
        self
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    pub fn table(&self) -> &AnnotationTable {
        &self.table
    }

    /// Genes and CDS rows overlapping an interval on a chromosome.
    ///
    /// The chromosome comes from `chromosome` when given, otherwise from the
    /// `<assembly>:<chromosome>` alias of `identifier`. Returns `Ok(None)` when
    /// the query is valid but nothing overlaps.
    ///
    /// # Errors
    ///
    /// Validation errors for an invalid chromosome, a missing location, or a
    /// reversed interval; lookup errors when `identifier` cannot be mapped to a
    /// chromosome.
    pub fn get_overlap(
        &self,
        start: u64,
        end: u64,
        chromosome: Option<&str>,
        identifier: Option<&str>,
        mode: CoordinateMode,
    ) -> Result<Option<FeatureOverlap>, OverlapError> {
        let chromosome = self.resolve_chromosome(chromosome, identifier)?;
        let (start, end) = normalize_interval(start, end, mode)?;
        let chromosome = chromosome.to_string();

        let mut overlap = FeatureOverlap::new();
        for record in self
            .table
            .records_on(&chromosome)
            .filter(|r| r.overlaps(start, end))
        {
            overlap
                .entry(record.gene.clone())
                .or_default()
                .push(CdsOverlap {
                    info_name: record.info_name.clone(),
                    cds_start: record.cds_start,
                    cds_stop: record.cds_stop,
                    overlap_start: record.cds_start.max(start),
                    overlap_stop: record.cds_stop.min(end),
                });
        }

        debug!(
            chromosome = %chromosome,
            start,
            end,
            genes = overlap.len(),
            "Resolved feature overlap"
        );

        if overlap.is_empty() {
            return Ok(None);
        }
        Ok(Some(overlap))
    }

    /// Chromosome targeted by a query. `chromosome` wins over `identifier`
    /// when both are given. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// `InvalidChromosome` or `MissingLocation` for bad input, `Lookup` when the
    /// repository does not know `identifier`, and `NoAssemblyAliases` or
    /// `NoAssemblyChromosome` when it has no alias on this table's assembly.
    pub fn resolve_chromosome(
        &self,
        chromosome: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<Chromosome, OverlapError> {
        let chromosome = chromosome.filter(|c| !c.is_empty());
        let identifier = identifier.filter(|i| !i.is_empty());

        if let Some(chromosome) = chromosome {
            return Chromosome::parse(chromosome)
                .ok_or_else(|| OverlapError::InvalidChromosome(chromosome.to_string()));
        }

        let identifier = identifier.ok_or(OverlapError::MissingLocation)?;
        let namespace = self.assembly.namespace();
        let aliases = self
            .access
            .translate_identifier(identifier, Some(&[namespace.as_str()][..]))?;

        if aliases.is_empty() {
            return Err(OverlapError::NoAssemblyAliases {
                assembly: self.assembly.clone(),
                identifier: identifier.to_string(),
            });
        }

        let prefix = format!("{namespace}:");
        aliases
            .iter()
            .filter_map(|alias| alias.strip_prefix(&prefix))
            .find_map(Chromosome::parse)
            .ok_or_else(|| OverlapError::NoAssemblyChromosome {
                assembly: self.assembly.clone(),
                identifier: identifier.to_string(),
            })
    }
}

/// Convert a query interval to 1-based inclusive coordinates
fn normalize_interval(start: u64, end: u64, mode: CoordinateMode) -> Result<(u64, u64), OverlapError> {
    let overflow = || OverlapError::InvalidRange { start, end };
    let (start, end) = match mode {
        CoordinateMode::Residue => (start, end),
        CoordinateMode::InterResidue if start == end => {
            (start, end.checked_add(1).ok_or_else(overflow)?)
        }
        CoordinateMode::InterResidue => (start.checked_add(1).ok_or_else(overflow)?, end),
    };
    if start > end {
        return Err(OverlapError::InvalidRange { start, end });
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature::CdsRecord;
    use crate::core::types::ErrorKind;
    use crate::repository::store::{SequenceRecord, SequenceStore};

    fn access() -> SequenceAccess<SequenceStore> {
        let mut store = SequenceStore::new();
        store
            .add_record(
                SequenceRecord::new("chr7", "ACGT")
                    .with_alias("refseq", "NC_000007.14")
                    .with_alias("GRCh38", "7")
                    .with_alias("GRCh38", "chr7"),
            )
            .unwrap();
        store
            .add_record(SequenceRecord::new("tx", "ATG").with_alias("refseq", "NM_004333.6"))
            .unwrap();
        store
            .add_record(
                SequenceRecord::new("alt", "ACGA")
                    .with_alias("refseq", "NT_187562.1")
                    .with_alias("GRCh38", "chr7_KI270803v1_alt"),
            )
            .unwrap();
        SequenceAccess::new(store)
    }

    fn table() -> AnnotationTable {
        AnnotationTable::from_records(vec![
            CdsRecord::new("7", 100, 200, "NP_1.1", "GENE1"),
            CdsRecord::new("7", 150, 250, "NP_2.1", "GENE1"),
            CdsRecord::new("7", 1001, 1001, "NP_3.1", "POINT"),
            CdsRecord::new("7", 1002, 1010, "NP_4.1", "RIGHT"),
            CdsRecord::new("12", 100, 200, "NP_5.1", "OTHER"),
        ])
    }

    #[test]
    fn test_overlap_clipping() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());
        let overlap = resolver
            .get_overlap(50, 150, Some("7"), None, CoordinateMode::Residue)
            .unwrap()
            .unwrap();

        let rows = &overlap["GENE1"];
        assert_eq!(overlap.len(), 1);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].overlap_start, 100);
        assert_eq!(rows[0].overlap_stop, 150);
        assert_eq!(rows[1].overlap_start, 150);
        assert_eq!(rows[1].overlap_stop, 150);
    }

    #[test]
    fn test_no_overlap_is_none() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());
        let result = resolver
            .get_overlap(5000, 6000, Some("7"), None, CoordinateMode::Residue)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_normalize_interval() {
        assert_eq!(normalize_interval(5, 9, CoordinateMode::Residue), Ok((5, 9)));
        assert_eq!(normalize_interval(1000, 1001, CoordinateMode::InterResidue), Ok((1001, 1001)));
        assert_eq!(normalize_interval(1000, 1000, CoordinateMode::InterResidue), Ok((1000, 1001)));
        assert_eq!(
            normalize_interval(5, 4, CoordinateMode::InterResidue),
            Err(OverlapError::InvalidRange { start: 6, end: 4 })
        );
    }

    #[test]
    fn test_normalize_interval_at_u64_max() {
        assert_eq!(
            normalize_interval(u64::MAX, u64::MAX, CoordinateMode::InterResidue),
            Err(OverlapError::InvalidRange { start: u64::MAX, end: u64::MAX })
        );
        assert_eq!(
            normalize_interval(u64::MAX, 5, CoordinateMode::InterResidue),
            Err(OverlapError::InvalidRange { start: u64::MAX, end: 5 })
        );
        assert_eq!(
            normalize_interval(u64::MAX, u64::MAX, CoordinateMode::Residue),
            Ok((u64::MAX, u64::MAX))
        );

        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());
        let err = resolver
            .get_overlap(u64::MAX, u64::MAX, Some("7"), None, CoordinateMode::InterResidue)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_identifier_resolves_chromosome() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());
        assert_eq!(
            resolver.resolve_chromosome(None, Some("NC_000007.14")).unwrap(),
            Chromosome::Autosome(7)
        );
    }

    #[test]
    fn test_identifier_errors() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());

        let err = resolver.resolve_chromosome(None, Some("NM_004333.6")).unwrap_err();
        assert_eq!(err.to_string(), "Unable to find GRCh38 aliases for: NM_004333.6");
        assert_eq!(err.kind(), ErrorKind::LookupMiss);

        let err = resolver.resolve_chromosome(None, Some("NT_187562.1")).unwrap_err();
        assert_eq!(err.to_string(), "Unable to find GRCh38 chromosome for: NT_187562.1");

        let err = resolver.resolve_chromosome(None, Some("NC_000007.99")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SeqRepo unable to get translated identifiers for NC_000007.99"
        );
        assert_eq!(err.kind(), ErrorKind::LookupMiss);
    }

    #[test]
    fn test_missing_location() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());
        let err = resolver
            .get_overlap(1, 2, None, None, CoordinateMode::Residue)
            .unwrap_err();
        assert_eq!(err, OverlapError::MissingLocation);
        assert_eq!(err.to_string(), "Must provide either `chromosome` or `identifier`");
    }

    #[test]
    fn test_empty_chromosome_falls_back_to_identifier() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table());
        assert_eq!(
            resolver.resolve_chromosome(Some(""), Some("NC_000007.14")).unwrap(),
            Chromosome::Autosome(7)
        );
        assert_eq!(
            resolver.resolve_chromosome(Some(""), Some("")).unwrap_err(),
            OverlapError::MissingLocation
        );
    }

    #[test]
    fn test_other_assembly_namespace() {
        let access = access();
        let resolver = FeatureOverlapResolver::new(&access, table()).with_assembly(Assembly::Grch37);
        let err = resolver.resolve_chromosome(None, Some("NC_000007.14")).unwrap_err();
        assert!(matches!(
            err,
            OverlapError::NoAssemblyAliases { assembly: Assembly::Grch37, .. }
        ));
    }
}
