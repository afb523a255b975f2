//! Uniform access to a sequence repository.
//!
//! [`SequenceAccess`] wraps any [`SequenceRepository`] and turns its raw
//! answers into per-operation results with stable, human-readable messages.
//! Expected misses (unknown accession, bad range, no alias) come back as
//! [`AccessError`] values carrying an [`ErrorKind`]; nothing here panics on a
//! miss.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_resolver::access::SequenceAccess;
//! use seq_resolver::core::types::CoordinateMode;
//! use seq_resolver::repository::SequenceStore;
//! use std::path::Path;
//!
//! let store = SequenceStore::load_from_file(Path::new("seqrepo.json")).unwrap();
//! let access = SequenceAccess::new(store);
//!
//! // Residue 600 of the BRAF protein
//! let residue = access
//!     .get_reference_sequence("NP_004324.2", Some(600), Some(600), CoordinateMode::Residue)
//!     .unwrap();
//! assert_eq!(residue, "V");
//!
//! let acs = access.chromosome_to_acs("7").unwrap();
//! assert_eq!(acs[0], "NC_000007.14");
//! ```

use thiserror::Error;
use tracing::debug;

use crate::core::chromosome::Chromosome;
use crate::core::identifier::{namespace, Alias};
use crate::core::types::{Assembly, CoordinateMode, ErrorKind};
use crate::repository::{RepositoryError, SequenceRepository};

pub mod fasta;

pub use fasta::ExportError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("start ({start}) cannot be greater than end ({end})")]
    InvalidRange { start: u64, end: u64 },

    #[error("Residue coordinates are 1-based; got start {0}")]
    InvalidResidueStart(u64),

    #[error("Accession, {0}, not found in SeqRepo")]
    AccessionNotFound(String),

    #[error("{identifier} matches {count} distinct sequences in SeqRepo")]
    AmbiguousIdentifier { identifier: String, count: usize },

    #[error("Start inter-residue coordinate ({start}) is out of index on {identifier}")]
    StartOutOfIndex { start: u64, identifier: String },

    #[error("End inter-residue coordinate ({end}) is out of index on {identifier}")]
    EndOutOfIndex { end: u64, identifier: String },

    #[error("SeqRepo unable to get translated identifiers for {0}")]
    UntranslatableIdentifier(String),

    #[error("SeqRepo could not translate alias {0}")]
    UntranslatableAlias(String),

    #[error("{0} is not a valid chromosome")]
    InvalidChromosome(String),

    #[error("Unable to get chromosome for {0}")]
    ChromosomeNotFound(String),

    #[error("SeqRepo unavailable: {0}")]
    Unavailable(String),
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } | Self::InvalidResidueStart(_) | Self::InvalidChromosome(_) => {
                ErrorKind::Validation
            }
            Self::AccessionNotFound(_)
            | Self::AmbiguousIdentifier { .. }
            | Self::UntranslatableIdentifier(_)
            | Self::UntranslatableAlias(_)
            | Self::ChromosomeNotFound(_) => ErrorKind::LookupMiss,
            Self::StartOutOfIndex { .. } | Self::EndOutOfIndex { .. } => ErrorKind::OutOfRange,
            Self::Unavailable(_) => ErrorKind::Unavailable,
        }
    }
}

/// Single point of contact with a sequence repository
pub struct SequenceAccess<R> {
    repository: R,
}

impl<R: SequenceRepository> SequenceAccess<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Get a reference sequence, or a slice of one.
    ///
    /// With no bounds the whole sequence is returned. A missing `start` means
    /// the sequence origin and a missing `end` means the sequence end.
    /// Residue positions are converted to inter-residue (`n` -> `n - 1` for
    /// the start) before slicing, so `(s, e, Residue)` and `(s - 1, e, InterResidue)`
    /// return the same residues.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `start > end`, `InvalidResidueStart` for a residue
    /// start of 0, `AccessionNotFound` for unknown identifiers, and
    /// `EndOutOfIndex`/`StartOutOfIndex` when the bounds exceed the sequence.
    pub fn get_reference_sequence(
        &self,
        identifier: &str,
        start: Option<u64>,
        end: Option<u64>,
        mode: CoordinateMode,
    ) -> Result<String, AccessError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AccessError::InvalidRange { start, end });
            }
        }

        let start = match (start, mode) {
            (Some(0), CoordinateMode::Residue) => return Err(AccessError::InvalidResidueStart(0)),
            (Some(s), CoordinateMode::Residue) => Some(s - 1),
            (s, _) => s,
        };

        debug!(identifier, ?start, ?end, "Fetching reference sequence");

        let sequence = self
            .repository
            .fetch(identifier, start, end)
            .map_err(|e| fetch_error(identifier, end, e))?;

        // A repository may silently truncate a slice that runs off the end
        if let (Some(start), Some(end)) = (start, end) {
            if sequence.len() as u64 != end - start {
                return Err(AccessError::EndOutOfIndex {
                    end,
                    identifier: identifier.to_string(),
                });
            }
        }

        Ok(sequence)
    }

    /// Length of the full sequence named by `identifier`
    ///
    /// # Errors
    ///
    /// `AccessionNotFound` for unknown identifiers.
    pub fn sequence_length(&self, identifier: &str) -> Result<u64, AccessError> {
        self.get_reference_sequence(identifier, None, None, CoordinateMode::InterResidue)
            .map(|sequence| sequence.len() as u64)
    }

    /// Every equivalent `namespace:alias`, optionally restricted to
    /// `target_namespaces`, in repository order.
    ///
    /// # Errors
    ///
    /// `UntranslatableIdentifier` when the repository cannot resolve the
    /// identifier, `Unavailable` on transport failure.
    pub fn translate_identifier(
        &self,
        identifier: &str,
        target_namespaces: Option<&[&str]>,
    ) -> Result<Vec<String>, AccessError> {
        self.repository
            .translate_identifier(identifier, target_namespaces)
            .map_err(|e| match e {
                RepositoryError::Unavailable(msg) => AccessError::Unavailable(msg),
                other => {
                    debug!(identifier, error = %other, "Identifier translation failed");
                    AccessError::UntranslatableIdentifier(identifier.to_string())
                }
            })
    }

    /// Every `namespace:alias` for a verbatim alias-index key.
    ///
    /// Unlike [`translate_identifier`](Self::translate_identifier) the input is
    /// not split into namespace and value, so `GRCh38:2` does not resolve even
    /// though `NC_000002.12` does.
    ///
    /// # Errors
    ///
    /// `UntranslatableAlias` when the alias is unknown, `Unavailable` on
    /// transport failure.
    pub fn translate_alias(&self, identifier: &str) -> Result<Vec<String>, AccessError> {
        self.repository
            .translate_alias(identifier)
            .map_err(|e| match e {
                RepositoryError::Unavailable(msg) => AccessError::Unavailable(msg),
                other => {
                    debug!(identifier, error = %other, "Alias translation failed");
                    AccessError::UntranslatableAlias(identifier.to_string())
                }
            })
    }

    /// RefSeq accessions for a chromosome, most recent assembly first
    /// (e.g. `7` -> `["NC_000007.14", "NC_000007.13"]`)
    ///
    /// # Errors
    ///
    /// `InvalidChromosome` when the name is outside `1..22, X, Y` or no
    /// assembly maps it to an accession.
    pub fn chromosome_to_acs(&self, chromosome: &str) -> Result<Vec<String>, AccessError> {
        let parsed = Chromosome::parse(chromosome)
            .ok_or_else(|| AccessError::InvalidChromosome(chromosome.to_string()))?;

        let mut acs: Vec<String> = Vec::new();
        for assembly in Assembly::KNOWN {
            let query = format!("{assembly}:{parsed}");
            match self
                .repository
                .translate_identifier(&query, Some(&[namespace::REFSEQ][..]))
            {
                Ok(aliases) => {
                    for ac in aliases
                        .iter()
                        .filter_map(|a| Alias::parse_qualified(a))
                        .map(|a| a.alias)
                    {
                        if !acs.contains(&ac) {
                            acs.push(ac);
                        }
                    }
                }
                Err(RepositoryError::Unavailable(msg)) => return Err(AccessError::Unavailable(msg)),
                Err(e) => debug!(query = %query, error = %e, "No accession for assembly chromosome"),
            }
        }

        if acs.is_empty() {
            return Err(AccessError::InvalidChromosome(chromosome.to_string()));
        }
        Ok(acs)
    }

    /// Chromosome of a chromosome-scale accession, taken from its first
    /// `<assembly>:<chromosome>` alias (e.g. `NC_000007.13` -> `7`)
    ///
    /// # Errors
    ///
    /// `ChromosomeNotFound` when the accession is unknown or has no
    /// assembly-chromosome alias.
    pub fn ac_to_chromosome(&self, accession: &str) -> Result<Chromosome, AccessError> {
        let aliases = match self.translate_alias(accession) {
            Ok(aliases) => aliases,
            Err(AccessError::Unavailable(msg)) => return Err(AccessError::Unavailable(msg)),
            Err(_) => return Err(AccessError::ChromosomeNotFound(accession.to_string())),
        };

        aliases
            .iter()
            .filter_map(|a| Alias::parse_qualified(a))
            .filter(|a| Assembly::parse(&a.namespace).is_known())
            .find_map(|a| Chromosome::parse_lenient(&a.alias))
            .ok_or_else(|| AccessError::ChromosomeNotFound(accession.to_string()))
    }
}

fn fetch_error(identifier: &str, end: Option<u64>, error: RepositoryError) -> AccessError {
    match error {
        RepositoryError::NotFound(_) => AccessError::AccessionNotFound(identifier.to_string()),
        RepositoryError::Ambiguous { count, .. } => AccessError::AmbiguousIdentifier {
            identifier: identifier.to_string(),
            count,
        },
        RepositoryError::EndOutOfRange { end, .. } => AccessError::EndOutOfIndex {
            end,
            identifier: identifier.to_string(),
        },
        // With an explicit end, a start past the sequence is reported against the end
        RepositoryError::StartOutOfRange { start, .. } => match end {
            Some(end) => AccessError::EndOutOfIndex {
                end,
                identifier: identifier.to_string(),
            },
            None => AccessError::StartOutOfIndex {
                start,
                identifier: identifier.to_string(),
            },
        },
        RepositoryError::InvalidCoordinates { start, end } => {
            AccessError::InvalidRange { start, end }
        }
        RepositoryError::Unavailable(msg) => AccessError::Unavailable(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::{SequenceRecord, SequenceStore};

    /// Repository that fails every call, as a dropped connection would
    struct OfflineRepository;

    impl SequenceRepository for OfflineRepository {
        fn fetch(&self, _: &str, _: Option<u64>, _: Option<u64>) -> Result<String, RepositoryError> {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        }

        fn translate_identifier(
            &self,
            _: &str,
            _: Option<&[&str]>,
        ) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        }

        fn translate_alias(&self, _: &str) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        }
    }

    /// Repository that returns short slices instead of failing
    struct TruncatingRepository;

    impl SequenceRepository for TruncatingRepository {
        fn fetch(&self, _: &str, _: Option<u64>, _: Option<u64>) -> Result<String, RepositoryError> {
            Ok("AC".to_string())
        }

        fn translate_identifier(
            &self,
            identifier: &str,
            _: Option<&[&str]>,
        ) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::NotFound(identifier.to_string()))
        }

        fn translate_alias(&self, alias: &str) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::NotFound(alias.to_string()))
        }
    }

    fn access() -> SequenceAccess<SequenceStore> {
        let mut store = SequenceStore::new();
        store
            .add_record(
                SequenceRecord::new("s1", "MAALSGGGGGGAEPGQALFNGDMEPEAGAGAGAAASSAADPAIPEEVWNIKQMIKLTQEHIEALLDKFGGEHNPPSIYLEAYEEYTSKLDALQQREQQLLESLGNGTDFSVSSSASMDTVTSSSSSSLSVLPSSLSVFQNPTDVARSNPKSPQKPIVRVFLPNKQRTVVPARCGVTVRDSLKKALMMRGLIPECCAVYRIQDGEKKPIGWDTDISWLTGEELHVEVLENVPLTTHNFVRKTFFTLAFCDFCRKLLFQGFRCQTCGYKFHQRCSTEVPLMCVNYDQLDLLFVSKFFEHHPIPQEEASLAETALTSGSSPSAPASDSIGPQILTSPSPSKSIPIPQPFRPADEDHRNQFGQRDRSSSAPNVHINTIEPVNIDDLIRDQGFRGDGGSTTGLSATPPASLPGSLTNVKALQKSPGPQRERKSSSSSEDRNRMKTLGRRDSSDDWEIPDGQITVGQRIGSGSFGTVYKGKWHGDVAVKMLNVTAPTPQQLQAFKNEVGVLRKTRHVNILLFMGYSTKPQLAIVTQWCEGSSLYHHLHIIETKFEMIKLIDIARQTAQGMDYLHAKSIIHRDLKSNNIFLHEDLTVKIGDFGLATVKSRWSGSHQFEQLSGSILWMAPEVIRMQDKNPYSFQSDVYAFGIVLYELMTGQLPYSNINNRDQIIFMVGRGYLSPDLSKVRSNCPKAMKRLMAECLKKKRDERPLFPQILASIELLARSLPKIHRSASEPSLNRAGFQTEDFSLYACASPKTPIQAGGYGAFPVH")
                    .with_alias("refseq", "NP_004324.2"),
            )
            .unwrap();
        store
            .add_record(
                SequenceRecord::new("chr7-38", "ACGTACGTAC")
                    .with_alias("refseq", "NC_000007.14")
                    .with_alias("GRCh38", "7")
                    .with_alias("GRCh38", "chr7"),
            )
            .unwrap();
        store
            .add_record(
                SequenceRecord::new("chr7-37", "ACGTACGTAA")
                    .with_alias("refseq", "NC_000007.13")
                    .with_alias("GRCh37", "7")
                    .with_alias("GRCh37", "chr7"),
            )
            .unwrap();
        store
            .add_record(
                SequenceRecord::new("chr7-alt", "ACGTACGTAT")
                    .with_alias("refseq", "NT_187562.1")
                    .with_alias("GRCh38", "chr7_KI270803v1_alt"),
            )
            .unwrap();
        SequenceAccess::new(store)
    }

    #[test]
    fn test_residue_and_inter_residue_agree() {
        let access = access();
        let residue = access
            .get_reference_sequence("NP_004324.2", Some(600), Some(601), CoordinateMode::Residue)
            .unwrap();
        let inter = access
            .get_reference_sequence("NP_004324.2", Some(599), Some(601), CoordinateMode::InterResidue)
            .unwrap();
        assert_eq!(residue, "VK");
        assert_eq!(residue, inter);
    }

    #[test]
    fn test_reversed_range_reports_original_values() {
        let access = access();
        let err = access
            .get_reference_sequence("NP_004324.2", Some(601), Some(600), CoordinateMode::Residue)
            .unwrap_err();
        assert_eq!(err.to_string(), "start (601) cannot be greater than end (600)");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_residue_start_zero_rejected() {
        let err = access()
            .get_reference_sequence("NP_004324.2", Some(0), Some(3), CoordinateMode::Residue)
            .unwrap_err();
        assert_eq!(err, AccessError::InvalidResidueStart(0));
    }

    #[test]
    fn test_start_only_past_end() {
        let err = access()
            .get_reference_sequence("NP_004324.2", Some(800), None, CoordinateMode::Residue)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Start inter-residue coordinate (799) is out of index on NP_004324.2"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        // One past the last residue is an empty slice, one further is out of index
        let access = access();
        assert_eq!(
            access
                .get_reference_sequence("NP_004324.2", Some(767), None, CoordinateMode::Residue)
                .unwrap(),
            ""
        );
        let err = access
            .get_reference_sequence("NP_004324.2", Some(768), None, CoordinateMode::Residue)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Start inter-residue coordinate (767) is out of index on NP_004324.2"
        );
    }

    #[test]
    fn test_truncated_slice_is_out_of_index() {
        let access = SequenceAccess::new(TruncatingRepository);
        let err = access
            .get_reference_sequence("NM_1.1", Some(1), Some(10), CoordinateMode::Residue)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "End inter-residue coordinate (10) is out of index on NM_1.1"
        );
    }

    #[test]
    fn test_transport_failures_become_unavailable() {
        let access = SequenceAccess::new(OfflineRepository);
        for err in [
            access
                .get_reference_sequence("NM_1.1", None, None, CoordinateMode::Residue)
                .unwrap_err(),
            access.translate_identifier("NM_1.1", None).unwrap_err(),
            access.translate_alias("NM_1.1").unwrap_err(),
            access.chromosome_to_acs("7").unwrap_err(),
            access.ac_to_chromosome("NC_000007.14").unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::Unavailable, "{err}");
        }
    }

    #[test]
    fn test_chromosome_to_acs_order() {
        let acs = access().chromosome_to_acs("7").unwrap();
        assert_eq!(acs, vec!["NC_000007.14", "NC_000007.13"]);
    }

    #[test]
    fn test_chromosome_to_acs_invalid() {
        let access = access();
        let err = access.chromosome_to_acs("117").unwrap_err();
        assert_eq!(err.to_string(), "117 is not a valid chromosome");
        // Valid name, but nothing stored for it
        let err = access.chromosome_to_acs("8").unwrap_err();
        assert_eq!(err, AccessError::InvalidChromosome("8".to_string()));
    }

    #[test]
    fn test_ac_to_chromosome() {
        let access = access();
        assert_eq!(access.ac_to_chromosome("NC_000007.13").unwrap(), Chromosome::Autosome(7));
        assert_eq!(
            access.ac_to_chromosome("NC_000007.1323").unwrap_err().to_string(),
            "Unable to get chromosome for NC_000007.1323"
        );
        // Alt scaffolds are not chromosome-scale
        assert_eq!(
            access.ac_to_chromosome("NT_187562.1").unwrap_err(),
            AccessError::ChromosomeNotFound("NT_187562.1".to_string())
        );
    }

    #[test]
    fn test_sequence_length() {
        assert_eq!(access().sequence_length("NC_000007.14").unwrap(), 10);
    }
}
