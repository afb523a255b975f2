use serde::{Deserialize, Serialize};

/// Feature type retained from the annotation source
pub const CDS_FEATURE_TYPE: &str = "CDS";

/// A single CDS row of the annotation table
///
/// Coordinates are 1-based and inclusive on both ends, with
/// `cds_start <= cds_stop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdsRecord {
    /// Feature type column; always `CDS` once loaded
    #[serde(rename = "type")]
    pub feature_type: String,

    /// Chromosome with any `chr` prefix and `_` suffix removed
    pub chromosome: String,

    pub cds_start: u64,
    pub cds_stop: u64,

    /// Record name from the `Name=` attribute (e.g. `NP_000242.1`)
    pub info_name: String,

    /// Owning gene symbol from the `gene=` attribute
    pub gene: String,
}

impl CdsRecord {
    pub fn new(
        chromosome: impl Into<String>,
        cds_start: u64,
        cds_stop: u64,
        info_name: impl Into<String>,
        gene: impl Into<String>,
    ) -> Self {
        Self {
            feature_type: CDS_FEATURE_TYPE.to_string(),
            chromosome: chromosome.into(),
            cds_start,
            cds_stop,
            info_name: info_name.into(),
            gene: gene.into(),
        }
    }

    /// Closed-interval intersection test against a 1-based inclusive interval
    pub fn overlaps(&self, start: u64, end: u64) -> bool {
        self.cds_start <= end && self.cds_stop >= start
    }
}

/// Normalize an annotation-source chromosome name: strip a leading `chr`
/// and drop any `_`-delimited suffix (alt and patch scaffolds).
pub fn normalize_chromosome_name(raw: &str) -> String {
    let name = raw.strip_prefix("chr").unwrap_or(raw);
    match name.split_once('_') {
        Some((head, _)) => head.to_string(),
        None => name.to_string(),
    }
}
