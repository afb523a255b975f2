use serde::{Deserialize, Serialize};

/// Coordinate convention attached to every position pair entering the engine
///
/// ```text
/// RESIDUE           |   | 1 |   | 2 |   | 3 |   |
/// INTER_RESIDUE     | 0 |   | 1 |   | 2 |   | 3 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateMode {
    /// 1-based, inclusive on both ends
    #[default]
    Residue,
    /// 0-based boundaries between residues, half-open intervals
    InterResidue,
}

impl std::fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Residue => write!(f, "residue"),
            Self::InterResidue => write!(f, "inter-residue"),
        }
    }
}

/// Assembly version (e.g., `GRCh37`, `GRCh38`)
///
/// The display form doubles as the repository namespace for assembly-qualified
/// aliases such as `GRCh38:7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Assembly {
    Grch37,
    #[default]
    Grch38,
    Other(String),
}

impl Assembly {
    /// Assemblies with chromosome-scale RefSeq accessions, most recent first
    pub const KNOWN: [Assembly; 2] = [Assembly::Grch38, Assembly::Grch37];

    /// Parse an assembly namespace. Unknown names become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "GRCh38" => Self::Grch38,
            "GRCh37" => Self::Grch37,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this is one of the assemblies in [`Assembly::KNOWN`]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn namespace(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grch37 => write!(f, "GRCh37"),
            Self::Grch38 => write!(f, "GRCh38"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Broad category of a per-query failure, so callers can branch without
/// inspecting message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input: bad chromosome, reversed interval, missing parameters
    Validation,
    /// Identifier, accession, or alias not known to the repository
    LookupMiss,
    /// Coordinate outside the bounds of the sequence
    OutOfRange,
    /// The repository could not be reached or answered with a failure
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_round_trip_namespace() {
        assert_eq!(Assembly::parse("GRCh38"), Assembly::Grch38);
        assert_eq!(Assembly::parse("GRCh37"), Assembly::Grch37);
        assert_eq!(Assembly::parse("CHM13"), Assembly::Other("CHM13".to_string()));
        assert_eq!(Assembly::Grch38.namespace(), "GRCh38");
        assert!(!Assembly::parse("hg38").is_known());
    }

    #[test]
    fn test_known_assemblies_newest_first() {
        assert_eq!(Assembly::KNOWN[0], Assembly::Grch38);
        assert_eq!(Assembly::KNOWN[1], Assembly::Grch37);
    }

    #[test]
    fn test_coordinate_mode_default() {
        assert_eq!(CoordinateMode::default(), CoordinateMode::Residue);
        assert_eq!(CoordinateMode::InterResidue.to_string(), "inter-residue");
    }
}
