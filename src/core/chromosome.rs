use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A primary human chromosome: 1-22, X, or Y, with no `chr` prefix
///
/// Anything outside this closed set is rejected when parsing, so a typo never
/// turns into a silent scan that matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chromosome {
    Autosome(u8),
    X,
    Y,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is not a valid chromosome")]
pub struct InvalidChromosome(pub String);

impl Chromosome {
    /// Parse an exact chromosome name (`1`..`22`, `X`, `Y`)
    ///
    /// Leading zeros, `chr` prefixes and lowercase `x`/`y` are all rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "X" => Some(Self::X),
            "Y" => Some(Self::Y),
            _ => {
                if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                match s.parse::<u8>() {
                    Ok(n) if (1..=22).contains(&n) => Some(Self::Autosome(n)),
                    _ => None,
                }
            }
        }
    }

    /// Parse a chromosome that may carry a UCSC-style `chr` prefix
    pub fn parse_lenient(s: &str) -> Option<Self> {
        Self::parse(s.strip_prefix("chr").unwrap_or(s))
    }

    /// All 24 chromosomes in karyotype order
    pub fn all() -> impl Iterator<Item = Chromosome> {
        (1..=22)
            .map(Chromosome::Autosome)
            .chain([Chromosome::X, Chromosome::Y])
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autosome(n) => write!(f, "{n}"),
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

impl FromStr for Chromosome {
    type Err = InvalidChromosome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidChromosome(s.to_string()))
    }
}

impl Serialize for Chromosome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Chromosome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
