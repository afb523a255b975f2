//! Core data types shared by every component.
//!
//! - [`CoordinateMode`]: residue (1-based inclusive) vs inter-residue (0-based half-open)
//! - [`Assembly`]: reference assembly, which is also an alias namespace
//! - [`Chromosome`]: the closed set `1..22`, `X`, `Y`
//! - [`SequenceIdentifier`], [`Alias`]: namespace-qualified identifiers
//! - [`ErrorKind`]: discriminant shared by per-query error types
//!
//! ## Identifier namespaces
//!
//! | Namespace | Example |
//! |-----------|---------|
//! | refseq    | `refseq:NC_000007.14` |
//! | ensembl   | `ensembl:ENST00000331728.9` |
//! | ga4gh     | `ga4gh:SQ.ijXOSP3XSsuLWZhXQ7_TJ5JXu4RJO6VT` |
//! | GRCh38    | `GRCh38:7`, `GRCh38:chr7` |
//!
//! [`CoordinateMode`]: types::CoordinateMode
//! [`Assembly`]: types::Assembly
//! [`ErrorKind`]: types::ErrorKind
//! [`Chromosome`]: chromosome::Chromosome
//! [`SequenceIdentifier`]: identifier::SequenceIdentifier
//! [`Alias`]: identifier::Alias

pub mod chromosome;
pub mod feature;
pub mod identifier;
pub mod types;
