//! Command-line interface for seq-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **sequence**: Fetch a sequence or a slice of one
//! - **translate** / **aliases**: List equivalent identifiers
//! - **chromosome** / **accession-chromosome**: Map between chromosomes and accessions
//! - **fasta**: Export a sequence as FASTA
//! - **overlap**: Find CDS features overlapping a genomic interval
//! - **store-export**: Build a JSON sequence store from FASTA and an alias table
//!
//! ## Usage
//!
//! ```text
//! # Residues 600-601 of BRAF
//! seq-resolver sequence NP_004324.2 --start 600 --end 601 --store seqrepo.json
//!
//! # Accessions for chromosome 7
//! seq-resolver chromosome 7 --fasta genome.fa --aliases aliases.tsv
//!
//! # Genes overlapping an interval, as JSON
//! seq-resolver --format json overlap 140753336 140753336 --chromosome 7 \
//!     --annotation MANE.GRCh38.v1.3.refseq_genomic.gff --store seqrepo.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::core::types::CoordinateMode;
use crate::repository::SequenceStore;

pub mod overlap;
pub mod sequence;
pub mod store;
pub mod translate;

#[derive(Parser)]
#[command(name = "seq-resolver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve sequence identifiers, slices and overlapping CDS features")]
#[command(
    long_about = "seq-resolver answers sequence-level questions against a local sequence store.\n\nIt can:\n- Fetch sequences by any alias in residue or inter-residue coordinates\n- Translate identifiers between namespaces and map chromosomes to accessions\n- Export FASTA records\n- Report the genes and CDS segments overlapping a genomic interval"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a sequence, or a slice of one
    Sequence(sequence::SequenceArgs),

    /// Translate an identifier into its aliases in other namespaces
    Translate(translate::TranslateArgs),

    /// List the aliases of a raw alias-index key
    Aliases(translate::AliasesArgs),

    /// List the RefSeq accessions of a chromosome, newest assembly first
    Chromosome(translate::ChromosomeArgs),

    /// Find the chromosome of a chromosome-scale accession
    AccessionChromosome(translate::AccessionChromosomeArgs),

    /// Write a sequence to a FASTA file
    Fasta(sequence::FastaArgs),

    /// Find CDS features overlapping a genomic interval
    Overlap(overlap::OverlapArgs),

    /// Build a JSON sequence store from FASTA and an alias table
    StoreExport(store::StoreExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ModeArg {
    /// 1-based, inclusive
    #[default]
    Residue,
    /// 0-based, half-open
    InterResidue,
}

impl From<ModeArg> for CoordinateMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Residue => CoordinateMode::Residue,
            ModeArg::InterResidue => CoordinateMode::InterResidue,
        }
    }
}

/// Where to load sequences from
#[derive(Args, Debug, Clone)]
pub struct RepositoryArgs {
    /// JSON sequence store (see `store-export`)
    #[arg(long, conflicts_with = "fasta", required_unless_present = "fasta")]
    pub store: Option<PathBuf>,

    /// FASTA file of sequences (plain or gzip)
    #[arg(long)]
    pub fasta: Option<PathBuf>,

    /// Alias table for the FASTA records (`name<TAB>namespace<TAB>alias`)
    #[arg(long, requires = "fasta")]
    pub aliases: Option<PathBuf>,

    /// Namespace under which FASTA record names are registered
    #[arg(long, default_value = "refseq")]
    pub namespace: String,
}

impl RepositoryArgs {
    /// Open the configured sequence store
    ///
    /// # Errors
    ///
    /// Returns an error if the store or FASTA/alias files cannot be loaded.
    pub fn open(&self) -> anyhow::Result<SequenceStore> {
        if let Some(path) = &self.store {
            return SequenceStore::load_from_file(path)
                .with_context(|| format!("Failed to load store {}", path.display()));
        }

        let fasta = self
            .fasta
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Either --store or --fasta is required"))?;
        SequenceStore::from_fasta(fasta, self.aliases.as_deref(), Some(&self.namespace))
            .with_context(|| format!("Failed to build store from {}", fasta.display()))
    }
}
