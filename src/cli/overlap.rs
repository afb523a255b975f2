use std::path::PathBuf;

use clap::Args;

use crate::access::SequenceAccess;
use crate::annotation::LoadOptions;
use crate::cli::{ModeArg, OutputFormat, RepositoryArgs};
use crate::core::types::{Assembly, CoordinateMode};
use crate::overlap::{FeatureOverlap, FeatureOverlapResolver};
use crate::parsing::gff::DEFAULT_HEADER_LINES;

#[derive(Args)]
pub struct OverlapArgs {
    /// Interval start
    #[arg(required = true)]
    pub start: u64,

    /// Interval end
    #[arg(required = true)]
    pub end: u64,

    /// Chromosome (1-22, X, Y); takes precedence over --identifier
    #[arg(long)]
    pub chromosome: Option<String>,

    /// Genomic accession whose assembly alias gives the chromosome
    #[arg(long)]
    pub identifier: Option<String>,

    /// GFF3 annotation file (plain or gzip)
    #[arg(long, required = true)]
    pub annotation: PathBuf,

    /// Leading lines of the annotation file to skip
    #[arg(long, default_value_t = DEFAULT_HEADER_LINES)]
    pub header_lines: usize,

    /// Assembly the annotation file was built against
    #[arg(long, default_value = "GRCh38")]
    pub assembly: String,

    /// Coordinate convention of START and END
    #[arg(long, value_enum, default_value = "residue")]
    pub mode: ModeArg,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

/// Execute overlap subcommand
///
/// # Errors
///
/// Returns an error if the annotation cannot be loaded or the query is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: OverlapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    let options = LoadOptions {
        header_lines: args.header_lines,
    };
    let resolver = FeatureOverlapResolver::load(&access, &args.annotation, &options)?
        .with_assembly(Assembly::parse(&args.assembly));

    if verbose {
        eprintln!(
            "Loaded {} CDS rows for {} genes",
            resolver.table().len(),
            resolver.table().genes().len()
        );
    }

    let overlap = resolver.get_overlap(
        args.start,
        args.end,
        args.chromosome.as_deref(),
        args.identifier.as_deref(),
        CoordinateMode::from(args.mode),
    )?;

    match format {
        OutputFormat::Text => print_text(overlap.as_ref()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overlap)?),
        OutputFormat::Tsv => print_tsv(overlap.as_ref()),
    }

    Ok(())
}

fn print_text(overlap: Option<&FeatureOverlap>) {
    let Some(overlap) = overlap else {
        eprintln!("No overlapping CDS features found.");
        return;
    };

    for (gene, rows) in overlap {
        println!("{gene}");
        for row in rows {
            println!(
                "  {}  CDS {}-{}  overlap {}-{}",
                row.info_name, row.cds_start, row.cds_stop, row.overlap_start, row.overlap_stop
            );
        }
    }
}

fn print_tsv(overlap: Option<&FeatureOverlap>) {
    println!("gene\tinfo_name\tcds_start\tcds_stop\toverlap_start\toverlap_stop");
    for (gene, rows) in overlap.into_iter().flatten() {
        for row in rows {
            println!(
                "{gene}\t{}\t{}\t{}\t{}\t{}",
                row.info_name, row.cds_start, row.cds_stop, row.overlap_start, row.overlap_stop
            );
        }
    }
}
