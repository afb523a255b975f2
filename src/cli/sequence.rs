use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::access::SequenceAccess;
use crate::cli::{ModeArg, OutputFormat, RepositoryArgs};
use crate::core::types::CoordinateMode;

#[derive(Args)]
pub struct SequenceArgs {
    /// Sequence identifier, optionally namespace-qualified (e.g. `refseq:NM_002529.3`)
    #[arg(required = true)]
    pub identifier: String,

    /// Start position (defaults to the sequence origin)
    #[arg(long)]
    pub start: Option<u64>,

    /// End position (defaults to the sequence end)
    #[arg(long)]
    pub end: Option<u64>,

    /// Coordinate convention of --start and --end
    #[arg(long, value_enum, default_value = "residue")]
    pub mode: ModeArg,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

#[derive(Args)]
pub struct FastaArgs {
    /// Sequence identifier
    #[arg(required = true)]
    pub identifier: String,

    /// Output FASTA path
    #[arg(required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

/// Execute sequence subcommand
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the sequence cannot be fetched.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SequenceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    let mode = CoordinateMode::from(args.mode);

    if verbose {
        eprintln!(
            "Loaded {} sequences; fetching {} ({mode} coordinates)",
            access.repository().len(),
            args.identifier
        );
    }

    let sequence = access.get_reference_sequence(&args.identifier, args.start, args.end, mode)?;

    match format {
        OutputFormat::Text => println!("{sequence}"),
        OutputFormat::Json => {
            let output = json!({
                "identifier": args.identifier,
                "start": args.start,
                "end": args.end,
                "mode": mode,
                "length": sequence.len(),
                "sequence": sequence,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("identifier\tlength\tsequence");
            println!("{}\t{}\t{sequence}", args.identifier, sequence.len());
        }
    }

    Ok(())
}

/// Execute fasta subcommand
///
/// # Errors
///
/// Returns an error if the identifier is unknown or the file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_fasta(args: FastaArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    access.get_fasta_file(&args.identifier, &args.output)?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "identifier": args.identifier,
                "output": args.output.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            if verbose {
                eprintln!("Wrote {} to {}", args.identifier, args.output.display());
            }
        }
    }

    Ok(())
}
