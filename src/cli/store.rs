use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::repository::SequenceStore;

#[derive(Args)]
pub struct StoreExportArgs {
    /// Output JSON path
    #[arg(required = true)]
    pub output: PathBuf,

    /// FASTA file of sequences (plain or gzip)
    #[arg(long, required = true)]
    pub fasta: PathBuf,

    /// Alias table for the FASTA records
    #[arg(long)]
    pub aliases: Option<PathBuf>,

    /// Namespace under which FASTA record names are registered
    #[arg(long, default_value = "refseq")]
    pub namespace: String,
}

/// Execute store-export subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StoreExportArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let store = SequenceStore::from_fasta(&args.fasta, args.aliases.as_deref(), Some(&args.namespace))?;
    let alias_count: usize = store.records.iter().map(|r| r.aliases.len()).sum();

    let json = store.to_json()?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "output": args.output.display().to_string(),
                "sequences": store.len(),
                "aliases": alias_count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            if verbose {
                eprintln!(
                    "Exported {} sequences with {alias_count} aliases to {}",
                    store.len(),
                    args.output.display()
                );
            }
        }
    }

    Ok(())
}
