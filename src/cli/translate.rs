use clap::Args;
use serde_json::json;

use crate::access::SequenceAccess;
use crate::cli::{OutputFormat, RepositoryArgs};

#[derive(Args)]
pub struct TranslateArgs {
    /// Identifier to translate, optionally namespace-qualified
    #[arg(required = true)]
    pub identifier: String,

    /// Only report aliases in these namespaces (repeatable)
    #[arg(long = "target")]
    pub targets: Vec<String>,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

#[derive(Args)]
pub struct AliasesArgs {
    /// Alias-index key, used verbatim
    #[arg(required = true)]
    pub alias: String,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

#[derive(Args)]
pub struct ChromosomeArgs {
    /// Chromosome name (1-22, X, Y)
    #[arg(required = true)]
    pub chromosome: String,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

#[derive(Args)]
pub struct AccessionChromosomeArgs {
    /// Chromosome-scale accession (e.g. `NC_000007.14`)
    #[arg(required = true)]
    pub accession: String,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

/// Execute translate subcommand
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the identifier is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TranslateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    let targets: Vec<&str> = args.targets.iter().map(String::as_str).collect();
    let filter = (!targets.is_empty()).then_some(targets.as_slice());

    let aliases = access.translate_identifier(&args.identifier, filter)?;
    if verbose {
        eprintln!("{} aliases for {}", aliases.len(), args.identifier);
    }
    print_aliases(&args.identifier, &aliases, format)
}

/// Execute aliases subcommand
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the alias is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_aliases(args: AliasesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    let aliases = access.translate_alias(&args.alias)?;
    if verbose {
        eprintln!("{} aliases for {}", aliases.len(), args.alias);
    }
    print_aliases(&args.alias, &aliases, format)
}

/// Execute chromosome subcommand
///
/// # Errors
///
/// Returns an error if the chromosome is invalid or has no accessions.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_chromosome(args: ChromosomeArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    let accessions = access.chromosome_to_acs(&args.chromosome)?;

    match format {
        OutputFormat::Text => {
            for ac in &accessions {
                println!("{ac}");
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "chromosome": args.chromosome,
                "accessions": accessions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("chromosome\taccession");
            for ac in &accessions {
                println!("{}\t{ac}", args.chromosome);
            }
        }
    }

    Ok(())
}

/// Execute accession-chromosome subcommand
///
/// # Errors
///
/// Returns an error if the accession has no chromosome.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_accession_chromosome(
    args: AccessionChromosomeArgs,
    format: OutputFormat,
    _verbose: bool,
) -> anyhow::Result<()> {
    let access = SequenceAccess::new(args.repository.open()?);
    let chromosome = access.ac_to_chromosome(&args.accession)?;

    match format {
        OutputFormat::Text => println!("{chromosome}"),
        OutputFormat::Json => {
            let output = json!({
                "accession": args.accession,
                "chromosome": chromosome,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("accession\tchromosome");
            println!("{}\t{chromosome}", args.accession);
        }
    }

    Ok(())
}

fn print_aliases(query: &str, aliases: &[String], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for alias in aliases {
                println!("{alias}");
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "query": query,
                "aliases": aliases,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("query\tnamespace\talias");
            for alias in aliases {
                let (namespace, value) = alias.split_once(':').unwrap_or(("", alias));
                println!("{query}\t{namespace}\t{value}");
            }
        }
    }
    Ok(())
}
