use clap::Parser;
use tracing_subscriber::EnvFilter;

use seq_resolver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("seq_resolver=debug,info")
    } else {
        EnvFilter::new("seq_resolver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Sequence(args) => {
            cli::sequence::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Translate(args) => {
            cli::translate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Aliases(args) => {
            cli::translate::run_aliases(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Chromosome(args) => {
            cli::translate::run_chromosome(args, cli.format, cli.verbose)?;
        }
        cli::Commands::AccessionChromosome(args) => {
            cli::translate::run_accession_chromosome(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Fasta(args) => {
            cli::sequence::run_fasta(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Overlap(args) => {
            cli::overlap::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::StoreExport(args) => {
            cli::store::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
