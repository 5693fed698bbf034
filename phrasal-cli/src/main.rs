//! phrasal command line entry point

use clap::Parser;
use phrasal_cli::commands::{self, Commands};

/// Command line interface for grammar-driven phrase chunking
#[derive(Parser)]
#[command(name = "phrasal", version, about = "Grammar-driven phrase chunking for text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Interactive(args) => args.execute(),
        Commands::List { subcommand } => commands::execute_list(&subcommand),
        Commands::GenerateGrammar(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
