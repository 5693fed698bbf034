//! CLI command implementations

use crate::error::{CliError, CliResult};
use crate::output::PhraseRecord;
use clap::Subcommand;
use phrasal_core::{Grammar, PhraseChunker};
use std::path::{Path, PathBuf};

pub mod generate_grammar;
pub mod interactive;
pub mod parse;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Chunk sentences from files or the command line
    Parse(parse::ParseArgs),

    /// Run the menu-driven interactive mode
    Interactive(interactive::InteractiveArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a grammar definition template
    GenerateGrammar(generate_grammar::GenerateGrammarArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List phrase types of the active grammar
    PhraseTypes {
        /// Grammar definition file (defaults to the built-in grammar)
        #[arg(short, long, value_name = "FILE")]
        grammar: Option<PathBuf>,
    },

    /// List available output formats
    Formats,
}

/// Execute a list subcommand
pub fn execute_list(command: &ListCommands) -> CliResult<()> {
    match command {
        ListCommands::PhraseTypes { grammar } => {
            let grammar = load_grammar(grammar.as_deref())?;
            println!("Phrase types in grammar '{}':", grammar.name());
            for entry in grammar.entries() {
                println!(
                    "  {:<6} tag prefixes: {}",
                    entry.label,
                    entry.prefixes.join(", ")
                );
            }
        }
        ListCommands::Formats => {
            println!("Available output formats:");
            println!("  csv   - Document, Phrase Type and Phrase columns (default)");
            println!("  text  - one 'Phrase Type: .., Phrase: ..' line per phrase");
            println!("  json  - JSON array of phrase records");
        }
    }
    Ok(())
}

/// Load the grammar for a command, falling back to the built-in default
pub(crate) fn load_grammar(path: Option<&Path>) -> CliResult<Grammar> {
    match path {
        Some(path) => Grammar::from_file(path)
            .map_err(|err| CliError::GrammarConfig(err.to_string()).into()),
        None => Ok(Grammar::default()),
    }
}

/// Chunk one sentence into its phrase records
pub(crate) fn chunk_document(
    processor: &PhraseChunker,
    document: &str,
) -> CliResult<Vec<PhraseRecord>> {
    let output = processor.process_text(document)?;
    log::debug!(
        "Tagged tokens: {}",
        output
            .tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );

    let document = document.trim();
    Ok(output
        .phrases()
        .map(|(phrase_type, phrase)| PhraseRecord {
            document: document.to_string(),
            phrase_type: phrase_type.to_string(),
            phrase,
        })
        .collect())
}
