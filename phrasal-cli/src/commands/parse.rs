//! Parse command implementation

use crate::commands::{chunk_document, load_grammar};
use crate::error::CliResult;
use crate::input::{read_csv_sentences, resolve_patterns, FileReader};
use crate::output::{CsvFormatter, JsonFormatter, OutputFormatter, PhraseRecord, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Context;
use clap::Args;
use phrasal_core::PhraseChunker;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text"
    )]
    pub input: Vec<String>,

    /// Sentences passed directly on the command line
    #[arg(short, long, value_name = "SENTENCE")]
    pub text: Vec<String>,

    /// Treat input files as CSV and chunk the first column
    #[arg(long)]
    pub csv: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Grammar definition file (defaults to the built-in grammar)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV rows under a Document, Phrase Type and Phrase header
    Csv,
    /// One "Phrase Type: .., Phrase: .." line per phrase
    Text,
    /// JSON array of phrase records
    Json,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        let grammar = load_grammar(self.grammar.as_deref())?;
        log::info!("Using grammar '{}'", grammar.name());
        let processor = PhraseChunker::with_grammar(grammar);

        let mut records: Vec<PhraseRecord> = Vec::new();
        for sentence in &self.text {
            records.extend(chunk_document(&processor, sentence)?);
        }

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Chunking {} file(s)", files.len());

            // Files run in parallel; record order still follows input order.
            let progress = ProgressReporter::new(self.quiet, files.len() as u64);
            let per_file: Vec<Vec<PhraseRecord>> = files
                .par_iter()
                .map(|path| {
                    let result = self.chunk_file(&processor, path);
                    progress.file_completed(&path.display().to_string());
                    result
                })
                .collect::<CliResult<_>>()?;
            progress.finish();

            records.extend(per_file.into_iter().flatten());
        }

        self.write_records(&records)?;
        log::info!("Reported {} phrase(s)", records.len());
        Ok(())
    }

    /// Chunk every sentence of one input file
    fn chunk_file(&self, processor: &PhraseChunker, path: &Path) -> CliResult<Vec<PhraseRecord>> {
        let sentences = if self.csv {
            read_csv_sentences(path)?
        } else {
            FileReader::read_lines(path)?
        };

        let mut records = Vec::new();
        for sentence in &sentences {
            records.extend(chunk_document(processor, sentence)?);
        }
        Ok(records)
    }

    fn write_records(&self, records: &[PhraseRecord]) -> CliResult<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter = self.create_formatter(writer);
        for record in records {
            formatter.write_record(record)?;
        }
        formatter.finish()
    }

    fn create_formatter(&self, writer: Box<dyn Write + Send + Sync>) -> Box<dyn OutputFormatter> {
        // CSV-sourced sentences keep their traditional column name
        let document_header = if self.csv { "Original Sentence" } else { "Document" };

        match self.format {
            OutputFormat::Csv => {
                Box::new(CsvFormatter::with_document_header(writer, document_header))
            }
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }
    }
}
