//! Menu-driven interactive mode: enter sentences by hand or chunk text and
//! CSV files, with results accumulating in a CSV report.

use crate::commands::{chunk_document, load_grammar};
use crate::error::{CliError, CliResult};
use crate::input::{read_csv_sentences, FileReader};
use crate::output::{CsvFormatter, OutputFormatter};
use anyhow::Context;
use clap::Args;
use phrasal_core::PhraseChunker;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Arguments for the interactive command
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// CSV report file the chunked phrases are saved to
    #[arg(short, long, value_name = "FILE", default_value = "phrases.csv")]
    pub output: PathBuf,

    /// Grammar definition file (defaults to the built-in grammar)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,
}

impl InteractiveArgs {
    /// Run the menu loop on stdin and stdout
    pub fn execute(&self) -> CliResult<()> {
        let grammar = load_grammar(self.grammar.as_deref())?;
        let processor = PhraseChunker::with_grammar(grammar);

        let stdin = io::stdin();
        run_menu(
            &mut stdin.lock(),
            &mut io::stdout(),
            &processor,
            &self.output,
        )
    }
}

/// Print the menu and dispatch choices until the user exits.
///
/// End of input is treated as a request to quit, so piped sessions
/// terminate cleanly without an explicit exit choice.
fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    processor: &PhraseChunker,
    report: &Path,
) -> CliResult<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "Menu:")?;
        writeln!(output, "1. Enter a sentence")?;
        writeln!(output, "2. Parse sentences from a text file")?;
        writeln!(output, "3. Parse sentences from a CSV file")?;
        writeln!(output, "4. Exit")?;

        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => enter_sentences(input, output, processor, report)?,
            "2" => chunk_text_file(input, output, processor, report)?,
            "3" => chunk_csv_file(input, output, processor, report)?,
            "4" => {
                writeln!(output, "Exiting!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please choose again.")?,
        }
    }
}

/// Show a prompt and read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> CliResult<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Collect sentences typed at the prompt and write a fresh report
fn enter_sentences<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    processor: &PhraseChunker,
    report: &Path,
) -> CliResult<()> {
    let count = loop {
        let Some(answer) = prompt(input, output, "Enter the number of sentences: ")? else {
            return Ok(());
        };
        match answer.parse::<usize>() {
            Ok(count) if count > 0 => break count,
            _ => writeln!(
                output,
                "Error! Number of sentences must be a positive integer."
            )?,
        }
    };

    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(sentence) = prompt(input, output, "Enter a sentence: ")? else {
            return Ok(());
        };
        sentences.push(sentence);
    }

    let file = File::create(report)
        .with_context(|| format!("Failed to create report file: {}", report.display()))?;
    let mut formatter = CsvFormatter::new(file);
    for sentence in &sentences {
        for record in chunk_document(processor, sentence)? {
            formatter.write_record(&record)?;
        }
    }
    formatter.finish()?;

    writeln!(output, "Sentences saved to {}.", report.display())?;
    Ok(())
}

/// Chunk a text file line by line, echoing phrases and appending to the report
fn chunk_text_file<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    processor: &PhraseChunker,
    report: &Path,
) -> CliResult<()> {
    let Some(path) = prompt(input, output, "Enter the path to the text file: ")? else {
        return Ok(());
    };

    let sentences = match FileReader::read_lines(Path::new(&path)) {
        Ok(sentences) => sentences,
        Err(err) => return report_read_error(output, &err),
    };

    let mut formatter = open_report_for_append(report)?;
    for sentence in &sentences {
        for record in chunk_document(processor, sentence)? {
            writeln!(
                output,
                "Phrase Type: {}, Phrase: {}",
                record.phrase_type, record.phrase
            )?;
            formatter.write_record(&record)?;
        }
    }
    formatter.finish()?;

    writeln!(
        output,
        "Parsing completed. Results saved to {}.",
        report.display()
    )?;
    Ok(())
}

/// Chunk the first column of a CSV file and write a fresh report
fn chunk_csv_file<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    processor: &PhraseChunker,
    report: &Path,
) -> CliResult<()> {
    let Some(path) = prompt(input, output, "Enter the path to the CSV file: ")? else {
        return Ok(());
    };

    let sentences = match read_csv_sentences(Path::new(&path)) {
        Ok(sentences) => sentences,
        Err(err) => return report_read_error(output, &err),
    };

    let file = File::create(report)
        .with_context(|| format!("Failed to create report file: {}", report.display()))?;
    let mut formatter = CsvFormatter::with_document_header(file, "Original Sentence");
    for sentence in &sentences {
        for record in chunk_document(processor, sentence)? {
            formatter.write_record(&record)?;
        }
    }
    formatter.finish()?;

    writeln!(
        output,
        "Parsing completed. Results saved to {}.",
        report.display()
    )?;
    Ok(())
}

/// Open the report for appending, writing a header only when the file is new
fn open_report_for_append(report: &Path) -> CliResult<CsvFormatter<File>> {
    if report.exists() {
        let file = OpenOptions::new()
            .append(true)
            .open(report)
            .with_context(|| format!("Failed to open report file: {}", report.display()))?;
        Ok(CsvFormatter::without_header(file))
    } else {
        let file = File::create(report)
            .with_context(|| format!("Failed to create report file: {}", report.display()))?;
        Ok(CsvFormatter::new(file))
    }
}

/// Tell the user why a source file could not be read and return to the menu
fn report_read_error<W: Write>(output: &mut W, err: &anyhow::Error) -> CliResult<()> {
    if matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::FileNotFound(_))
    ) {
        writeln!(output, "File not found. Please enter a valid file path.")?;
    } else {
        writeln!(output, "An error occurred: {err:#}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(script: &str, report: &Path) -> String {
        let processor = PhraseChunker::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(&mut input, &mut output, &processor, report).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_choice_leaves_the_menu() {
        let dir = TempDir::new().unwrap();
        let transcript = run_script("4\n", &dir.path().join("report.csv"));

        assert!(transcript.contains("Menu:"));
        assert!(transcript.contains("1. Enter a sentence"));
        assert!(transcript.contains("2. Parse sentences from a text file"));
        assert!(transcript.contains("3. Parse sentences from a CSV file"));
        assert!(transcript.contains("Exiting!"));
    }

    #[test]
    fn test_end_of_input_leaves_the_menu() {
        let dir = TempDir::new().unwrap();
        let transcript = run_script("", &dir.path().join("report.csv"));

        assert!(transcript.contains("Menu:"));
        assert!(!transcript.contains("Exiting!"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let dir = TempDir::new().unwrap();
        let transcript = run_script("9\n4\n", &dir.path().join("report.csv"));

        assert!(transcript.contains("Invalid choice. Please choose again."));
        assert!(transcript.contains("Exiting!"));
    }

    #[test]
    fn test_manual_sentences_write_the_report() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.csv");
        let transcript = run_script("1\n2\nThe big dog ran.\nA small cat slept.\n4\n", &report);

        assert!(transcript.contains(&format!("Sentences saved to {}.", report.display())));

        let content = std::fs::read_to_string(&report).unwrap();
        assert!(content.starts_with("Document,Phrase Type,Phrase\n"));
        assert!(content.contains("The big dog ran.,NP,The big dog"));
        assert!(content.contains("The big dog ran.,VP,ran"));
        assert!(content.contains("A small cat slept.,NP,A small cat"));
        assert!(content.contains("A small cat slept.,VP,slept"));
    }

    #[test]
    fn test_sentence_count_must_be_positive() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.csv");
        let transcript = run_script("1\nzero\n0\n1\nThe dog slept.\n4\n", &report);

        let retries = transcript
            .matches("Error! Number of sentences must be a positive integer.")
            .count();
        assert_eq!(retries, 2);

        let content = std::fs::read_to_string(&report).unwrap();
        assert!(content.contains("The dog slept.,NP,The dog"));
    }

    #[test]
    fn test_text_file_appends_without_second_header() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.csv");
        let input_file = dir.path().join("input.txt");
        std::fs::write(&input_file, "The dog slept.\n").unwrap();

        let script = format!("1\n1\nThe big dog ran.\n2\n{}\n4\n", input_file.display());
        let transcript = run_script(&script, &report);

        assert!(transcript.contains("Phrase Type: NP, Phrase: The dog"));
        assert!(transcript.contains("Phrase Type: VP, Phrase: slept"));
        assert!(transcript.contains(&format!(
            "Parsing completed. Results saved to {}.",
            report.display()
        )));

        let content = std::fs::read_to_string(&report).unwrap();
        assert_eq!(content.matches("Document,Phrase Type,Phrase").count(), 1);
        assert!(content.contains("The big dog ran.,NP,The big dog"));
        assert!(content.contains("The dog slept.,NP,The dog"));
    }

    #[test]
    fn test_missing_text_file_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.csv");
        let transcript = run_script("2\n/nonexistent/input.txt\n4\n", &report);

        assert!(transcript.contains("File not found. Please enter a valid file path."));
        assert!(transcript.contains("Exiting!"));
        assert!(!report.exists());
    }

    #[test]
    fn test_csv_file_rewrites_report_with_original_sentence_header() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.csv");
        std::fs::write(&report, "stale rows from an earlier run\n").unwrap();
        let csv_file = dir.path().join("sentences.csv");
        std::fs::write(&csv_file, "Sentence,Author\nThe dog slept.,Ana\n").unwrap();

        let script = format!("3\n{}\n4\n", csv_file.display());
        let transcript = run_script(&script, &report);

        assert!(transcript.contains("Parsing completed."));

        let content = std::fs::read_to_string(&report).unwrap();
        assert!(content.starts_with("Original Sentence,Phrase Type,Phrase\n"));
        assert!(content.contains("The dog slept.,NP,The dog"));
        assert!(!content.contains("stale rows"));
    }
}
