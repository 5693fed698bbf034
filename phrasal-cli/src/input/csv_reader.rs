//! Sentence extraction from CSV files
//!
//! Sentences live in the first column; the header row is skipped and any
//! further columns are ignored.

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::Path;

/// Read the first-column sentences of a CSV file
pub fn read_csv_sentences(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => {
            anyhow::Error::from(CliError::FileNotFound(path.display().to_string()))
        }
        _ => anyhow::Error::from(err)
            .context(format!("Failed to open CSV file: {}", path.display())),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut sentences = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
        if let Some(sentence) = record.get(0) {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        }
    }

    Ok(sentences)
}
