//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    /// Read a file as sentences, one per non-empty line
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
