//! Plain text output formatter

use super::{OutputFormatter, PhraseRecord};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one `Phrase Type: .., Phrase: ..` line per record
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &PhraseRecord) -> Result<()> {
        writeln!(
            self.writer,
            "Phrase Type: {}, Phrase: {}",
            record.phrase_type, record.phrase
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
