//! JSON output formatter

use super::{OutputFormatter, PhraseRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs phrase records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<PhraseRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &PhraseRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
