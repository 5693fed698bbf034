//! CSV output formatter

use super::{OutputFormatter, PhraseRecord};
use anyhow::Result;
use std::io::Write;

/// CSV formatter with a `Document,Phrase Type,Phrase` header row.
///
/// The first column is named `Original Sentence` instead when the sentences
/// came from a CSV source, and header emission can be disabled entirely for
/// appending to an existing report.
pub struct CsvFormatter<W: Write> {
    writer: csv::Writer<W>,
    document_header: &'static str,
    wrote_header: bool,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a formatter with the standard `Document` header
    pub fn new(writer: W) -> Self {
        Self::with_document_header(writer, "Document")
    }

    /// Create a formatter naming the first column `document_header`
    pub fn with_document_header(writer: W, document_header: &'static str) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            document_header,
            wrote_header: false,
        }
    }

    /// Create a formatter that writes rows only, for appending
    pub fn without_header(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            document_header: "Document",
            wrote_header: true,
        }
    }

    fn ensure_header(&mut self) -> Result<()> {
        if !self.wrote_header {
            self.writer
                .write_record([self.document_header, "Phrase Type", "Phrase"])?;
            self.wrote_header = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for CsvFormatter<W> {
    fn write_record(&mut self, record: &PhraseRecord) -> Result<()> {
        self.ensure_header()?;
        self.writer
            .write_record([&record.document, &record.phrase_type, &record.phrase])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // A report with no phrases still gets its header row
        self.ensure_header()?;
        self.writer.flush()?;
        Ok(())
    }
}
