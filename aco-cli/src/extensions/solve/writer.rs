//! Contains a score writer which writes tour lengths in CSV format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/writer_test.rs"]
mod writer_test;

use aco_core::solver::ScoreWriter;
use aco_core::utils::{GenericError, GenericResult};
use std::io::Write;

/// Writes tour lengths of each iteration as a CSV row without header: one column per agent.
pub struct CsvScoreWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvScoreWriter<W> {
    /// Creates a new instance of `CsvScoreWriter`.
    pub fn new(writer: W) -> Self {
        Self { writer: csv::WriterBuilder::new().has_headers(false).from_writer(writer) }
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn into_inner(self) -> GenericResult<W> {
        self.writer.into_inner().map_err(|err| format!("cannot get csv writer: '{err}'").into())
    }
}

impl<W: Write> ScoreWriter for CsvScoreWriter<W> {
    fn write(&mut self, lengths: &[f64]) -> GenericResult<()> {
        self.writer
            .write_record(lengths.iter().map(|length| length.to_string()))
            .map_err(|err| GenericError::from(format!("cannot write scores: '{err}'")))
    }

    fn flush(&mut self) -> GenericResult<()> {
        self.writer.flush().map_err(GenericError::from)
    }
}
