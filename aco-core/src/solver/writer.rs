#[cfg(test)]
#[path = "../../tests/unit/solver/writer_test.rs"]
mod writer_test;

use crate::utils::GenericResult;

/// Accepts tour lengths of all agents once per completed iteration.
pub trait ScoreWriter {
    /// Writes tour lengths of one iteration in agent order.
    fn write(&mut self, lengths: &[f64]) -> GenericResult<()>;

    /// Flushes written data to the underlying storage. Called once the run is finished.
    fn flush(&mut self) -> GenericResult<()>;
}

/// Keeps all scores in memory: one row per iteration.
impl ScoreWriter for Vec<Vec<f64>> {
    fn write(&mut self, lengths: &[f64]) -> GenericResult<()> {
        self.push(lengths.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> GenericResult<()> {
        Ok(())
    }
}
