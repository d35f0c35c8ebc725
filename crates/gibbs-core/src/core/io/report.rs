use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),
}

/// One line of a restart report: the outcome of a single independent sampler run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub restart: usize,
    pub score: usize,
    pub consensus: String,
    pub motifs: String, // Motifs of the run joined with ';'
}

pub struct ReportWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl ReportWriter<std::fs::File> {
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = std::fs::File::create(path).map_err(|e| ReportError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e.into(),
        })?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            inner: csv::Writer::from_writer(writer),
        }
    }

    fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError> {
        self.inner.serialize(row)?;
        Ok(())
    }

    pub fn write_all<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a ReportRow>,
    ) -> Result<(), ReportError> {
        for row in rows {
            self.write_row(row)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.inner.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
