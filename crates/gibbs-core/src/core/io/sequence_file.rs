use crate::core::io::traits::RecordFile;
use crate::core::models::nucleotide::Nucleotide;
use crate::core::models::sequence::{Sequence, SequenceError};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SequenceFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: SequenceError,
    },
    #[error("Sequence data on line {line} appears before any FASTA header")]
    MissingHeader { line: usize },
    #[error("FASTA record '{label}' starting on line {line} has no sequence data")]
    EmptyRecord { line: usize, label: String },
}

/// Reads DNA sequences from FASTA or plain text.
///
/// Blank lines and lines starting with `#` are skipped in both formats. The format is then
/// detected from the first remaining line: a leading `>` selects FASTA, anything else selects
/// plain text with one sequence per line. Symbols are upper-cased before validation, and a
/// rejected symbol is reported with the line it appears on.
pub struct SequenceFile;

struct PendingRecord {
    label: String,
    line: usize, // Line of the `>` header
    residues: Vec<Nucleotide>,
}

impl PendingRecord {
    fn push_line(&mut self, line_no: usize, line: &str) -> Result<(), SequenceFileError> {
        let parsed = parse_line(line_no, line)?;
        self.residues.extend_from_slice(parsed.residues());
        Ok(())
    }

    fn finish(self) -> Result<Sequence, SequenceFileError> {
        match Sequence::from_residues(self.residues) {
            Ok(sequence) => Ok(sequence.labeled(self.label)),
            Err(_) => Err(SequenceFileError::EmptyRecord {
                line: self.line,
                label: self.label,
            }),
        }
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Sequence, SequenceFileError> {
    Sequence::new(&line.to_ascii_uppercase()).map_err(|source| SequenceFileError::Parse {
        line: line_no,
        source,
    })
}

impl SequenceFile {
    fn read_fasta(
        lines: impl Iterator<Item = (usize, String)>,
    ) -> Result<Vec<Sequence>, SequenceFileError> {
        let mut records = Vec::new();
        let mut pending: Option<PendingRecord> = None;

        for (line_no, line) in lines {
            if let Some(header) = line.strip_prefix('>') {
                if let Some(record) = pending.take() {
                    records.push(record.finish()?);
                }
                pending = Some(PendingRecord {
                    label: header.trim().to_string(),
                    line: line_no,
                    residues: Vec::new(),
                });
                continue;
            }
            match pending.as_mut() {
                Some(record) => record.push_line(line_no, &line)?,
                None => return Err(SequenceFileError::MissingHeader { line: line_no }),
            }
        }

        if let Some(record) = pending.take() {
            records.push(record.finish()?);
        }
        Ok(records)
    }

    fn read_plain(
        lines: impl Iterator<Item = (usize, String)>,
    ) -> Result<Vec<Sequence>, SequenceFileError> {
        lines
            .map(|(line_no, line)| parse_line(line_no, &line))
            .collect()
    }
}

impl RecordFile for SequenceFile {
    type Record = Sequence;
    type Error = SequenceFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Sequence>, SequenceFileError> {
        let mut lines = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                lines.push((i + 1, trimmed.to_string()));
            }
        }

        let is_fasta = lines
            .first()
            .is_some_and(|(_, line)| line.starts_with('>'));

        let sequences = if is_fasta {
            Self::read_fasta(lines.into_iter())?
        } else {
            Self::read_plain(lines.into_iter())?
        };
        debug!(
            count = sequences.len(),
            fasta = is_fasta,
            "Parsed sequence file."
        );
        Ok(sequences)
    }
}
