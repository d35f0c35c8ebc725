use super::nucleotide::{Nucleotide, write_symbols};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,
    #[error("Invalid symbol '{symbol}' at position {position}; only A, C, G and T are accepted")]
    InvalidSymbol { symbol: char, position: usize },
}

/// An immutable DNA sequence over {A, C, G, T}.
///
/// Validation happens once, at construction; every sequence that exists is guaranteed to be
/// non-empty and free of ambiguity codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    label: Option<String>,
    residues: Vec<Nucleotide>,
}

impl Sequence {
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        if text.is_empty() {
            return Err(SequenceError::Empty);
        }
        let residues = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Nucleotide::try_from(symbol)
                    .map_err(|symbol| SequenceError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            label: None,
            residues,
        })
    }

    pub fn with_label(text: &str, label: impl Into<String>) -> Result<Self, SequenceError> {
        Self::new(text).map(|sequence| sequence.labeled(label))
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn from_residues(residues: Vec<Nucleotide>) -> Result<Self, SequenceError> {
        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self {
            label: None,
            residues,
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn residues(&self) -> &[Nucleotide] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Iterates over every length-`k` window together with its start offset.
    pub fn windows(&self, k: usize) -> impl Iterator<Item = (usize, &[Nucleotide])> {
        self.residues.windows(k.max(1)).enumerate().filter(move |_| k > 0)
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_symbols(f, &self.residues)
    }
}
