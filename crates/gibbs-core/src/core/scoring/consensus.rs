use super::{ScoringError, shared_motif_length};
use crate::core::models::motif::Motif;
use crate::core::models::nucleotide::{ALPHABET, ALPHABET_SIZE, Nucleotide, write_symbols};
use std::fmt;

/// Per-position majority symbols of a motif set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Consensus {
    symbols: Vec<Nucleotide>,
}

impl Consensus {
    pub fn symbols(&self) -> &[Nucleotide] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of positions at which `motif` disagrees with this consensus.
    pub fn hamming_distance(&self, motif: &Motif) -> usize {
        self.symbols
            .iter()
            .zip(motif.residues())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Consensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_symbols(f, &self.symbols)
    }
}

fn column_counts(motifs: &[Motif], position: usize) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0; ALPHABET_SIZE];
    for motif in motifs {
        counts[motif.residues()[position].index()] += 1;
    }
    counts
}

/// Derives the consensus of `motifs`.
///
/// At each position the most frequent symbol wins; ties go to the symbol that comes first
/// in `A, C, G, T` order.
pub fn consensus(motifs: &[Motif]) -> Result<Consensus, ScoringError> {
    let k = shared_motif_length(motifs)?;
    let symbols = (0..k)
        .map(|position| {
            let counts = column_counts(motifs, position);
            let max_count = counts.iter().copied().max().unwrap_or(0);
            ALPHABET
                .iter()
                .copied()
                .find(|nucleotide| counts[nucleotide.index()] == max_count)
                .unwrap_or(Nucleotide::A)
        })
        .collect();
    Ok(Consensus { symbols })
}

/// Total number of mismatches between every motif and the consensus. Zero means all motifs
/// are identical.
pub fn score(motifs: &[Motif]) -> Result<usize, ScoringError> {
    let consensus = consensus(motifs)?;
    Ok(score_against(&consensus, motifs))
}

pub fn score_against(consensus: &Consensus, motifs: &[Motif]) -> usize {
    motifs
        .iter()
        .map(|motif| consensus.hamming_distance(motif))
        .sum()
}
