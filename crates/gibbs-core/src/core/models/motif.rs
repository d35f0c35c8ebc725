use super::nucleotide::{Nucleotide, write_symbols};
use super::sequence::Sequence;
use std::fmt;
use std::ops::Index;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MotifSetError {
    #[error("Motif set is empty")]
    Empty,
    #[error("Motif length must be positive")]
    ZeroLength,
    #[error("Motif {index} has length {found}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("Motif length {k} exceeds the length {length} of sequence {index}")]
    SequenceTooShort {
        index: usize,
        length: usize,
        k: usize,
    },
    #[error("Index {index} is out of bounds for a motif set of size {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A length-`k` window taken from one input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Motif {
    pub offset: usize, // Start position of the window in its source sequence
    residues: Vec<Nucleotide>,
}

impl Motif {
    pub fn new(offset: usize, residues: Vec<Nucleotide>) -> Self {
        Self { offset, residues }
    }

    /// Copies `k` residues of `sequence` starting at `offset`.
    pub fn from_window(sequence: &Sequence, offset: usize, k: usize) -> Option<Self> {
        sequence
            .residues()
            .get(offset..offset.checked_add(k)?)
            .map(|window| Self::new(offset, window.to_vec()))
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
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_symbols(f, &self.residues)
    }
}

/// One motif per input sequence, all sharing the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotifSet {
    motifs: Vec<Motif>,
    motif_length: usize,
}

impl MotifSet {
    pub fn new(motifs: Vec<Motif>) -> Result<Self, MotifSetError> {
        let motif_length = motifs.first().ok_or(MotifSetError::Empty)?.len();
        if motif_length == 0 {
            return Err(MotifSetError::ZeroLength);
        }
        if let Some((index, motif)) = motifs
            .iter()
            .enumerate()
            .find(|(_, motif)| motif.len() != motif_length)
        {
            return Err(MotifSetError::LengthMismatch {
                index,
                expected: motif_length,
                found: motif.len(),
            });
        }
        Ok(Self {
            motifs,
            motif_length,
        })
    }

    /// Seeds a motif set with the first `k` symbols of every sequence.
    pub fn from_prefixes(sequences: &[Sequence], k: usize) -> Result<Self, MotifSetError> {
        if k == 0 {
            return Err(MotifSetError::ZeroLength);
        }
        let motifs = sequences
            .iter()
            .enumerate()
            .map(|(index, sequence)| {
                Motif::from_window(sequence, 0, k).ok_or(MotifSetError::SequenceTooShort {
                    index,
                    length: sequence.len(),
                    k,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(motifs)
    }

    pub fn motif_length(&self) -> usize {
        self.motif_length
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Motif> {
        self.motifs.iter()
    }

    /// All motifs except the one at `excluded`, in their original order.
    pub fn without(&self, excluded: usize) -> Vec<&Motif> {
        self.motifs
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != excluded)
            .map(|(_, motif)| motif)
            .collect()
    }

    /// Returns a copy with the motif at `index` replaced.
    pub fn with_replaced(&self, index: usize, motif: Motif) -> Result<Self, MotifSetError> {
        if index >= self.motifs.len() {
            return Err(MotifSetError::IndexOutOfBounds {
                index,
                len: self.motifs.len(),
            });
        }
        if motif.len() != self.motif_length {
            return Err(MotifSetError::LengthMismatch {
                index,
                expected: self.motif_length,
                found: motif.len(),
            });
        }
        let mut motifs = self.motifs.clone();
        motifs[index] = motif;
        Ok(Self {
            motifs,
            motif_length: self.motif_length,
        })
    }

    pub fn into_motifs(self) -> Vec<Motif> {
        self.motifs
    }
}

impl Index<usize> for MotifSet {
    type Output = Motif;

    fn index(&self, index: usize) -> &Self::Output {
        &self.motifs[index]
    }
}

impl<'a> IntoIterator for &'a MotifSet {
    type Item = &'a Motif;
    type IntoIter = std::slice::Iter<'a, Motif>;

    fn into_iter(self) -> Self::IntoIter {
        self.motifs.iter()
    }
}

impl fmt::Display for MotifSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, motif) in self.motifs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", motif)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motif(text: &str) -> Motif {
        Motif::new(0, Sequence::new(text).unwrap().residues().to_vec())
    }

    fn sequences(texts: &[&str]) -> Vec<Sequence> {
        texts.iter().map(|t| Sequence::new(t).unwrap()).collect()
    }

    #[test]
    fn from_window_copies_requested_slice() {
        let sequence = Sequence::new("GATTACA").unwrap();
        let window = Motif::from_window(&sequence, 2, 3).unwrap();
        assert_eq!(window.to_string(), "TTA");
        assert_eq!(window.offset, 2);
    }

    #[test]
    fn from_window_returns_none_past_end() {
        let sequence = Sequence::new("GATTACA").unwrap();
        assert!(Motif::from_window(&sequence, 5, 3).is_none());
        assert!(Motif::from_window(&sequence, usize::MAX, 2).is_none());
    }

    #[test]
    fn new_rejects_empty_and_mismatched_sets() {
        assert_eq!(MotifSet::new(Vec::new()), Err(MotifSetError::Empty));
        assert_eq!(
            MotifSet::new(vec![motif("ACG"), motif("ACGT")]),
            Err(MotifSetError::LengthMismatch {
                index: 1,
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            MotifSet::new(vec![Motif::new(0, Vec::new())]),
            Err(MotifSetError::ZeroLength)
        );
    }

    #[test]
    fn from_prefixes_takes_first_k_symbols() {
        let set = MotifSet::from_prefixes(&sequences(&["ACGTAA", "TTTTCC"]), 4).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.motif_length(), 4);
        assert_eq!(set[0].to_string(), "ACGT");
        assert_eq!(set[1].to_string(), "TTTT");
        assert!(set.iter().all(|m| m.offset == 0));
    }

    #[test]
    fn from_prefixes_reports_short_sequence() {
        let err = MotifSet::from_prefixes(&sequences(&["ACGTAA", "TT"]), 4).unwrap_err();
        assert_eq!(
            err,
            MotifSetError::SequenceTooShort {
                index: 1,
                length: 2,
                k: 4
            }
        );
    }

    #[test]
    fn without_skips_only_the_excluded_index() {
        let set = MotifSet::new(vec![motif("AAA"), motif("CCC"), motif("GGG")]).unwrap();
        let rest: Vec<String> = set.without(1).iter().map(|m| m.to_string()).collect();
        assert_eq!(rest, vec!["AAA", "GGG"]);
    }

    #[test]
    fn with_replaced_changes_single_entry() {
        let set = MotifSet::new(vec![motif("AAA"), motif("CCC")]).unwrap();
        let updated = set.with_replaced(1, motif("TTT")).unwrap();
        assert_eq!(updated[0], set[0]);
        assert_eq!(updated[1].to_string(), "TTT");
        assert_eq!(set[1].to_string(), "CCC");
    }

    #[test]
    fn with_replaced_rejects_bad_index_or_length() {
        let set = MotifSet::new(vec![motif("AAA"), motif("CCC")]).unwrap();
        assert_eq!(
            set.with_replaced(2, motif("TTT")),
            Err(MotifSetError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert!(matches!(
            set.with_replaced(0, motif("TT")),
            Err(MotifSetError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn display_prints_one_motif_per_line() {
        let set = MotifSet::new(vec![motif("ACG"), motif("TTT")]).unwrap();
        assert_eq!(set.to_string(), "ACG\nTTT");
    }
}
