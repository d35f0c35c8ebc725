use super::{ScoringError, shared_motif_length};
use crate::core::models::motif::Motif;
use crate::core::models::nucleotide::{ALPHABET_SIZE, Nucleotide};
use nalgebra::Matrix4xX;

const PSEUDOCOUNT: f64 = 1.0;

/// Position-specific probability matrix with one row per nucleotide (in `ALPHABET` order)
/// and one column per motif position.
///
/// Every column sums to one and no cell is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    matrix: Matrix4xX<f64>,
}

impl Profile {
    /// Builds a Laplace-smoothed profile from `motifs`.
    ///
    /// Cell `(s, j)` is `(count of s at position j + 1) / (motifs.len() + 4)`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::EmptyInput`] when `motifs` is empty and
    /// [`ScoringError::InvalidInput`] when the motifs do not share one positive length.
    pub fn from_motifs(motifs: &[&Motif]) -> Result<Self, ScoringError> {
        let k = shared_motif_length(motifs.iter().copied())?;

        let mut matrix = Matrix4xX::from_element(k, PSEUDOCOUNT);
        for motif in motifs {
            for (position, nucleotide) in motif.residues().iter().enumerate() {
                matrix[(nucleotide.index(), position)] += 1.0;
            }
        }

        let denominator = motifs.len() as f64 + ALPHABET_SIZE as f64 * PSEUDOCOUNT;
        matrix /= denominator;

        Ok(Self { matrix })
    }

    pub fn width(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn matrix(&self) -> &Matrix4xX<f64> {
        &self.matrix
    }

    #[inline]
    pub fn get(&self, nucleotide: Nucleotide, position: usize) -> f64 {
        self.matrix[(nucleotide.index(), position)]
    }

    /// Product of the per-position probabilities of `window`, which must be exactly as
    /// wide as the profile.
    #[inline]
    pub(crate) fn window_probability(&self, window: &[Nucleotide]) -> f64 {
        window
            .iter()
            .enumerate()
            .map(|(position, &nucleotide)| self.get(nucleotide, position))
            .product()
    }
}
