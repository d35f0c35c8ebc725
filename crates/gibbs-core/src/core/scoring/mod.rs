//! Pure scoring functions used by the Gibbs sampler.
//!
//! - [`profile`] - Laplace-smoothed position-specific probability matrices
//! - [`scanner`] - Most-probable window search under a profile
//! - [`consensus`] - Consensus string derivation and Hamming-sum scoring
//!
//! All three agree on symbol ordering through [`crate::core::models::nucleotide::ALPHABET`].

use thiserror::Error;

pub mod consensus;
pub mod profile;
pub mod scanner;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScoringError {
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Checks that `motifs` is non-empty and every entry shares one positive length.
pub(crate) fn shared_motif_length<'a, I>(motifs: I) -> Result<usize, ScoringError>
where
    I: IntoIterator<Item = &'a crate::core::models::motif::Motif>,
{
    let mut iter = motifs.into_iter();
    let first = iter
        .next()
        .ok_or(ScoringError::EmptyInput("no motifs were supplied"))?;
    let k = first.len();
    if k == 0 {
        return Err(ScoringError::InvalidInput(
            "motif length must be positive".to_string(),
        ));
    }
    for (i, motif) in iter.enumerate() {
        if motif.len() != k {
            return Err(ScoringError::InvalidInput(format!(
                "motif {} has length {}, expected {}",
                i + 1,
                motif.len(),
                k
            )));
        }
    }
    Ok(k)
}
