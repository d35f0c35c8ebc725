use super::ScoringError;
use super::profile::Profile;
use crate::core::models::motif::Motif;
use crate::core::models::sequence::Sequence;

/// Finds the length-`k` window of `sequence` with the highest probability under `profile`.
///
/// Windows are scanned from offset 0 upwards and only a strictly greater probability
/// replaces the current best, so the first of several equally probable windows wins.
///
/// # Errors
///
/// - [`ScoringError::EmptyInput`] if `sequence` is empty.
/// - [`ScoringError::InvalidInput`] if `k` is zero, differs from the profile width, or
///   exceeds the sequence length.
pub fn most_probable(sequence: &Sequence, k: usize, profile: &Profile) -> Result<Motif, ScoringError> {
    if sequence.is_empty() {
        return Err(ScoringError::EmptyInput("cannot scan an empty sequence"));
    }
    if k == 0 || k != profile.width() {
        return Err(ScoringError::InvalidInput(format!(
            "motif length {} does not match profile width {}",
            k,
            profile.width()
        )));
    }
    if sequence.len() < k {
        return Err(ScoringError::InvalidInput(format!(
            "sequence of length {} is shorter than motif length {}",
            sequence.len(),
            k
        )));
    }

    let mut best: Option<(usize, f64)> = None;
    for (offset, window) in sequence.windows(k) {
        let probability = profile.window_probability(window);
        match best {
            Some((_, max)) if probability <= max => {}
            _ => best = Some((offset, probability)),
        }
    }

    let (offset, _) = best.ok_or_else(|| {
        ScoringError::InvalidInput("sequence has no window of the requested length".to_string())
    })?;
    Motif::from_window(sequence, offset, k).ok_or_else(|| {
        ScoringError::InvalidInput(format!("window at offset {} is out of bounds", offset))
    })
}
