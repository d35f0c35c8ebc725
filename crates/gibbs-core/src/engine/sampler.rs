use super::error::EngineError;
use crate::core::models::motif::MotifSet;
use crate::core::models::sequence::Sequence;
use crate::core::scoring::profile::Profile;
use crate::core::scoring::scanner;
use rand::Rng;
use tracing::{instrument, trace};

/// Performs one Gibbs step: picks a uniformly random index `i`, builds a profile from every
/// other motif and replaces motif `i` with the most probable window of sequence `i`.
///
/// The input motif set is left untouched; at most one entry of the returned set differs
/// from it.
pub fn gibbs_step(
    sequences: &[Sequence],
    motifs: &MotifSet,
    rng: &mut impl Rng,
) -> Result<MotifSet, EngineError> {
    let t = motifs.len();
    if t != sequences.len() {
        return Err(EngineError::InvalidInput(format!(
            "motif set has {} entries but there are {} sequences",
            t,
            sequences.len()
        )));
    }
    if t < 2 {
        return Err(EngineError::EmptyInput(
            "a Gibbs step needs at least two motifs".to_string(),
        ));
    }

    let index = rng.gen_range(0..t);
    let profile = Profile::from_motifs(&motifs.without(index))?;
    let replacement = scanner::most_probable(&sequences[index], motifs.motif_length(), &profile)?;

    trace!(
        index,
        offset = replacement.offset,
        motif = %replacement,
        "Resampled motif."
    );
    Ok(motifs.with_replaced(index, replacement)?)
}

/// Runs one restart: seeds the motif set with the first `k` symbols of every sequence and
/// applies exactly `iterations` Gibbs steps.
#[instrument(level = "debug", skip_all, fields(k = k, iterations = iterations))]
pub fn run_chain(
    sequences: &[Sequence],
    k: usize,
    iterations: usize,
    rng: &mut impl Rng,
) -> Result<MotifSet, EngineError> {
    let mut motifs = MotifSet::from_prefixes(sequences, k)?;
    for _ in 0..iterations {
        motifs = gibbs_step(sequences, &motifs, rng)?;
    }
    Ok(motifs)
}
