use super::config::SearchConfig;
use super::error::EngineError;
use crate::core::models::sequence::Sequence;
use tracing::{debug, instrument};

/// Checks every precondition of a search up front so malformed input fails before any
/// restart does work.
#[instrument(level = "debug", skip_all, fields(t = sequences.len(), k = config.motif_length))]
pub fn validate(sequences: &[Sequence], config: &SearchConfig) -> Result<(), EngineError> {
    if sequences.is_empty() {
        return Err(EngineError::EmptyInput(
            "the sequence collection is empty".to_string(),
        ));
    }
    if let Some(index) = sequences.iter().position(|s| s.is_empty()) {
        return Err(EngineError::EmptyInput(format!("sequence {} is empty", index)));
    }
    if let Some(t) = config.sequence_count {
        if t != sequences.len() {
            return Err(EngineError::InvalidInput(format!(
                "expected {} sequences but {} were supplied",
                t,
                sequences.len()
            )));
        }
    }
    if sequences.len() < 2 {
        return Err(EngineError::EmptyInput(
            "at least two sequences are required; excluding one motif would leave an empty profile"
                .to_string(),
        ));
    }
    if config.motif_length == 0 {
        return Err(EngineError::InvalidInput(
            "motif length must be positive".to_string(),
        ));
    }
    if config.iterations == 0 {
        return Err(EngineError::InvalidInput(
            "iteration count must be positive".to_string(),
        ));
    }
    if config.restarts == 0 {
        return Err(EngineError::InvalidInput(
            "restart count must be positive".to_string(),
        ));
    }
    if let Some((index, sequence)) = sequences
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() < config.motif_length)
    {
        return Err(EngineError::InvalidInput(format!(
            "motif length {} exceeds the length {} of sequence {}",
            config.motif_length,
            sequence.len(),
            index
        )));
    }

    debug!("Input validated.");
    Ok(())
}
