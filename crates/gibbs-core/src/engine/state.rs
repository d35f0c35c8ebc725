use crate::core::io::report::ReportRow;
use crate::core::models::motif::MotifSet;
use crate::core::scoring::ScoringError;
use crate::core::scoring::consensus::{self, Consensus};

/// The scored outcome of one restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub restart: usize,
    pub score: usize,
    pub consensus: Consensus,
    pub motifs: MotifSet,
}

impl Solution {
    pub fn evaluate(restart: usize, motifs: MotifSet) -> Result<Self, ScoringError> {
        let consensus = consensus::consensus(motifs.motifs())?;
        let score = consensus::score_against(&consensus, motifs.motifs());
        Ok(Self {
            restart,
            score,
            consensus,
            motifs,
        })
    }

    pub fn to_report_row(&self) -> ReportRow {
        ReportRow {
            restart: self.restart,
            score: self.score,
            consensus: self.consensus.to_string(),
            motifs: self
                .motifs
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Holder for the lowest-scoring solution seen so far.
#[derive(Debug, Clone, Default)]
pub struct BestSolution {
    best: Option<Solution>,
}

impl BestSolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `candidate` only if its score is strictly lower than the current best.
    /// Returns whether the holder changed.
    pub fn submit(&mut self, candidate: Solution) -> bool {
        match &self.best {
            Some(current) if candidate.score >= current.score => false,
            _ => {
                self.best = Some(candidate);
                true
            }
        }
    }

    pub fn into_inner(self) -> Option<Solution> {
        self.best
    }
}
