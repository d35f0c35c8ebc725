use crate::core::io::report::{ReportError, ReportRow, ReportWriter};
use crate::core::models::sequence::Sequence;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampler;
use crate::engine::state::{BestSolution, Solution};
use crate::engine::validation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: Solution,
    pub restarts: Vec<Solution>, // In restart order
}

impl SearchResult {
    pub fn report_rows(&self) -> Vec<ReportRow> {
        self.restarts.iter().map(Solution::to_report_row).collect()
    }

    pub fn write_report(&self, path: &Path) -> Result<(), ReportError> {
        let rows = self.report_rows();
        ReportWriter::create(path)?.write_all(&rows)
    }
}

/// Runs a complete Gibbs motif search.
///
/// The master random generator is seeded from `config.seed`, or from system entropy when
/// no seed is given.
#[instrument(skip_all, name = "gibbs_search_workflow")]
pub fn run(
    sequences: &[Sequence],
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<SearchResult, EngineError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with_rng(sequences, config, reporter, &mut rng)
}

/// Runs a complete Gibbs motif search driven by a caller-supplied master generator.
///
/// One seed per restart is drawn from `rng` before any sampling starts, and every restart
/// samples from its own generator. The result therefore depends only on the state of `rng`,
/// not on how restarts are scheduled across threads.
pub fn run_with_rng(
    sequences: &[Sequence],
    config: &SearchConfig,
    reporter: &ProgressReporter,
    rng: &mut impl Rng,
) -> Result<SearchResult, EngineError> {
    // === Phase 1: Validation ===
    reporter.report(Progress::PhaseStart { name: "Validation" });
    validation::validate(sequences, config)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Independent restarts ===
    reporter.report(Progress::PhaseStart {
        name: "Gibbs Sampling",
    });
    info!(
        t = sequences.len(),
        k = config.motif_length,
        iterations = config.iterations,
        restarts = config.restarts,
        "Starting Gibbs sampling."
    );

    let seeds: Vec<u64> = (0..config.restarts).map(|_| rng.r#gen()).collect();
    reporter.report(Progress::TaskStart {
        total_steps: config.restarts as u64,
    });
    let solutions = run_restarts(sequences, config, &seeds, reporter)?;
    reporter.report(Progress::TaskFinish);

    // === Phase 3: Select the best restart ===
    let mut best = BestSolution::new();
    for solution in &solutions {
        if best.submit(solution.clone()) {
            reporter.report(Progress::Message(format!(
                "Restart {}: new best score {}",
                solution.restart + 1,
                solution.score
            )));
        }
    }
    let best = best
        .into_inner()
        .ok_or_else(|| EngineError::Internal("no restart produced a solution".to_string()))?;
    reporter.report(Progress::PhaseFinish);

    info!(
        score = best.score,
        restart = best.restart,
        consensus = %best.consensus,
        "Search complete."
    );
    Ok(SearchResult {
        best,
        restarts: solutions,
    })
}

fn run_restarts(
    sequences: &[Sequence],
    config: &SearchConfig,
    seeds: &[u64],
    reporter: &ProgressReporter,
) -> Result<Vec<Solution>, EngineError> {
    #[cfg(not(feature = "parallel"))]
    let iterator = seeds.iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = seeds.par_iter().enumerate();

    iterator
        .map(|(restart, &seed)| {
            let solution = run_restart(sequences, config, restart, seed);
            reporter.report(Progress::TaskIncrement);
            solution
        })
        .collect()
}

fn run_restart(
    sequences: &[Sequence],
    config: &SearchConfig,
    restart: usize,
    seed: u64,
) -> Result<Solution, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let motifs = sampler::run_chain(sequences, config.motif_length, config.iterations, &mut rng)?;
    let solution = Solution::evaluate(restart, motifs)?;
    debug!(
        restart,
        score = solution.score,
        consensus = %solution.consensus,
        "Restart finished."
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::SearchConfigBuilder;
    use crate::engine::error::ErrorKind;
    use std::sync::Mutex;

    fn sample_sequences() -> Vec<Sequence> {
        [
            "CGCCCCTCTCGGGGGTGTTCAGTAAACGGCCA",
            "GGGCGAGGTATGTGTAAGTGCCAAGGTGCCAG",
            "TAGTACCGAGACCGAAAGAAGTATACAGGCGT",
            "TAGATCAAGTTTCAGGTGCACGTCGGTGAACC",
            "AATCCACCAGCTCCACGTGCAATGTTGGCCTA",
        ]
        .iter()
        .map(|s| Sequence::new(s).unwrap())
        .collect()
    }

    fn reference_config(seed: u64) -> SearchConfig {
        SearchConfigBuilder::new()
            .motif_length(8)
            .iterations(100)
            .restarts(20)
            .sequence_count(Some(5))
            .seed(Some(seed))
            .build()
            .unwrap()
    }

    #[test]
    fn reference_scenario_yields_well_formed_low_scoring_motifs() {
        let sequences = sample_sequences();
        let result = run(&sequences, &reference_config(42), &ProgressReporter::new()).unwrap();

        assert_eq!(result.best.motifs.len(), 5);
        assert!(result.best.motifs.iter().all(|m| m.len() == 8));
        for (motif, sequence) in result.best.motifs.iter().zip(&sequences) {
            assert_eq!(
                &sequence.residues()[motif.offset..motif.offset + 8],
                motif.residues()
            );
        }
        // Prefix seeding with most-probable replacement settles at 10 on this data set;
        // the textbook optimum of 9 is not reachable from that start.
        assert!(result.best.score <= 10, "score was {}", result.best.score);
    }

    #[test]
    fn best_is_the_earliest_restart_with_the_minimum_score() {
        let sequences = sample_sequences();
        let result = run(&sequences, &reference_config(7), &ProgressReporter::new()).unwrap();

        assert_eq!(result.restarts.len(), 20);
        let min_score = result.restarts.iter().map(|s| s.score).min().unwrap();
        let first_min = result
            .restarts
            .iter()
            .find(|s| s.score == min_score)
            .unwrap();
        assert_eq!(result.best.score, min_score);
        assert_eq!(result.best.restart, first_min.restart);
        assert_eq!(&result.best, first_min);
    }

    #[test]
    fn restarts_are_reported_in_order() {
        let sequences = sample_sequences();
        let result = run(&sequences, &reference_config(3), &ProgressReporter::new()).unwrap();
        let indices: Vec<usize> = result.restarts.iter().map(|s| s.restart).collect();
        assert_eq!(indices, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn fixed_seed_gives_identical_results() {
        let sequences = sample_sequences();
        let a = run(&sequences, &reference_config(2024), &ProgressReporter::new()).unwrap();
        let b = run(&sequences, &reference_config(2024), &ProgressReporter::new()).unwrap();
        assert_eq!(a.best.motifs, b.best.motifs);
        assert_eq!(a.restarts, b.restarts);
    }

    #[test]
    fn run_with_rng_matches_seeded_run() {
        let sequences = sample_sequences();
        let config = reference_config(99);
        let seeded = run(&sequences, &config, &ProgressReporter::new()).unwrap();
        let injected = run_with_rng(
            &sequences,
            &config,
            &ProgressReporter::new(),
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        assert_eq!(seeded.best, injected.best);
    }

    #[test]
    fn sequential_restarts_match_scheduled_run() {
        let sequences = sample_sequences();
        let config = reference_config(31);

        let mut master = StdRng::seed_from_u64(31);
        let seeds: Vec<u64> = (0..config.restarts).map(|_| master.r#gen()).collect();
        let mut best = BestSolution::new();
        let mut sequential = Vec::new();
        for (restart, &seed) in seeds.iter().enumerate() {
            let solution = run_restart(&sequences, &config, restart, seed).unwrap();
            best.submit(solution.clone());
            sequential.push(solution);
        }

        let result = run(&sequences, &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.restarts, sequential);
        assert_eq!(Some(result.best), best.into_inner());
    }

    #[test]
    fn k_equal_to_sequence_length_returns_full_sequences() {
        let sequences: Vec<Sequence> = ["ACGTAC", "TTGACA", "GGCATT"]
            .iter()
            .map(|s| Sequence::new(s).unwrap())
            .collect();
        let config = SearchConfigBuilder::new()
            .motif_length(6)
            .iterations(10)
            .restarts(3)
            .seed(Some(1))
            .build()
            .unwrap();
        let result = run(&sequences, &config, &ProgressReporter::new()).unwrap();
        for (motif, sequence) in result.best.motifs.iter().zip(&sequences) {
            assert_eq!(motif.to_string(), sequence.to_string());
        }
    }

    #[test]
    fn single_sequence_fails_with_empty_input_before_sampling() {
        let sequences = vec![Sequence::new("ACGTACGT").unwrap()];
        let config = SearchConfigBuilder::new()
            .motif_length(4)
            .seed(Some(1))
            .build()
            .unwrap();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let err = run(&sequences, &config, &reporter).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        drop(reporter);
        let events = events.into_inner().unwrap();
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, Progress::TaskStart { .. }))
        );
    }

    #[test]
    fn progress_reports_one_increment_per_restart() {
        let sequences = sample_sequences();
        let mut config = reference_config(5);
        config.restarts = 4;
        config.iterations = 10;
        let increments = Mutex::new(0u64);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::TaskIncrement = event {
                *increments.lock().unwrap() += 1;
            }
        }));

        run(&sequences, &config, &reporter).unwrap();
        drop(reporter);
        assert_eq!(increments.into_inner().unwrap(), 4);
    }

    #[test]
    fn write_report_emits_one_row_per_restart() {
        let sequences = sample_sequences();
        let mut config = reference_config(8);
        config.restarts = 3;
        let result = run(&sequences, &config, &ProgressReporter::new()).unwrap();

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("restarts.csv");
        result.write_report(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "restart,score,consensus,motifs");
        assert!(lines[1].starts_with("0,"));
    }
}
