//! # gibbsmotif
//!
//! Randomized motif discovery in DNA sequences using the Gibbs sampling heuristic.
//!
//! Given `t` sequences and a motif length `k`, the sampler looks for one length-`k` window
//! per sequence such that the windows agree as closely as possible with their own consensus.
//! Each iteration re-samples one randomly chosen motif from a Laplace-smoothed profile of all
//! the others; many independent restarts are run and the lowest-scoring result is kept.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Sequence and motif models, the pure scoring functions
//!   (profile construction, most-probable window scanning, consensus scoring) and file I/O.
//!
//! - **[`engine`]: The Logic Core.** Configuration, input validation, the Gibbs step and
//!   single-restart chain, solution state and progress reporting.
//!
//! - **[`workflows`]: The Public API.** The restart driver that runs a complete search.
//!
//! ## Example
//!
//! ```
//! use gibbsmotif::core::models::sequence::Sequence;
//! use gibbsmotif::engine::config::SearchConfigBuilder;
//! use gibbsmotif::engine::progress::ProgressReporter;
//! use gibbsmotif::workflows::search;
//!
//! let sequences: Vec<Sequence> = [
//!     "CGCCCCTCTCGGGGGTGTTCAGTAAACGGCCA",
//!     "GGGCGAGGTATGTGTAAGTGCCAAGGTGCCAG",
//!     "TAGTACCGAGACCGAAAGAAGTATACAGGCGT",
//! ]
//! .iter()
//! .map(|s| s.parse().unwrap())
//! .collect();
//!
//! let config = SearchConfigBuilder::new()
//!     .motif_length(8)
//!     .seed(Some(42))
//!     .build()
//!     .unwrap();
//! let result = search::run(&sequences, &config, &ProgressReporter::new()).unwrap();
//! assert_eq!(result.best.motifs.len(), 3);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
