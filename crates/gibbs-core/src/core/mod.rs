//! # Core Module
//!
//! The stateless foundation of the library: sequence and motif models, the pure scoring
//! functions used by the sampler, and file I/O for sequences and run reports.
//!
//! ## Architecture
//!
//! - **Models** ([`models`]) - Nucleotides, sequences, motifs and motif sets
//! - **Scoring** ([`scoring`]) - Profile construction, most-probable window scanning and
//!   consensus scoring
//! - **File I/O** ([`io`]) - FASTA / plain-text sequence files and CSV restart reports
//!
//! Every function in this layer is deterministic. Randomness only enters through the
//! [`crate::engine`] layer.

pub mod io;
pub mod models;
pub mod scoring;
