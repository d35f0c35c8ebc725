//! # Core Models Module
//!
//! Data structures describing the inputs and the mutable search state of the sampler.
//!
//! ## Key Components
//!
//! - [`nucleotide`] - The four-symbol DNA alphabet and its fixed `A, C, G, T` ordering
//! - [`sequence`] - Validated, immutable input sequences
//! - [`motif`] - Length-`k` windows and the per-sequence motif set carried across iterations
//!
//! ## Usage
//!
//! ```
//! use gibbsmotif::core::models::{motif::MotifSet, sequence::Sequence};
//!
//! let sequences: Vec<Sequence> = ["ACGTACGT", "TTACGTAA"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let seed = MotifSet::from_prefixes(&sequences, 4).unwrap();
//! assert_eq!(seed[1].to_string(), "TTAC");
//! ```

pub mod motif;
pub mod nucleotide;
pub mod sequence;
