//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::engine`] and [`crate::core`] layers into a
//! complete motif search.
//!
//! - **Search Workflow** ([`search`]) - Validation, independent restarts of the Gibbs
//!   sampler, and selection of the lowest-scoring motif set.

pub mod search;
