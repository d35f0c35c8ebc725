//! # Engine Module
//!
//! The stateful layer of the sampler. It owns everything that involves randomness or
//! search state, building on the pure functions of [`crate::core`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Motif length, iteration and restart counts, seed
//! - **Validation** ([`validation`]) - One up-front check of all inputs before sampling
//! - **Sampling** ([`sampler`]) - The single Gibbs step and the single-restart chain
//! - **State Tracking** ([`state`]) - Scored solutions and the best-result holder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error type and its coarse classification

pub mod config;
pub mod error;
pub mod progress;
pub mod sampler;
pub mod state;
pub mod validation;
