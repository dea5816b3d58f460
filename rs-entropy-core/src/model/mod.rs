//! Top-level module for the Markov text model.
//!
//! This module provides an order-k statistical model over token
//! streams, including:
//! - Fixed-order model construction (`MarkovModel`)
//! - Entropy-rate estimation in bits per token
//! - Weighted sampling of successors and seeds (`FrequencyTable`)
//! - A step-by-step generation interface (`Generator`)
//! - The shared error taxonomy (`ModelError`)

/// Error taxonomy shared by model construction, estimation and
/// generation.
pub mod error;

/// Successor frequency table with weighted random sampling.
///
/// Tracks observation counts per outcome and samples outcomes with
/// probability proportional to count, in a documented scan order.
pub mod frequency;

/// Step-by-step sequence generator (`Iterator` over drawn tokens).
///
/// Seeds itself from the model at construction, then emits one token
/// per step until the requested length or the first error.
pub mod generator;

/// Fixed-order Markov model (`order >= 1`).
///
/// Handles token-stream ingestion, transition counting, entropy-rate
/// estimation and weighted seed selection.
pub mod markov_model;

/// Sliding context window over the most recent tokens.
///
/// Tracks the current context during construction and generation;
/// pushing onto a full window evicts and returns the oldest token.
pub mod window;
