//! Markov text model and information-theory toolkit.
//!
//! This crate provides the building blocks for estimating the entropy
//! rate of a token stream and generating synthetic sequences from the
//! estimated model:
//! - Order-k Markov models over characters, words or any ordered token type
//! - Entropy-rate estimation in bits per token
//! - Weighted random sampling and sequence generation
//! - Line-based character and word tokenizers
//! - Scalar helpers (entropy, channel capacity, the Gaussian CDF)
//!
//! Randomness is always supplied by the caller, so every randomized
//! operation can be made reproducible with a seeded generator.

/// Core Markov model: construction, entropy-rate estimation,
/// weighted sampling and generation.
pub mod model;

/// Character and word tokenizers over line-based text.
pub mod tokenize;

/// Scalar information-theory helpers (entropies, channel capacity,
/// Gaussian CDF, joint-table totals).
pub mod information;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;
