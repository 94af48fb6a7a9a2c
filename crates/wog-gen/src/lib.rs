//! Wordlist generation pipeline.
//!
//! Expands a handful of seed words into a candidate wordlist:
//!
//! - [`transform`] -- Additive case transformations (upper, lower, first
//!   upper, camelcase, all possible cases)
//! - [`combine`] -- Ordered pairwise concatenation with separators
//! - [`decorate`] -- Year and age prefixes, suffixes and split forms
//! - [`filter`] -- Length bounds and first-occurrence deduplication
//! - [`pipeline`] -- The [`Generator`] tying the stages together
//!
//! Combination and decoration are lazy iterators; the maximum length bound
//! is applied inside every stage so over-long candidates are never built.

pub mod combine;
pub mod decorate;
pub mod filter;
pub mod pipeline;
pub mod transform;

pub use pipeline::{Generator, generate};

use wog_core::ConfigError;

/// Error type for a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A word exceeded the all-possible-cases cap under the refuse policy.
    #[error(
        "word {word:?} has {cased} cased characters, above the all-possible-cases cap of {cap}"
    )]
    GrowthLimit {
        word: String,
        cased: usize,
        cap: usize,
    },
}
