//! Shared types for the WoG wordlist generator.
//!
//! # Architecture
//!
//! - [`character`] -- Simple one-to-one case mappings
//! - [`case`] -- Whole-word case forms and lazy case enumeration
//! - [`word_set`] -- The ordered word collection passed between stages
//! - [`config`] -- Run configuration (transformations, years, ages, bounds)
//! - [`error`] -- Configuration errors

pub mod case;
pub mod character;
pub mod config;
pub mod error;
pub mod word_set;

pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use word_set::WordSet;
