//! Style-configuration evolution.
//!
//! Produces the next generation of `.clang-format`-style configuration
//! documents from a scored population. Scoring candidates and deciding when
//! to stop belong to the caller; this module only varies and selects.
//!
//! # Core Operations
//!
//! - [`mutate`]: per-setting Bernoulli mutation through the rule registry
//! - [`recombine`]: elitism plus quadratic-rank parent selection
//!
//! # Key Types
//!
//! - [`Document`] / [`Value`]: ordered settings with a closed value type
//! - [`Rule`]: how one registered setting is mutated ([`rules::RULES`])
//! - [`EvolveConfig`]: population size, mutation rate, seed
//! - [`Evolver`]: config plus seeded RNG behind `mutate`/`recombine`
//! - [`Generation`]: elite and next population
//!
//! # Submodules
//!
//! - [`mutators`]: choice, bounded-delta and range value mutators
//! - [`rules`]: the setting → rule registry and unknown-setting fallback
//!
//! # Logging
//!
//! Unrecognized non-boolean settings are reported with `tracing::warn!`;
//! each recombination emits a `debug` summary and each mutated setting a
//! `trace` event. Install a subscriber to see them.

mod config;
mod error;
mod mutation;
pub mod mutators;
pub mod rules;
mod runner;
mod selection;
#[cfg(test)]
mod testing;
mod types;

pub use config::EvolveConfig;
pub use error::MutationError;
pub use mutation::mutate;
#[cfg(feature = "parallel")]
pub use runner::recombine_parallel;
pub use runner::{recombine, Evolver, Generation};
pub use rules::{mutate_value, rule_for, Rule};
pub use selection::quadratic_rank;
pub use types::{Document, Fitness, ScoredCandidate, Value};
