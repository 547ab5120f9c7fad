//! Evolutionary search core for formatter style configurations.
//!
//! Given candidate `.clang-format` configurations scored by an external
//! formatter run, this crate produces the next generation:
//!
//! - **Mutation**: every setting is independently re-drawn with a fixed
//!   probability, using a per-setting rule (enumerated choice, integer
//!   jitter, integer range, fixed value, or recursion into nested settings).
//! - **Recombination**: the best candidate is carried over unchanged and the
//!   rest of the population is filled with mutated copies of parents chosen
//!   by quadratic rank selection.
//!
//! # Architecture
//!
//! Loading and saving configuration files, running the formatter, and the
//! generational loop itself live in the caller. All randomness is passed in
//! explicitly; [`random::create_rng`] builds reproducible generators.

pub mod evolve;
pub mod random;
