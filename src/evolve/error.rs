//! Error types for mutation and recombination.

use thiserror::Error;

/// Contract violations raised by the mutation and recombination engines.
///
/// Unrecognized settings are never an error; they are tolerated and reported
/// through `tracing`. These variants cover documents whose values do not
/// match their registered rule, and invalid engine parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    /// A registered rule received a value of the wrong shape.
    #[error("setting '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidRate(f64),

    #[error("cannot recombine an empty population")]
    EmptyPopulation,

    #[error("population size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),
}

impl MutationError {
    pub(crate) fn type_mismatch(field: &str, expected: &'static str, found: &'static str) -> Self {
        MutationError::TypeMismatch {
            field: field.to_owned(),
            expected,
            found,
        }
    }
}

/// Checks that `rate` is a finite probability.
pub(crate) fn check_rate(rate: f64) -> Result<(), MutationError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(MutationError::InvalidRate(rate))
    }
}
