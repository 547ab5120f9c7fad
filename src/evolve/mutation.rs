//! The mutation engine.
//!
//! [`mutate`] walks a document and, for each setting independently, runs a
//! Bernoulli trial at the mutation rate. Settings that win the trial are
//! replaced through the rule registry; the rest are copied. Nested documents
//! apply the same per-field trial at every level.

use super::error::{check_rate, MutationError};
use super::rules::mutate_value;
use super::types::Document;
use rand::Rng;

/// Returns a mutated copy of `document`.
///
/// Each setting is replaced with probability `rate`. The result has the
/// same settings, in the same order, as the input; the input is left
/// untouched so it can be carried forward as an elite.
///
/// # Errors
///
/// - [`MutationError::InvalidRate`] if `rate` is not within `[0, 1]`
/// - [`MutationError::TypeMismatch`] if a setting chosen for mutation holds
///   a value its registered rule cannot operate on
///
/// # Examples
///
/// ```
/// use u_styleopt::evolve::{mutate, Document, Value};
/// use u_styleopt::random::create_rng;
///
/// let mut doc = Document::new();
/// doc.insert("IndentWidth".into(), Value::Int(4));
/// doc.insert("Foo".into(), Value::Bool(true));
///
/// let mut rng = create_rng(42);
/// let same = mutate(&doc, 0.0, &mut rng).unwrap();
/// assert_eq!(same, doc);
///
/// let flipped = mutate(&doc, 1.0, &mut rng).unwrap();
/// assert_eq!(flipped["Foo"], Value::Bool(false));
/// ```
pub fn mutate<R: Rng>(
    document: &Document,
    rate: f64,
    rng: &mut R,
) -> Result<Document, MutationError> {
    check_rate(rate)?;
    mutate_document(document, rate, rng)
}

/// [`mutate`] without the rate check, used for nested documents.
pub(crate) fn mutate_document<R: Rng>(
    document: &Document,
    rate: f64,
    rng: &mut R,
) -> Result<Document, MutationError> {
    document
        .iter()
        .map(|(field, value)| {
            let next = if rng.random::<f64>() < rate {
                let next = mutate_value(field, value, rate, rng)?;
                tracing::trace!(setting = %field, from = %value, to = %next, "mutated setting");
                next
            } else {
                value.clone()
            };
            Ok((field.clone(), next))
        })
        .collect()
}
