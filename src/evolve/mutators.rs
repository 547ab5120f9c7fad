//! Leaf value mutators.
//!
//! Each mutator proposes a replacement for a single setting value. They are
//! small `Copy` descriptors so the rule registry can hold them in a `const`
//! table.
//!
//! - [`Choice`]: uniform pick from a fixed set of style names
//! - [`BoundedDelta`]: integer jitter `current + s·m`, floored at a minimum
//! - [`UniformRange`]: uniform integer from a half-open interval

use super::error::MutationError;
use super::types::Value;
use rand::Rng;

/// A rule that proposes a new value for one setting.
pub trait ValueMutator {
    /// Returns a replacement for `value`.
    ///
    /// `field` is used only for error reporting.
    fn mutate<R: Rng>(
        &self,
        field: &str,
        value: &Value,
        rng: &mut R,
    ) -> Result<Value, MutationError>;
}

/// Uniform choice from an enumerated set of strings.
///
/// The current value is ignored, so the result may equal it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    choices: &'static [&'static str],
}

impl Choice {
    /// # Panics
    /// Panics if `choices` is empty. Registry entries are constants, so this
    /// fails at compile time.
    pub const fn new(choices: &'static [&'static str]) -> Self {
        assert!(!choices.is_empty(), "choice set must not be empty");
        Self { choices }
    }

    /// The declared choice set.
    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }
}

impl ValueMutator for Choice {
    fn mutate<R: Rng>(
        &self,
        _field: &str,
        _value: &Value,
        rng: &mut R,
    ) -> Result<Value, MutationError> {
        let idx = rng.random_range(0..self.choices.len());
        Ok(Value::from(self.choices[idx]))
    }
}

/// Product-of-uniforms integer jitter.
///
/// `new = max(minimum, current + s·m)` where `s` is uniform in
/// `[-factor, factor]` and `m` uniform in `[0, factor]`, both inclusive and
/// independent. The product concentrates near zero while still reaching
/// `±factor²`. There is no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedDelta {
    factor: u32,
    minimum: i64,
}

impl BoundedDelta {
    /// Jitter with the given factor, floored at 0.
    pub const fn new(factor: u32) -> Self {
        Self { factor, minimum: 0 }
    }

    /// Jitter with the given factor, floored at `minimum`.
    pub const fn with_minimum(factor: u32, minimum: i64) -> Self {
        Self { factor, minimum }
    }

    pub fn factor(&self) -> u32 {
        self.factor
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Applies the jitter to a raw integer.
    pub fn apply<R: Rng>(&self, current: i64, rng: &mut R) -> i64 {
        let f = i64::from(self.factor);
        let signed = rng.random_range(-f..=f);
        let magnitude = rng.random_range(0..=f);
        current
            .saturating_add(signed.saturating_mul(magnitude))
            .max(self.minimum)
    }
}

impl ValueMutator for BoundedDelta {
    fn mutate<R: Rng>(
        &self,
        field: &str,
        value: &Value,
        rng: &mut R,
    ) -> Result<Value, MutationError> {
        match value {
            Value::Int(current) => Ok(Value::Int(self.apply(*current, rng))),
            other => Err(MutationError::type_mismatch(field, "int", other.kind())),
        }
    }
}

/// Uniform integer from `[start, stop)`.
///
/// The current value is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformRange {
    start: i64,
    stop: i64,
}

impl UniformRange {
    /// # Panics
    /// Panics if the interval is empty.
    pub const fn new(start: i64, stop: i64) -> Self {
        assert!(start < stop, "range must be non-empty");
        Self { start, stop }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }
}

impl ValueMutator for UniformRange {
    fn mutate<R: Rng>(
        &self,
        _field: &str,
        _value: &Value,
        rng: &mut R,
    ) -> Result<Value, MutationError> {
        Ok(Value::Int(rng.random_range(self.start..self.stop)))
    }
}
