//! Generation step: elitist rank-based recombination.
//!
//! [`recombine`] turns one scored population into the next:
//! rank → keep the elite → sample parents by quadratic rank → mutate.
//! [`Evolver`] bundles a validated [`EvolveConfig`] with its random source.

use super::config::EvolveConfig;
use super::error::{check_rate, MutationError};
use super::mutation::{mutate, mutate_document};
use super::selection::quadratic_rank;
use super::types::{Document, Fitness, ScoredCandidate};
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use rand::Rng;
use std::cmp::Ordering;

/// Result of one recombination step.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation<F: Fitness = f64> {
    /// The lowest-scoring input candidate, unchanged.
    pub best: ScoredCandidate<F>,

    /// The next population. `population[0]` is `best.document`; the rest are
    /// mutated copies of rank-selected parents.
    pub population: Vec<Document>,
}

/// Produces the next generation from a scored population.
///
/// 1. Sort ascending by score (stable; NaN-like scores sort last)
/// 2. The fittest candidate becomes [`Generation::best`] and the first member
///    of the new population
/// 3. Each remaining slot gets a parent chosen by [`quadratic_rank`], mutated
///    at `mutation_rate`
///
/// # Errors
///
/// - [`MutationError::EmptyPopulation`] if `scored` is empty
/// - [`MutationError::InvalidPopulationSize`] if `population_size` is 0
/// - [`MutationError::InvalidRate`] if `mutation_rate` is outside `[0, 1]`
/// - any error raised while mutating an offspring
///
/// # Examples
///
/// ```
/// use u_styleopt::evolve::{recombine, Document, ScoredCandidate, Value};
/// use u_styleopt::random::create_rng;
///
/// let style = |width| Document::from([("IndentWidth".to_string(), Value::Int(width))]);
/// let scored = vec![
///     ScoredCandidate::new(10.0, style(4)),
///     ScoredCandidate::new(2.0, style(8)),
/// ];
///
/// let next = recombine(&scored, 0.0, 2, &mut create_rng(42)).unwrap();
/// assert_eq!(next.best, ScoredCandidate::new(2.0, style(8)));
/// assert_eq!(next.population.len(), 2);
/// assert_eq!(next.population[0], style(8));
/// // With rate 0 every offspring is a copy of some parent.
/// assert!(next.population[1] == style(8) || next.population[1] == style(4));
/// ```
pub fn recombine<F: Fitness, R: Rng>(
    scored: &[ScoredCandidate<F>],
    mutation_rate: f64,
    population_size: usize,
    rng: &mut R,
) -> Result<Generation<F>, MutationError> {
    let ranked = rank(scored, mutation_rate, population_size)?;

    let mut population = Vec::with_capacity(population_size);
    population.push(ranked[0].document.clone());
    for _ in 1..population_size {
        let parent = ranked[quadratic_rank(ranked.len(), rng)];
        population.push(mutate_document(&parent.document, mutation_rate, rng)?);
    }

    Ok(finish(&ranked, population))
}

/// [`recombine`] with offspring mutated on the rayon thread pool.
///
/// One seed per offspring slot is drawn from `rng` up front and each slot
/// runs selection and mutation on its own generator, so the result depends
/// only on the state of `rng`, not on thread scheduling. It differs from the
/// sequential [`recombine`] for the same `rng`.
#[cfg(feature = "parallel")]
pub fn recombine_parallel<F: Fitness, R: Rng>(
    scored: &[ScoredCandidate<F>],
    mutation_rate: f64,
    population_size: usize,
    rng: &mut R,
) -> Result<Generation<F>, MutationError> {
    use crate::random::create_rng;
    use rayon::prelude::*;

    let ranked = rank(scored, mutation_rate, population_size)?;

    let seeds: Vec<u64> = (1..population_size).map(|_| rng.random()).collect();
    let offspring = seeds
        .into_par_iter()
        .map(|seed| {
            let mut local = create_rng(seed);
            let parent = ranked[quadratic_rank(ranked.len(), &mut local)];
            mutate_document(&parent.document, mutation_rate, &mut local)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut population = Vec::with_capacity(population_size);
    population.push(ranked[0].document.clone());
    population.extend(offspring);

    Ok(finish(&ranked, population))
}

/// Validates the inputs and returns the candidates sorted best-first.
fn rank<F: Fitness>(
    scored: &[ScoredCandidate<F>],
    mutation_rate: f64,
    population_size: usize,
) -> Result<Vec<&ScoredCandidate<F>>, MutationError> {
    if scored.is_empty() {
        return Err(MutationError::EmptyPopulation);
    }
    if population_size == 0 {
        return Err(MutationError::InvalidPopulationSize(0));
    }
    check_rate(mutation_rate)?;

    let mut ranked: Vec<&ScoredCandidate<F>> = scored.iter().collect();
    ranked.sort_by(|a, b| by_score(a.score, b.score));
    Ok(ranked)
}

/// Total ascending order on scores: scores not comparable to themselves
/// (NaN) sort after every comparable score and tie with each other.
fn by_score<F: Fitness>(a: F, b: F) -> Ordering {
    let unordered = |s: F| s.partial_cmp(&s).is_none();
    match (unordered(a), unordered(b)) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (a_unordered, b_unordered) => a_unordered.cmp(&b_unordered),
    }
}

fn finish<F: Fitness>(ranked: &[&ScoredCandidate<F>], population: Vec<Document>) -> Generation<F> {
    let best = ranked[0].clone();
    tracing::debug!(
        best_score = best.score.to_f64(),
        candidates = ranked.len(),
        population = population.len(),
        "recombined generation"
    );
    Generation { best, population }
}

/// Stateful front end over [`mutate`] and [`recombine`].
///
/// Owns a validated configuration and the random source derived from its
/// seed, so repeated calls continue one reproducible random stream.
///
/// # Usage
///
/// ```
/// use u_styleopt::evolve::{Document, EvolveConfig, Evolver, ScoredCandidate, Value};
///
/// let config = EvolveConfig::default().with_population_size(8).with_seed(42);
/// let mut evolver = Evolver::new(config).unwrap();
///
/// let style = Document::from([("IndentWidth".to_string(), Value::Int(2))]);
/// let scored = vec![ScoredCandidate::new(3u64, style.clone())];
/// let next = evolver.recombine(&scored).unwrap();
/// assert_eq!(next.population.len(), 8);
/// assert_eq!(next.population[0], style);
/// ```
#[derive(Debug)]
pub struct Evolver {
    config: EvolveConfig,
    rng: StdRng,
}

impl Evolver {
    /// Creates an evolver.
    ///
    /// # Errors
    /// Returns the error from [`EvolveConfig::validate`].
    pub fn new(config: EvolveConfig) -> Result<Self, MutationError> {
        config.validate()?;
        let rng = rng_from_seed(config.seed);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EvolveConfig {
        &self.config
    }

    /// Mutates one document at the configured rate.
    pub fn mutate(&mut self, document: &Document) -> Result<Document, MutationError> {
        mutate(document, self.config.mutation_rate, &mut self.rng)
    }

    /// Produces the next generation at the configured size and rate.
    ///
    /// Uses [`recombine_parallel`] when the `parallel` feature is enabled and
    /// [`EvolveConfig::parallel`] is set.
    pub fn recombine<F: Fitness>(
        &mut self,
        scored: &[ScoredCandidate<F>],
    ) -> Result<Generation<F>, MutationError> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return recombine_parallel(
                    scored,
                    self.config.mutation_rate,
                    self.config.population_size,
                    &mut self.rng,
                );
            }
        }

        recombine(
            scored,
            self.config.mutation_rate,
            self.config.population_size,
            &mut self.rng,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
