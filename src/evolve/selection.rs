//! Parent selection for recombination.
//!
//! Selection operates on a population already sorted best-first, so it only
//! needs to return a rank.

use rand::Rng;

/// Quadratic rank selection.
///
/// Returns `floor(u₁ · u₂ · n)` with `u₁, u₂` independent uniforms in
/// `[0, 1)`. The product of two uniforms has density `-ln(x)` on `(0, 1)`,
/// so low ranks (fitter individuals under an ascending sort) are strongly
/// favoured while every rank keeps a non-zero probability.
///
/// # Panics
/// Panics if `n == 0`.
///
/// # Examples
///
/// ```
/// use u_styleopt::evolve::quadratic_rank;
/// use u_styleopt::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let idx = quadratic_rank(10, &mut rng);
/// assert!(idx < 10);
/// ```
pub fn quadratic_rank<R: Rng>(n: usize, rng: &mut R) -> usize {
    assert!(n > 0, "cannot select from empty population");

    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let idx = (u1 * u2 * n as f64) as usize;
    idx.min(n - 1) // floating-point guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(quadratic_rank(1, &mut rng), 0);
        }
    }

    #[test]
    fn test_always_in_bounds() {
        let mut rng = create_rng(42);
        for n in 1..50 {
            for _ in 0..200 {
                assert!(quadratic_rank(n, &mut rng) < n);
            }
        }
    }

    #[test]
    fn test_favors_best() {
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[quadratic_rank(4, &mut rng)] += 1;
        }
        // P(rank 0) = P(u1·u2 < 1/4) = (1 + ln 4) / 4 ≈ 0.597
        assert!(
            counts[0] > 5500,
            "expected rank 0 selected ~60% of the time, got {}/{n}",
            counts[0]
        );
        for w in counts.windows(2) {
            assert!(w[0] > w[1], "selection should decrease with rank: {counts:?}");
        }
        assert!(counts[3] > 0, "worst rank must stay reachable: {counts:?}");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        quadratic_rank(0, &mut rng);
    }
}
