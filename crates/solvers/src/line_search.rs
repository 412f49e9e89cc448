//! Step-length selection along a descent direction.
//!
//! Every search here is bounded: it either finds a point that strictly
//! decreases the objective or gives up after a fixed number of candidates.
//! Candidates outside the objective's domain are never accepted.

use optlab_core::{Objective, Vec2};

/// Number of evenly spaced candidates `t = i / GRID_SIZE` in a grid search.
pub(crate) const GRID_SIZE: u32 = 100;

/// An accepted step `x + t·d` and its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Probe {
    pub(crate) t: f64,
    pub(crate) x: Vec2,
    pub(crate) fx: f64,
}

/// Tries `t, t/2, t/4, …` until `f(x + t·d) < fx`.
///
/// At most `max_halvings + 1` lengths are tried.
pub(crate) fn backtrack<F: Objective<Vec2>>(
    f: &F,
    x: Vec2,
    d: Vec2,
    fx: f64,
    t: f64,
    max_halvings: usize,
) -> Result<Option<Probe>, F::Error> {
    let mut t = t;
    for _ in 0..=max_halvings {
        if let Some(probe) = probe(f, x, d, t, fx)? {
            return Ok(Some(probe));
        }
        t *= 0.5;
    }
    Ok(None)
}

/// Picks the best `t ∈ {0.01, 0.02, …, 1.00}` minimizing `f(x + t·d)`.
///
/// Candidates that leave the domain or fail to strictly decrease `f` are
/// discarded before ranking; the first minimum wins ties. If no grid
/// candidate descends, halving continues below the smallest grid step.
pub(crate) fn grid<F: Objective<Vec2>>(
    f: &F,
    x: Vec2,
    d: Vec2,
    fx: f64,
    max_halvings: usize,
) -> Result<Option<Probe>, F::Error> {
    let mut best: Option<Probe> = None;

    for i in 1..=GRID_SIZE {
        let t = f64::from(i) / f64::from(GRID_SIZE);
        if let Some(candidate) = probe(f, x, d, t, fx)? {
            if best.is_none_or(|best| candidate.fx < best.fx) {
                best = Some(candidate);
            }
        }
    }

    match best {
        Some(best) => Ok(Some(best)),
        None => backtrack(f, x, d, fx, 0.5 / f64::from(GRID_SIZE), max_halvings),
    }
}

/// Evaluates `x + t·d`, accepting it only if it is in the domain and
/// strictly below `fx`.
fn probe<F: Objective<Vec2>>(
    f: &F,
    x: Vec2,
    d: Vec2,
    t: f64,
    fx: f64,
) -> Result<Option<Probe>, F::Error> {
    let candidate = x + d * t;
    if !f.in_domain(candidate) {
        return Ok(None);
    }
    let value = f.value(candidate)?;
    Ok((value < fx).then_some(Probe {
        t,
        x: candidate,
        fx: value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn bowl(x: Vec2) -> f64 {
        x.x1 * x.x1 + x.x2 * x.x2
    }

    #[test]
    fn backtrack_halves_until_descent() {
        let x = Vec2::new(1.0, 0.0);
        let d = Vec2::new(-4.0, 0.0);

        // t = 1 overshoots to (−3, 0); t = 0.5 lands on (−1, 0), equal to f(x);
        // t = 0.25 reaches the origin.
        let probe = backtrack(&bowl, x, d, bowl(x), 1.0, 10).unwrap().unwrap();
        assert_relative_eq!(probe.t, 0.25);
        assert_relative_eq!(probe.fx, 0.0);
    }

    #[test]
    fn backtrack_gives_up_after_budget() {
        let x = Vec2::new(1.0, 0.0);
        let uphill = Vec2::new(1.0, 0.0);
        assert_eq!(backtrack(&bowl, x, uphill, bowl(x), 1.0, 5).unwrap(), None);
    }

    #[test]
    fn grid_picks_smallest_minimizer() {
        let x = Vec2::new(1.0, 1.0);
        let d = Vec2::new(-2.0, -2.0);

        let probe = grid(&bowl, x, d, bowl(x), 0).unwrap().unwrap();
        assert_relative_eq!(probe.t, 0.5);
        assert_relative_eq!(probe.x.x1, 0.0);
    }

    #[test]
    fn grid_first_minimum_wins_ties() {
        // Flat bottom between t = 0.3 and t = 0.6.
        let f = |x: Vec2| (x.x1.abs() - 0.15).max(0.0);
        let x = Vec2::new(0.45, 0.0);
        let d = Vec2::new(-1.0, 0.0);

        let probe = grid(&f, x, d, f(x), 0).unwrap().unwrap();
        assert_relative_eq!(probe.t, 0.3);
    }

    #[test]
    fn grid_falls_back_to_halving_below_smallest_step() {
        // Only steps shorter than 0.01 descend.
        let f = |x: Vec2| (x.x1 - 0.996).powi(2);
        let x = Vec2::new(1.0, 0.0);
        let d = Vec2::new(-1.0, 0.0);

        let probe = grid(&f, x, d, f(x), 10).unwrap().unwrap();
        assert_relative_eq!(probe.t, 0.005);
    }

    #[test]
    fn grid_respects_domain() {
        struct HalfPlane;

        impl Objective<Vec2> for HalfPlane {
            type Error = Infallible;

            fn value(&self, x: Vec2) -> Result<f64, Self::Error> {
                Ok(x.x1)
            }

            fn in_domain(&self, x: Vec2) -> bool {
                x.x1 > 0.5
            }
        }

        let x = Vec2::new(1.0, 0.0);
        let d = Vec2::new(-1.0, 0.0);

        let probe = grid(&HalfPlane, x, d, 1.0, 0).unwrap().unwrap();
        assert!(probe.x.x1 > 0.5);
        assert_relative_eq!(probe.t, 0.49);
    }
}
