use approx::{assert_abs_diff_eq, assert_relative_eq};
use optlab_core::Vec2;
use optlab_expr::Function2;

use crate::{Status, newton};

use super::{Action, Config, Error, Event, Linear, Method, Quadratic, barrier, penalty};

const F: Quadratic = Quadratic::new(6.0, 2.0, -17.0);
const G: Linear = Linear::new(8.0, 1.0, -7.0);
const X0: Vec2 = Vec2::new(0.0, -1.0);

fn textbook() -> Config {
    Config::new(0.05, 0.5, 10.0).unwrap()
}

#[test]
fn penalty_approaches_constrained_minimum() {
    let solution = penalty::minimize_unobserved(&F, G, X0, &textbook()).unwrap();

    // P(r) = 0.852, 0.147, 0.016 for r = 0.5, 5, 50.
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.answer.iter, 2);
    let rs: Vec<f64> = solution.steps.iter().map(|step| step.r).collect();
    assert_eq!(rs.len(), 3);
    assert_relative_eq!(rs[0], 0.5);
    assert_relative_eq!(rs[1], 5.0);
    assert_relative_eq!(rs[2], 50.0);

    // Lagrange solution of 6x1² + 2x2² − 17 on 8x1 + x2 = 7.
    let exact = Vec2::new(56.0 / 67.0, 21.0 / 67.0);
    assert_abs_diff_eq!(solution.answer.x.x1, exact.x1, epsilon = 0.01);
    assert_abs_diff_eq!(solution.answer.x.x2, exact.x2, epsilon = 0.01);

    let last = solution.steps.last().unwrap();
    assert!(last.term <= 0.05);
    assert_relative_eq!(last.term, 0.5 * last.r * last.g * last.g, epsilon = 1e-12);
    assert_relative_eq!(solution.answer.fx, last.fx);
}

#[test]
fn outer_steps_chain_inner_solutions() {
    let solution = penalty::minimize_unobserved(&F, G, X0, &textbook()).unwrap();

    assert_eq!(solution.steps[0].start, X0);
    for pair in solution.steps.windows(2) {
        assert_eq!(pair[1].start, pair[0].x);
    }
    for step in &solution.steps {
        assert_eq!(step.x, step.inner.answer.x);
        assert_relative_eq!(step.merit, step.inner.answer.fx);
        assert!(step.inner.answer.iter <= 10);
        assert!(
            step.inner
                .steps
                .iter()
                .all(|inner| inner.kind == newton::Direction::Newton)
        );
    }
}

#[test]
fn penalty_terms_shrink_as_coefficient_grows() {
    let solution = penalty::minimize_unobserved(&F, G, X0, &textbook()).unwrap();

    let terms: Vec<f64> = solution.steps.iter().map(|step| step.term).collect();
    for pair in terms.windows(2) {
        assert!(pair[1] < pair[0], "{terms:?}");
    }
}

#[test]
fn barrier_with_inactive_constraint_finds_interior_minimum() {
    // The unconstrained minimum (0, 0) already satisfies g < 0, so the
    // barrier only has to fade out: P ≈ r/7.
    let solution = barrier::minimize_unobserved(&F, G, X0, &textbook()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.answer.iter, 1);
    assert_relative_eq!(solution.steps[1].r, 0.05);
    assert_abs_diff_eq!(solution.answer.x.x1, 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(solution.answer.x.x2, 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(solution.answer.fx, -17.0, epsilon = 0.01);
}

#[test]
fn barrier_with_active_constraint_stays_feasible() {
    // min (x1 − 1)² + (x2 − 1)² on x1 + x2 < 1 has its infimum at (0.5, 0.5).
    let f = Function2::new("(x1 - 1)^2 + (x2 - 1)^2").unwrap();
    let g = Linear::new(1.0, 1.0, -1.0);
    let config = Config::new(0.05, 1.0, 10.0).unwrap();

    let solution = barrier::minimize_unobserved(&f, g, Vec2::ZERO, &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.answer.x.x1, 0.5, epsilon = 0.03);
    assert_abs_diff_eq!(solution.answer.x.x2, 0.5, epsilon = 0.03);

    for step in &solution.steps {
        assert!(step.g < 0.0);
        for inner in &step.inner.steps {
            assert!(g.value(inner.next) < 0.0);
            assert!(inner.f_next <= inner.fx);
        }
    }
}

#[test]
fn barrier_rejects_infeasible_start() {
    for x0 in [Vec2::new(1.0, 0.0), Vec2::new(1.0, -1.0)] {
        let result = barrier::minimize_unobserved(&F, G, x0, &textbook());
        assert!(matches!(result, Err(Error::InfeasibleStart { .. })));
    }
}

#[test]
fn outer_budget_is_enforced() {
    let config = textbook().with_max_outer_iters(1).unwrap();

    let result = penalty::minimize_unobserved(&F, G, X0, &config);

    assert!(matches!(result, Err(Error::OuterBudgetExceeded { iters: 1 })));
}

#[test]
fn inner_failures_carry_the_outer_iteration() {
    // F = (r/2)·x1² has a singular Hessian everywhere.
    let flat = Quadratic::new(0.0, 0.0, 0.0);
    let g = Linear::new(1.0, 0.0, 0.0);

    let result = penalty::minimize_unobserved(&flat, g, Vec2::new(1.0, 1.0), &textbook());

    assert!(matches!(
        result,
        Err(Error::Inner {
            iter: 0,
            source: newton::Error::SingularHessian { .. },
        })
    ));
}

#[test]
fn observer_can_stop_early() {
    let mut coefficients = Vec::new();
    let observer = |event: &Event<'_>| {
        coefficients.push(event.step.r);
        Some(Action::StopEarly)
    };

    let solution = penalty::minimize(&F, G, X0, &textbook(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps.len(), 1);
    assert_eq!(solution.answer.iter, 0);
    assert_eq!(coefficients, [0.5]);
}

#[test]
fn runs_are_reproducible() {
    for method in Method::ALL {
        let first = method.minimize_unobserved(&F, G, X0, &textbook()).unwrap();
        let second = method.minimize_unobserved(&F, G, X0, &textbook()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn method_names_round_trip() {
    for method in Method::ALL {
        assert_eq!(method.to_string().parse::<Method>(), Ok(method));
    }
    assert_eq!("barrier".parse::<Method>(), Ok(Method::Barrier));
}
