use std::convert::Infallible;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use optlab_core::{Differentiable, Matrix2, Objective, TwiceDifferentiable, Vec2};
use optlab_expr::Function2;

use crate::Status;

use super::{Action, Config, Direction, Error, Event, minimize, minimize_unobserved};

/// `x1² + x2²` restricted to `x1 > 0.5`.
struct RightOfHalf;

impl Objective<Vec2> for RightOfHalf {
    type Error = Infallible;

    fn value(&self, x: Vec2) -> Result<f64, Self::Error> {
        Ok(x.dot(x))
    }

    fn in_domain(&self, x: Vec2) -> bool {
        x.x1 > 0.5
    }
}

impl Differentiable for RightOfHalf {
    fn gradient(&self, x: Vec2) -> Result<Vec2, Self::Error> {
        Ok(x * 2.0)
    }
}

impl TwiceDifferentiable for RightOfHalf {
    fn hessian(&self, _x: Vec2) -> Result<Matrix2, Self::Error> {
        Ok(Matrix2::symmetric(2.0, 0.0, 2.0))
    }
}

#[test]
fn quadratic_form_converges_in_one_step() {
    let f = Function2::new("x1^2 + 0.6*x1*x2 + 6*x2^2").unwrap();
    let config = Config::new(0.1, 0.15, 10).unwrap();

    let solution = minimize_unobserved(&f, Vec2::new(1.5, 0.5), &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.steps.len(), 1);
    assert_eq!(solution.answer.iter, 1);

    let step = &solution.steps[0];
    assert_eq!(step.kind, Direction::Newton);
    assert_relative_eq!(step.t, 1.0);
    assert_eq!(step.hessian, Matrix2::symmetric(2.0, 0.6, 12.0));
    assert_relative_eq!(step.inverse.get(0, 0), 12.0 / 23.64, epsilon = 1e-12);
    assert_relative_eq!(step.inverse.get(0, 1), -0.6 / 23.64, epsilon = 1e-12);

    assert_abs_diff_eq!(solution.answer.x.x1, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.answer.x.x2, 0.0, epsilon = 1e-12);
}

#[test]
fn indefinite_hessian_falls_back_to_steepest_descent() {
    // Saddle at the origin, minima at (0, ±1/√2).
    let f = Function2::new("x1^2 - x2^2 + x2^4").unwrap();
    let config = Config::new(1e-4, 1e-8, 100).unwrap();

    let solution = minimize_unobserved(&f, Vec2::new(1.0, 0.1), &config).unwrap();

    assert_eq!(solution.steps[0].kind, Direction::SteepestDescent);
    assert_eq!(solution.steps[0].direction, -solution.steps[0].gradient);
    assert!(
        solution
            .steps
            .iter()
            .any(|step| step.kind == Direction::Newton)
    );

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.answer.x.x1, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(solution.answer.x.x2, 0.5_f64.sqrt(), epsilon = 1e-3);
}

#[test]
fn singular_hessian_fails_the_run() {
    let f = Function2::new("x1 + x2^2").unwrap();

    let result = minimize_unobserved(&f, Vec2::new(1.0, 1.0), &Config::default());

    match result {
        Err(Error::SingularHessian { iter, x, det }) => {
            assert_eq!(iter, 0);
            assert_eq!(x, Vec2::new(1.0, 1.0));
            assert_relative_eq!(det, 0.0);
        }
        other => panic!("expected a singular Hessian, got {other:?}"),
    }
}

#[test]
fn full_step_outside_domain_is_line_searched() {
    let config = Config::new(1e-6, 1e-6, 1).unwrap();

    let solution = minimize_unobserved(&RightOfHalf, Vec2::new(1.0, 0.0), &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    let step = &solution.steps[0];
    assert_eq!(step.kind, Direction::Newton);
    assert_relative_eq!(step.t, 0.49);
    assert!(step.next.x1 > 0.5);
}

#[test]
fn overshooting_full_step_is_line_searched() {
    // From x1 = 2 the full step lands on x1 = −8, where f is larger.
    let f = Function2::new("sqrt(1 + x1^2) + x2^2").unwrap();
    let config = Config::new(1e-6, 1e-6, 1).unwrap();

    let solution = minimize_unobserved(&f, Vec2::new(2.0, 0.0), &config).unwrap();

    let step = &solution.steps[0];
    assert_eq!(step.kind, Direction::Newton);
    assert_abs_diff_eq!(step.t, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(step.next.x1, 0.0, epsilon = 1e-9);
    assert!(step.f_next < step.fx);
}

#[test]
fn every_step_descends_and_chains() {
    let functions = [
        "x1^2 + 0.6*x1*x2 + 6*x2^2",
        "x1^4 + x2^2 - 2*x1",
        "exp(x1) + x2^2 - 2*x1 + x1*x2",
        "x1^2 - x2^2 + x2^4",
    ];
    let config = Config::new(1e-3, 1e-6, 20).unwrap();

    for text in functions {
        let f = Function2::new(text).unwrap();
        let solution = minimize_unobserved(&f, Vec2::new(0.5, 0.5), &config).unwrap();

        for step in &solution.steps {
            assert!(step.f_next <= step.fx, "{text}: {step:?}");
        }
        for pair in solution.steps.windows(2) {
            assert_eq!(pair[0].next, pair[1].x);
        }
        assert_eq!(solution.answer.iter, solution.steps.len());
    }
}

#[test]
fn observer_can_stop_early() {
    let f = Function2::new("x1^4 + x2^2 - 2*x1").unwrap();
    let config = Config::new(1e-9, 1e-12, 100).unwrap();

    let observer = |event: &Event<'_>| (event.iter == 1).then_some(Action::StopEarly);
    let solution = minimize(&f, Vec2::new(2.0, 1.0), &config, observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps.len(), 2);
    assert_eq!(solution.answer.iter, 2);
    assert_eq!(solution.answer.x, solution.steps[1].next);
}

#[test]
fn runs_are_reproducible() {
    let f = Function2::new("x1^4 + x2^2 - 2*x1 + x1*x2").unwrap();
    let config = Config::default();

    let first = minimize_unobserved(&f, Vec2::new(2.0, -1.0), &config).unwrap();
    let second = minimize_unobserved(&f, Vec2::new(2.0, -1.0), &config).unwrap();

    assert_eq!(first, second);
}
