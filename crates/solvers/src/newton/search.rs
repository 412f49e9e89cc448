use optlab_core::{Matrix2, Objective, Observer, TwiceDifferentiable, Vec2};
use tracing::{debug, trace};

use crate::{
    Answer, Status,
    line_search::{self, Probe},
    stabilization::Stabilization,
};

use super::{Action, Config, Direction, Error, Event, Solution, Step};

pub(super) fn search<F, Obs>(
    f: &F,
    x0: Vec2,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: TwiceDifferentiable,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut x = x0;
    let mut fx = f.value(x).map_err(Error::objective)?;
    let mut rule = Stabilization::default();
    let mut steps = Vec::new();
    let mut iter = 0;

    loop {
        let gradient = f.gradient(x).map_err(Error::objective)?;
        let gradient_norm = gradient.norm();

        if gradient_norm <= config.epsilon1() {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(steps, answer, Status::Converged));
        }
        if iter >= config.max_iters() {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(steps, answer, Status::MaxIters));
        }

        let hessian = f.hessian(x).map_err(Error::objective)?;
        let inverse = hessian
            .inverse()
            .map_err(|err| Error::SingularHessian { iter, x, det: err.det })?;

        let (kind, direction) = if looks_positive_definite(&inverse) {
            (Direction::Newton, -(inverse * gradient))
        } else {
            debug!(iter, x = %x, "inverse Hessian not positive definite, using -gradient");
            (Direction::SteepestDescent, -gradient)
        };

        let probe = match kind {
            Direction::Newton => full_step(f, x, direction, fx)?,
            Direction::SteepestDescent => None,
        };
        let probe = match probe {
            Some(probe) => probe,
            None => line_search::grid(f, x, direction, fx, config.max_halvings())
                .map_err(Error::objective)?
                .ok_or(Error::LineSearchExhausted { iter, x })?,
        };

        let diff_norm = probe.x.distance(x);
        let abs_f_diff = (probe.fx - fx).abs();
        let condition_met = Stabilization::is_small(diff_norm, abs_f_diff, config.epsilon2());
        let stabilized = rule.record(condition_met);

        let step = Step {
            x,
            fx,
            gradient,
            gradient_norm,
            hessian,
            inverse,
            kind,
            direction,
            t: probe.t,
            next: probe.x,
            f_next: probe.fx,
            diff_norm,
            abs_f_diff,
            condition_met,
        };
        trace!(iter, x = %x, fx, ?kind, t = probe.t, gradient_norm, "newton step");

        let action = observer.observe(&Event { iter, step: &step });
        steps.push(step);

        x = probe.x;
        fx = probe.fx;
        iter += 1;

        if stabilized {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(steps, answer, Status::Converged));
        }
        if action == Some(Action::StopEarly) {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(steps, answer, Status::StoppedByObserver));
        }
    }
}

/// The positive-definiteness proxy on `H⁻¹`: leading entry and determinant
/// both positive.
fn looks_positive_definite(inverse: &Matrix2) -> bool {
    inverse.get(0, 0) > 0.0 && inverse.det() > 0.0
}

/// Accepts the full step `x + d` if it is in the domain and does not
/// increase `f`.
fn full_step<F: Objective<Vec2>>(
    f: &F,
    x: Vec2,
    d: Vec2,
    fx: f64,
) -> Result<Option<Probe>, Error> {
    let next = x + d;
    if !f.in_domain(next) {
        debug!(x = %x, next = %next, "full newton step leaves the domain");
        return Ok(None);
    }
    let f_next = f.value(next).map_err(Error::objective)?;
    if f_next > fx || f_next.is_nan() {
        debug!(x = %x, fx, f_next, "full newton step does not descend");
        return Ok(None);
    }
    Ok(Some(Probe {
        t: 1.0,
        x: next,
        fx: f_next,
    }))
}
