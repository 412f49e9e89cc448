use optlab_core::{Differentiable, Observer, Vec2};
use tracing::trace;

use crate::{
    Answer, Status,
    line_search::Probe,
    stabilization::Stabilization,
};

use super::{Action, Config, Error, Event, Method, Solution, Step};

/// Runs the descent loop, choosing each step length with `search`.
///
/// `search` receives the current point, the direction `−∇f`, and `f` at the
/// current point, and returns an accepted probe or `None` if no descent
/// step was found.
pub(super) fn run<F, Obs, S>(
    f: &F,
    x0: Vec2,
    config: &Config,
    mut observer: Obs,
    method: Method,
    search: S,
) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: for<'a> Observer<Event<'a>, Action>,
    S: Fn(&F, Vec2, Vec2, f64) -> Result<Option<Probe>, F::Error>,
{
    let mut x = x0;
    let mut fx = f.value(x).map_err(Error::objective)?;
    let mut rule = Stabilization::default();
    let mut steps = Vec::new();
    let mut iter = 0;

    loop {
        let gradient = f.gradient(x).map_err(Error::objective)?;
        let gradient_norm = gradient.norm();

        if gradient_norm < config.epsilon1() {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(method, steps, answer, Status::Converged));
        }
        if iter >= config.max_iters() {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(method, steps, answer, Status::MaxIters));
        }

        let probe = search(f, x, -gradient, fx)
            .map_err(Error::objective)?
            .ok_or(Error::LineSearchExhausted { iter, x })?;

        let diff_norm = probe.x.distance(x);
        let abs_f_diff = (probe.fx - fx).abs();
        let condition_met = Stabilization::is_small(diff_norm, abs_f_diff, config.epsilon2());
        let stabilized = rule.record(condition_met);

        let step = Step {
            x,
            fx,
            gradient,
            gradient_norm,
            t: probe.t,
            next: probe.x,
            f_next: probe.fx,
            diff_norm,
            abs_f_diff,
            condition_met,
        };
        trace!(iter, x = %x, fx, t = probe.t, gradient_norm, "descent step");

        let action = observer.observe(&Event { iter, step: &step });
        steps.push(step);

        x = probe.x;
        fx = probe.fx;
        iter += 1;

        if stabilized {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(method, steps, answer, Status::Converged));
        }
        if action == Some(Action::StopEarly) {
            let answer = Answer { x, fx, iter };
            return Ok(Solution::finish(
                method,
                steps,
                answer,
                Status::StoppedByObserver,
            ));
        }
    }
}
