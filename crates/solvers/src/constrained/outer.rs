use optlab_core::{Objective, Observer, Vec2};
use tracing::{debug, trace};

use crate::{Answer, Status, newton};

use super::{Action, Config, Error, Event, Linear, Method, OuterStep, Solution, merit::Merit};

/// Runs the outer coefficient loop, building each inner problem with
/// `merit`.
pub(super) fn run<F, M, Obs, B>(
    f: &F,
    g: Linear,
    x0: Vec2,
    config: &Config,
    mut observer: Obs,
    method: Method,
    merit: B,
) -> Result<Solution, Error>
where
    F: Objective<Vec2>,
    M: Merit,
    Obs: for<'a> Observer<Event<'a>, Action>,
    B: Fn(f64) -> M,
{
    let mut r = config.r0();
    let mut x = x0;
    let mut steps = Vec::new();

    for iter in 0..config.max_outer_iters() {
        let problem = merit(r);
        let inner = newton::minimize_unobserved(&problem, x, config.inner())
            .map_err(|source| Error::Inner { iter, source })?;

        let x_star = inner.answer.x;
        let fx = f.value(x_star).map_err(Error::objective)?;
        let term = problem.term(x_star);

        let step = OuterStep {
            r,
            start: x,
            x: x_star,
            fx,
            g: g.value(x_star),
            merit: inner.answer.fx,
            term,
            inner,
        };
        trace!(iter, r, x = %x_star, fx, term, "outer step");

        let action = observer.observe(&Event { iter, step: &step });
        steps.push(step);

        let answer = Answer {
            x: x_star,
            fx,
            iter,
        };
        if method.is_satisfied(term, config.epsilon()) {
            return Ok(Solution::finish(method, steps, answer, Status::Converged));
        }
        if action == Some(Action::StopEarly) {
            return Ok(Solution::finish(
                method,
                steps,
                answer,
                Status::StoppedByObserver,
            ));
        }

        r = method.tighten(r, config.factor());
        x = x_star;
        debug!(%method, iter, r, term, "tightening coefficient");
    }

    Err(Error::OuterBudgetExceeded {
        iters: config.max_outer_iters(),
    })
}
