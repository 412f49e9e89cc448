//! Reusable observers for optlab solvers.
//!
//! This crate provides [`Observer`] implementations and the capability
//! traits that let them work across every solver family.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceLog`] forwards each step to `tracing`
//! - [`StopAfter`] stops a solver after a fixed number of steps
//!
//! Observers compose by calling one from inside a closure.
//!
//! [`Observer`]: optlab_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

mod stop_after;
mod trace_log;

pub mod traits;

pub use stop_after::StopAfter;
pub use trace_log::TraceLog;

#[cfg(test)]
mod tests {
    use super::*;

    use optlab_core::{Observer, Vec2};
    use optlab_solvers::{
        Status,
        constrained::{self, Linear, Quadratic},
        gradient, interval, newton,
    };

    use crate::traits::HasObjective;

    const BOWL: Quadratic = Quadratic::new(1.0, 4.0, 0.0);

    #[test]
    fn stop_after_works_for_every_family() {
        let f = |x: f64| (x - 1.0).powi(2);
        let config = interval::Config::new(1e-9).unwrap();
        let solution = interval::golden_ratio::minimize(&f, [0.0, 4.0], &config, StopAfter::new(3))
            .unwrap();
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps.len(), 3);

        let config = gradient::Config::new(1e-9, 1e-12, 100).unwrap();
        let solution =
            gradient::fastest::minimize(&BOWL, Vec2::new(1.0, 1.0), &config, StopAfter::new(2))
                .unwrap();
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps.len(), 2);

        let f = Quadratic::new(6.0, 2.0, -17.0);
        let g = Linear::new(8.0, 1.0, -7.0);
        let config = constrained::Config::default();
        let solution = constrained::penalty::minimize(
            &f,
            g,
            Vec2::new(0.0, -1.0),
            &config,
            StopAfter::new(1),
        )
        .unwrap();
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps.len(), 1);

        let config = newton::Config::default();
        let solution =
            newton::minimize(&BOWL, Vec2::new(1.0, 1.0), &config, StopAfter::new(1)).unwrap();
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps.len(), 1);
    }

    #[test]
    fn converging_step_wins_over_stop_request() {
        // The first reduction already meets the width target.
        let f = |x: f64| x * x;
        let config = interval::Config::new(5.0).unwrap();
        let solution =
            interval::half_interval::minimize(&f, [-4.0, 4.0], &config, StopAfter::new(1))
                .unwrap();
        assert_eq!(solution.status, Status::Converged);
    }

    #[test]
    fn trace_log_does_not_steer() {
        let config = newton::Config::new(1e-6, 1e-9, 20).unwrap();
        let x0 = Vec2::new(2.0, -1.0);

        let logged = newton::minimize(&BOWL, x0, &config, TraceLog::new("newton")).unwrap();
        let plain = newton::minimize_unobserved(&BOWL, x0, &config).unwrap();

        assert_eq!(logged, plain);
        assert_eq!(TraceLog::new("x").level(), tracing::Level::DEBUG);
    }

    #[test]
    fn objective_reports_best_value_of_step() {
        let f = |x: f64| (x - 3.0).powi(2);
        let config = interval::Config::new(0.5).unwrap();

        let mut objectives = Vec::new();
        let observer = |event: &interval::Event<'_>| -> Option<interval::Action> {
            objectives.push(event.objective());
            None
        };
        let solution =
            interval::half_interval::minimize(&f, [0.0, 4.0], &config, observer).unwrap();

        for (step, objective) in solution.steps.iter().zip(&objectives) {
            let center = step.center.map_or(f64::INFINITY, |c| c.fx);
            let best = step.y.fx.min(step.z.fx).min(center);
            assert_eq!(objective.to_bits(), best.to_bits());
        }
    }

    #[test]
    fn observers_compose_by_delegation() {
        let mut log = TraceLog::new("composed");
        let mut stop = StopAfter::new(2);
        let composed = |event: &gradient::Event<'_>| -> Option<gradient::Action> {
            let _: Option<gradient::Action> = log.observe(event);
            stop.observe(event)
        };

        let config = gradient::Config::new(1e-9, 1e-12, 100).unwrap();
        let solution =
            gradient::constant_step::minimize(&BOWL, Vec2::new(1.0, 1.0), &config, composed)
                .unwrap();
        assert_eq!(solution.steps.len(), 2);
    }
}
